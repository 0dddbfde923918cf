// Conta Ledger - Core Library
// Exposes the account model for the API server and tests

pub mod directory;
pub mod entities;
pub mod error;
pub mod gate;
pub mod ledger;

// HTTP transport (server feature)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

// Re-export commonly used types
pub use directory::{AccountDirectory, AccountGuard};
pub use entities::{Account, EntryKind, LedgerEntry};
pub use error::LedgerError;
pub use ledger::{compute_balance, entries_on, entries_on_in, parse_statement_date};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
