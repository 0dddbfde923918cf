// Entity Models
//
// - LedgerEntry: one immutable credit or debit
// - Account: stable identity (UUID + national id) and an append-only ledger

pub mod account;
pub mod entry;

pub use account::Account;
pub use entry::{EntryKind, LedgerEntry};
