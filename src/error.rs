// Domain errors for the account ledger
// Every variant is reported to the caller; none is fatal to the process.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Registration with a national id that is already in the directory
    #[error("customer already registered: {0}")]
    DuplicateCustomer(String),

    /// Request gate could not resolve the national id
    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    /// Withdrawal larger than the current balance
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Sum of the ledger would leave the representable decimal range
    #[error("balance overflow")]
    BalanceOverflow,

    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("invalid statement date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
