// 💳 Account Entity - stable identity with an append-only ledger
//
// "The UUID and the national id are IDENTITY (never change), the name is a VALUE"
//
// - id: generated at registration
// - national_id (cpf): business key used by every lookup
// - ledger: grows only through deposit/withdraw, never reordered or edited

use crate::entities::entry::LedgerEntry;
use crate::error::{LedgerError, Result};
use crate::ledger::{compute_balance, entries_on};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Customer account
///
/// Wire shape: `{ "id", "cpf", "nome", "extrato": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    id: String,

    #[serde(rename = "cpf")]
    national_id: String,

    // ========================================================================
    // VALUES
    // ========================================================================
    #[serde(rename = "nome")]
    name: String,

    #[serde(rename = "extrato")]
    ledger: Vec<LedgerEntry>,
}

impl Account {
    /// Create new account with a fresh UUID and an empty ledger
    pub fn new(national_id: impl Into<String>, name: impl Into<String>) -> Self {
        Account {
            id: uuid::Uuid::new_v4().to_string(),
            national_id: national_id.into(),
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Current balance (recomputed from the ledger)
    pub fn balance(&self) -> Result<Decimal> {
        compute_balance(&self.ledger)
    }

    /// Append a credit entry for any non-negative amount
    ///
    /// A deposit that would push the balance past `Decimal::MAX` is rejected
    /// before it is appended, so the ledger sum always stays representable.
    pub fn deposit(&mut self, amount: Decimal, description: Option<String>) -> Result<&LedgerEntry> {
        ensure_non_negative(amount)?;
        self.balance()?
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        Ok(self.append(LedgerEntry::credit(amount, description)))
    }

    /// Append a debit entry if the balance covers it
    ///
    /// Withdrawing exactly the balance is allowed and leaves it at zero.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<&LedgerEntry> {
        ensure_non_negative(amount)?;

        let available = self.balance()?;
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        Ok(self.append(LedgerEntry::debit(amount)))
    }

    /// Statement for one calendar day (local time)
    pub fn statement_on(&self, date: NaiveDate) -> impl Iterator<Item = &LedgerEntry> {
        entries_on(&self.ledger, date)
    }

    fn append(&mut self, entry: LedgerEntry) -> &LedgerEntry {
        self.ledger.push(entry);
        &self.ledger[self.ledger.len() - 1]
    }
}

fn ensure_non_negative(amount: Decimal) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
