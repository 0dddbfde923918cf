// 🧾 Ledger Entry - one immutable credit or debit
//
// Entries are created with a timestamp and never edited afterwards.
// Credits usually carry a description, debits never do.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// ENTRY KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    /// Money in (deposit)
    #[serde(rename = "credito")]
    Credit,

    /// Money out (withdrawal)
    #[serde(rename = "debito")]
    Debit,
}

// ============================================================================
// LEDGER ENTRY
// ============================================================================

/// One line of an account statement
///
/// Wire shape: `{ "descricao"?, "valor", "dataCriacao", "tipo" }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Always non-negative; the sign comes from `kind`
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    #[serde(rename = "dataCriacao")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "tipo")]
    pub kind: EntryKind,
}

impl LedgerEntry {
    /// Credit entry stamped with the current time
    pub fn credit(amount: Decimal, description: Option<String>) -> Self {
        Self::at(EntryKind::Credit, amount, description, Utc::now())
    }

    /// Debit entry stamped with the current time
    pub fn debit(amount: Decimal) -> Self {
        Self::at(EntryKind::Debit, amount, None, Utc::now())
    }

    /// Entry with an explicit creation time (imports, tests)
    pub fn at(
        kind: EntryKind,
        amount: Decimal,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        LedgerEntry {
            description,
            amount,
            created_at,
            kind,
        }
    }

    /// Signed contribution of this entry to the balance
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            EntryKind::Credit => self.amount,
            EntryKind::Debit => -self.amount,
        }
    }
}
