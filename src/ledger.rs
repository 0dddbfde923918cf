// 📒 Ledger math - Balance Calculator + Statement Filter
//
// Pure functions over a slice of entries. Nothing here is cached:
// ledgers are small and the balance is recomputed on every withdrawal.

use crate::entities::LedgerEntry;
use crate::error::{LedgerError, Result};
use chrono::{Local, NaiveDate, TimeZone};
use rust_decimal::Decimal;

/// Wire format of the `date` query parameter
pub const STATEMENT_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// BALANCE
// ============================================================================

/// Credits minus debits, folded left to right from zero
///
/// Fails with `BalanceOverflow` instead of panicking when a partial sum
/// leaves the `Decimal` range.
pub fn compute_balance(ledger: &[LedgerEntry]) -> Result<Decimal> {
    ledger.iter().try_fold(Decimal::ZERO, |acc, entry| {
        acc.checked_add(entry.signed_amount())
            .ok_or(LedgerError::BalanceOverflow)
    })
}

// ============================================================================
// STATEMENT FILTER
// ============================================================================

/// Entries created on `date` in the server's local time zone, in ledger order
pub fn entries_on(ledger: &[LedgerEntry], date: NaiveDate) -> impl Iterator<Item = &LedgerEntry> {
    entries_on_in(ledger, date, &Local)
}

/// Entries whose creation time, seen from `tz` and truncated to the day, equals `date`
pub fn entries_on_in<'a, Tz: TimeZone>(
    ledger: &'a [LedgerEntry],
    date: NaiveDate,
    tz: &'a Tz,
) -> impl Iterator<Item = &'a LedgerEntry> + 'a {
    ledger
        .iter()
        .filter(move |entry| entry.created_at.with_timezone(tz).date_naive() == date)
}

/// Parse `YYYY-MM-DD`
pub fn parse_statement_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), STATEMENT_DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}
