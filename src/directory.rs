// 🗂️ Account Directory - in-memory accounts keyed by national id
//
// Shared across request handlers; cloning the directory shares the store.
// Lookups are a linear scan over the accounts.

use crate::entities::Account;
use crate::error::{LedgerError, Result};
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

// ============================================================================
// DIRECTORY
// ============================================================================

/// All registered accounts
///
/// Invariant: no two accounts share a national id.
#[derive(Clone, Default)]
pub struct AccountDirectory {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl AccountDirectory {
    /// Create new empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account, rejecting a national id that already exists
    pub fn register(&self, national_id: &str, name: &str) -> Result<Account> {
        let mut accounts = self.write();

        if accounts.iter().any(|a| a.national_id() == national_id) {
            return Err(LedgerError::DuplicateCustomer(national_id.to_string()));
        }

        let account = Account::new(national_id, name);
        info!(account_id = account.id(), cpf = national_id, "account registered");
        accounts.push(account.clone());

        Ok(account)
    }

    /// Snapshot of one account
    pub fn find_by_national_id(&self, national_id: &str) -> Result<Account> {
        self.read()
            .iter()
            .find(|a| a.national_id() == national_id)
            .cloned()
            .ok_or_else(|| LedgerError::CustomerNotFound(national_id.to_string()))
    }

    /// Lock the directory and hand out a mutable handle on one account
    ///
    /// The write lock is held until the guard is dropped, so anything done
    /// through the guard (e.g. balance check + debit) is atomic.
    pub fn resolve(&self, national_id: &str) -> Result<AccountGuard<'_>> {
        let accounts = self.write();
        let index = accounts
            .iter()
            .position(|a| a.national_id() == national_id)
            .ok_or_else(|| LedgerError::CustomerNotFound(national_id.to_string()))?;

        Ok(AccountGuard { accounts, index })
    }

    /// All accounts in registration order
    pub fn all_accounts(&self) -> Vec<Account> {
        self.read().clone()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    pub fn contains(&self, national_id: &str) -> bool {
        self.read().iter().any(|a| a.national_id() == national_id)
    }

    // Mutations are single push/assign/retain operations, so a panic in another
    // holder cannot leave the vector half-updated; recover the data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Account>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Account>> {
        self.accounts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// ACCOUNT GUARD
// ============================================================================

/// Exclusive handle on one account inside the locked directory
pub struct AccountGuard<'a> {
    accounts: RwLockWriteGuard<'a, Vec<Account>>,
    index: usize,
}

impl AccountGuard<'_> {
    /// Overwrite the display name
    pub fn rename(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        info!(account_id = self.id(), name = %new_name, "account renamed");
        self.set_name(new_name);
    }

    /// Delete this account from the directory, returning the remaining accounts
    ///
    /// Matches on the account id, never on a position.
    pub fn remove(mut self) -> Vec<Account> {
        let id = self.id().to_string();
        self.accounts.retain(|a| a.id() != id);
        info!(account_id = %id, remaining = self.accounts.len(), "account removed");
        self.accounts.clone()
    }
}

impl Deref for AccountGuard<'_> {
    type Target = Account;

    fn deref(&self) -> &Account {
        &self.accounts[self.index]
    }
}

impl DerefMut for AccountGuard<'_> {
    fn deref_mut(&mut self) -> &mut Account {
        &mut self.accounts[self.index]
    }
}

// ============================================================================
// TESTS
// ============================================================================
