// 🚪 Request Gate - resolve the national id before any account-scoped operation
//
// Handlers call `resolve` first and bail out on error, so nothing is
// mutated for an unknown customer.

use crate::directory::{AccountDirectory, AccountGuard};
use crate::error::Result;
use tracing::{debug, warn};

/// Resolve a national id to a locked account handle or `CustomerNotFound`
pub fn resolve<'a>(directory: &'a AccountDirectory, national_id: &str) -> Result<AccountGuard<'a>> {
    match directory.resolve(national_id) {
        Ok(account) => {
            debug!(cpf = national_id, account_id = account.id(), "request gate resolved account");
            Ok(account)
        }
        Err(e) => {
            warn!(cpf = national_id, "request gate rejected: {}", e);
            Err(e)
        }
    }
}
