//! Tracked accounts, owned and persisted by the caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Marks the ID of an account added by a user but not yet looked up.
pub const TEMPORARY_ID_PATTERN: &str = "NewAccount";

/// Display name prefix of an account added by a user but not yet looked up.
pub const TEMPORARY_NAME_PATTERN: &str = "Новая учетная запись";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates a placeholder account numbered after the existing placeholders.
    pub fn next_temporary(accounts: &[Account]) -> Self {
        let number = accounts
            .iter()
            .filter_map(Account::temporary_number)
            .max()
            .map_or(1, |number| number + 1);
        Self::new(
            format!("{}{}", TEMPORARY_ID_PATTERN, number),
            format!("{} {}", TEMPORARY_NAME_PATTERN, number),
        )
    }

    #[inline]
    pub fn is_permanent(&self) -> bool {
        account_id_is_permanent(&self.id)
    }

    /// Number following the temporary ID pattern, wherever the pattern is in the ID.
    fn temporary_number(&self) -> Option<u32> {
        let (_, number) = self.id.split_once(TEMPORARY_ID_PATTERN)?;
        number.parse().ok()
    }
}

#[inline]
pub fn account_id_is_permanent(account_id: &str) -> bool {
    !account_id.contains(TEMPORARY_ID_PATTERN)
}

pub fn count_permanent_accounts(accounts: &[Account]) -> usize {
    accounts.iter().filter(|account| account.is_permanent()).count()
}

/// Reads the tracked accounts from a JSON array of `{"id": …, "name": …}`.
#[instrument(level = "debug")]
pub fn load_accounts(path: &Path) -> Result<Vec<Account>> {
    let blob = std::fs::read(path)
        .with_context(|| format!("failed to read the accounts from `{}`", path.display()))?;
    let accounts: Vec<Account> =
        serde_json::from_slice(&blob).context("failed to parse the accounts")?;
    debug!(n_accounts = accounts.len(), "loaded");
    Ok(accounts)
}
