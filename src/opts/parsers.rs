use anyhow::{anyhow, ensure};

use crate::prelude::*;
use crate::wargaming;

/// Positive numeric account ID, kept as the string the API keys its data by.
pub fn account_id(value: &str) -> Result<String> {
    match value.parse::<wargaming::AccountId>()? {
        account_id if account_id >= 1 => Ok(account_id.to_string()),
        account_id => Err(anyhow!("{} is an invalid account ID", account_id)),
    }
}

/// The API refuses the queries shorter than 3 characters.
pub fn search_query(value: &str) -> Result<String> {
    let value = value.trim();
    ensure!(value.chars().count() > 2, "expected at least 3 characters");
    Ok(value.to_string())
}
