//! Drop the server-side data the application does not track.

use serde_json::Value;

use crate::models::Account;
use crate::prelude::*;
use crate::wargaming::constants::{is_supported_achievement, SEARCH_RESULTS_LIMIT};
use crate::wargaming::{FoundAccount, TankAchievements};

/// Keeps the descriptions of the supported achievements only.
pub fn filter_achievement_descriptions<V>(data: AHashMap<String, V>) -> AHashMap<String, V> {
    data.into_iter()
        .filter(|(achievement_id, _)| is_supported_achievement(achievement_id))
        .collect()
}

/// Keeps the supported achievements only, the rest of the records is left as is.
pub fn filter_vehicle_achievements(mut data: Vec<TankAchievements>) -> Vec<TankAchievements> {
    for item in &mut data {
        item.achievements
            .retain(|achievement_id, _| is_supported_achievement(achievement_id));
    }
    data
}

/// The API returns `null` instead of an empty array for an account without vehicles.
pub fn to_array(data: Value) -> Vec<Value> {
    match data {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Excludes the accounts which are already tracked.
pub fn filter_search_results(data: Vec<FoundAccount>, tracked: &[Account]) -> Vec<FoundAccount> {
    let tracked_ids: Vec<i64> = tracked
        .iter()
        .filter(|account| account.is_permanent())
        .filter_map(|account| account.id.parse().ok())
        .collect();
    data.into_iter()
        .filter(|item| !tracked_ids.contains(&i64::from(item.id)))
        .collect()
}

pub fn limit_search_results(mut data: Vec<FoundAccount>) -> Vec<FoundAccount> {
    data.truncate(SEARCH_RESULTS_LIMIT);
    data
}
