use phf::{phf_ordered_set, OrderedSet};

/// Public application ID, the API does not require any authentication besides it.
pub const DEFAULT_APPLICATION_ID: &str = "b9752a33cbf67c03dc224117eec13fc3";

pub const DEFAULT_SERVER: &str = "https://api.wotblitz.ru";

/// World of Tanks Blitz API section.
pub const API_VERSION: &str = "wotb";

/// Maximum number of the account search results shown to a user.
pub const SEARCH_RESULTS_LIMIT: usize = 10;

/// Achievements displayed in the summary table, in the column order.
/// Everything else the API returns is discarded.
pub static ACHIEVEMENT_IDS: OrderedSet<&'static str> = phf_ordered_set! {
    "markOfMastery",
    "markOfMasteryI",
    "markOfMasteryII",
    "markOfMasteryIII",
    "warrior",
    "sniper",
    "titleSniper",
    "mainGun",
};

#[inline]
pub fn is_supported_achievement(achievement_id: &str) -> bool {
    ACHIEVEMENT_IDS.contains(achievement_id)
}
