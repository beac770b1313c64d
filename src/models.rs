//! Internal data model consumed by the display layer.

use serde::Serialize;

pub use self::account::*;
pub use self::record::*;

use crate::prelude::*;
use crate::wargaming::TankId;

pub mod account;
pub mod record;

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct AchievementDescription {
    pub id: String,
    pub image: String,
    pub name: String,
}

/// Achievement descriptions by achievement ID.
pub type AchievementDescriptions = AHashMap<String, AchievementDescription>;

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct VehicleInfo {
    pub id: TankId,
    pub name: String,

    /// Thumbnail URL, empty when the vehicle has none.
    pub preview: String,
}

/// Vehicle catalog by the vehicle ID string.
pub type Vehicles = AHashMap<String, VehicleInfo>;

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAchievements {
    pub vehicle_id: TankId,
    pub achievements: AHashMap<String, i32>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStats {
    pub id: TankId,

    /// `NaN` for a vehicle which has never fired.
    pub hits_percentage: f64,

    pub hits_percentage_string: String,
}

/// Account-wide totals.
#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub battles: i32,
    pub damage_dealt: i64,
    pub hits: i32,
    pub shots: i32,
    pub wins: i32,
}

/// Selectable item, a search result for instance.
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct SearchOption {
    pub title: String,
    pub value: String,
}

/// Everything fetched for a selected account.
#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: String,

    /// `None` when the account does not exist.
    pub info: Option<AccountInfo>,

    pub achievements: Vec<VehicleAchievements>,
    pub stats: Vec<VehicleStats>,
}
