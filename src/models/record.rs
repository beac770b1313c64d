//! Rows of the summary table: one per vehicle an account has ever played.

use std::borrow::Cow;

use phf::phf_map;
use serde::Serialize;

use crate::models::{VehicleAchievements, VehicleStats, Vehicles};
use crate::wargaming::constants::ACHIEVEMENT_IDS;
use crate::wargaming::TankId;

/// Vehicles removed from the game and therefore missing from the encyclopedia.
static REMOVED_VEHICLES: phf::Map<&'static str, &'static str> = phf_map! {
    "545" => "T1",
    "577" => "Renault FT",
    "1329" => "NC-31",
    "3329" => "MC-1",
};

#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub vehicle_id: TankId,
    pub name: String,
    pub preview: String,
    pub hits_percentage: f64,
    pub hits_percentage_string: String,

    /// Achievement IDs, in the display order.
    pub achievements: Vec<&'static str>,
}

/// Falls back to the removed vehicles and then to the bare ID.
pub fn vehicle_name(vehicles: &Vehicles, vehicle_id: TankId) -> Cow<'_, str> {
    let key = vehicle_id.to_string();
    match vehicles.get(&key) {
        Some(vehicle) => Cow::Borrowed(vehicle.name.as_str()),
        None => match REMOVED_VEHICLES.get(key.as_str()) {
            Some(name) => Cow::Borrowed(*name),
            None => Cow::Owned(key),
        },
    }
}

pub fn vehicle_preview(vehicles: &Vehicles, vehicle_id: TankId) -> &str {
    vehicles
        .get(&vehicle_id.to_string())
        .map_or("", |vehicle| vehicle.preview.as_str())
}

/// Joins the vehicle stats with the catalog and the achievements,
/// sorted by the hit percentage in ascending order. Vehicles which have never fired go last.
pub fn build_records(
    stats: &[VehicleStats],
    achievements: &[VehicleAchievements],
    vehicles: &Vehicles,
) -> Vec<Record> {
    let mut records: Vec<Record> = stats
        .iter()
        .map(|stats| {
            let vehicle_achievements: Vec<&'static str> = achievements
                .iter()
                .find(|item| item.vehicle_id == stats.id)
                .map(|item| {
                    ACHIEVEMENT_IDS
                        .iter()
                        .copied()
                        .filter(|achievement_id| item.achievements.contains_key(*achievement_id))
                        .collect()
                })
                .unwrap_or_default();
            Record {
                vehicle_id: stats.id,
                name: vehicle_name(vehicles, stats.id).into_owned(),
                preview: vehicle_preview(vehicles, stats.id).to_string(),
                hits_percentage: stats.hits_percentage,
                hits_percentage_string: stats.hits_percentage_string.clone(),
                achievements: vehicle_achievements,
            }
        })
        .collect();
    records.sort_by(|left, right| {
        let (left, right) = (left.hits_percentage, right.hits_percentage);
        left.is_nan().cmp(&right.is_nan()).then(left.total_cmp(&right))
    });
    records
}
