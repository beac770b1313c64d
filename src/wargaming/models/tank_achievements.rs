use serde::Deserialize;

use crate::prelude::*;
use crate::wargaming::TankId;

#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct TankAchievements {
    pub tank_id: TankId,

    /// Achievement ID to its count.
    #[serde(default)]
    pub achievements: AHashMap<String, i32>,
}
