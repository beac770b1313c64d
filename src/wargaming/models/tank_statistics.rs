use serde::Deserialize;

use crate::wargaming::TankId;

#[derive(Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct TankStatistics {
    pub tank_id: TankId,
    pub all: TankShots,
}

/// Random battles shooting totals.
#[derive(Deserialize, Debug, PartialEq, Clone, Copy, Default)]
pub struct TankShots {
    pub hits: i32,
    pub shots: i32,
}
