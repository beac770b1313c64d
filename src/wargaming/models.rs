//! Server-side records, as requested with the `fields` parameter.

use serde::Deserialize;

pub use self::account_info::*;
pub use self::achievement::*;
pub use self::tank_achievements::*;
pub use self::tank_statistics::*;
pub use self::vehicle::*;

pub mod account_info;
pub mod achievement;
pub mod tank_achievements;
pub mod tank_statistics;
pub mod vehicle;

pub type AccountId = i32;

pub type TankId = i32;

/// Search accounts item.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct FoundAccount {
    pub nickname: String,

    #[serde(rename = "account_id")]
    pub id: AccountId,
}
