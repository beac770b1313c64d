use serde::Deserialize;

use crate::wargaming::AccountId;

/// Wargaming.net account information. The endpoint always returns the full record,
/// only the account-wide totals are kept.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct AccountInfo {
    #[serde(rename = "account_id")]
    pub id: AccountId,

    pub nickname: String,

    pub statistics: AccountInfoStatistics,
}

#[derive(Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct AccountInfoStatistics {
    pub all: AccountInfoTotals,
}

#[derive(Deserialize, Debug, PartialEq, Clone, Copy, Default)]
pub struct AccountInfoTotals {
    pub battles: i32,
    pub wins: i32,
    pub damage_dealt: i64,
    pub shots: i32,
    pub hits: i32,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn account_info_map_ok() -> Result {
        let mut map = serde_json::from_str::<HashMap<String, Option<AccountInfo>>>(
            // language=json
            r#"{"5589968":{"statistics":{"clan":{"spotted":0,"max_frags_tank_id":0,"hits":0,"frags":0,"max_xp":0,"max_xp_tank_id":0,"wins":0,"losses":0,"capture_points":0,"battles":0,"damage_dealt":0,"damage_received":0,"max_frags":0,"shots":0,"frags8p":0,"xp":0,"win_and_survived":0,"survived_battles":0,"dropped_capture_points":0},"all":{"spotted":9100,"max_frags_tank_id":3697,"hits":72822,"frags":8197,"max_xp":2292,"max_xp_tank_id":22817,"wins":5318,"losses":4327,"capture_points":5447,"battles":9676,"damage_dealt":10427192,"damage_received":8611546,"max_frags":6,"shots":93254,"frags8p":2760,"xp":6743639,"win_and_survived":3772,"survived_battles":3908,"dropped_capture_points":5882},"frags":null},"account_id":5589968,"created_at":1415225091,"updated_at":1635246495,"private":null,"last_battle_time":1635269048,"nickname":"eigenein"}}"#,
        )?;
        let info = map.remove("5589968").flatten().ok_or_else(|| anyhow!("missing account"))?;
        assert_eq!(info.nickname, "eigenein");
        assert_eq!(
            info.statistics.all,
            AccountInfoTotals {
                battles: 9676,
                wins: 5318,
                damage_dealt: 10427192,
                shots: 93254,
                hits: 72822,
            },
        );
        Ok(())
    }
}
