//! Conversions of the filtered server records into the internal data model.

use crate::models;
use crate::wargaming;

impl From<wargaming::AchievementDescription> for models::AchievementDescription {
    /// Cuts the ` (<achievement_id>)` suffix off the name. The match is exact,
    /// any other formatting leaves the name untouched.
    fn from(raw: wargaming::AchievementDescription) -> Self {
        let suffix = format!(" ({})", raw.achievement_id);
        Self {
            name: raw.name.replacen(&suffix, "", 1),
            image: raw.image.unwrap_or_default(),
            id: raw.achievement_id,
        }
    }
}

impl From<wargaming::Vehicle> for models::VehicleInfo {
    fn from(raw: wargaming::Vehicle) -> Self {
        Self {
            id: raw.tank_id,
            name: raw.name,
            preview: raw
                .images
                .and_then(|images| images.preview)
                .unwrap_or_default(),
        }
    }
}

impl From<wargaming::TankAchievements> for models::VehicleAchievements {
    fn from(raw: wargaming::TankAchievements) -> Self {
        Self {
            vehicle_id: raw.tank_id,
            achievements: raw.achievements,
        }
    }
}

impl From<wargaming::TankStatistics> for models::VehicleStats {
    /// Zero shots give `NaN`.
    fn from(raw: wargaming::TankStatistics) -> Self {
        let hits_percentage = 100.0 * (f64::from(raw.all.hits) / f64::from(raw.all.shots));
        Self {
            id: raw.tank_id,
            hits_percentage,
            hits_percentage_string: to_fixed_2(hits_percentage),
        }
    }
}

/// Two decimals, ties rounded away from zero like JavaScript's `toFixed(2)`.
///
/// `{:.2}` rounds the exact ties to even. A finite `f64` lies exactly on a
/// third-decimal 5 only when it is an odd number of eighths.
fn to_fixed_2(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let hundredths = (value.abs() * 100.0).ceil().copysign(value);
        format!("{:.2}", hundredths / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

impl From<wargaming::FoundAccount> for models::SearchOption {
    fn from(raw: wargaming::FoundAccount) -> Self {
        Self {
            title: raw.nickname,
            value: raw.id.to_string(),
        }
    }
}

impl From<wargaming::AccountInfo> for models::AccountInfo {
    fn from(raw: wargaming::AccountInfo) -> Self {
        let totals = raw.statistics.all;
        Self {
            battles: totals.battles,
            damage_dealt: totals.damage_dealt,
            hits: totals.hits,
            shots: totals.shots,
            wins: totals.wins,
        }
    }
}

pub fn to_achievement_descriptions<I>(data: I) -> models::AchievementDescriptions
where
    I: IntoIterator<Item = (String, wargaming::AchievementDescription)>,
{
    data.into_iter()
        .map(|(achievement_id, raw)| (achievement_id, raw.into()))
        .collect()
}

pub fn to_vehicle_info<I>(data: I) -> models::Vehicles
where
    I: IntoIterator<Item = (String, wargaming::Vehicle)>,
{
    data.into_iter()
        .map(|(tank_id, raw)| (tank_id, raw.into()))
        .collect()
}

pub fn to_vehicle_achievements(data: Vec<wargaming::TankAchievements>) -> Vec<models::VehicleAchievements> {
    data.into_iter().map(Into::into).collect()
}

pub fn to_vehicles_stats(data: Vec<wargaming::TankStatistics>) -> Vec<models::VehicleStats> {
    data.into_iter().map(Into::into).collect()
}

pub fn to_search_options(data: Vec<wargaming::FoundAccount>) -> Vec<models::SearchOption> {
    data.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn achievement(achievement_id: &str, name: &str) -> wargaming::AchievementDescription {
        wargaming::AchievementDescription {
            achievement_id: achievement_id.to_string(),
            name: name.to_string(),
            image: Some(format!(
                "http://glossary-ru-static.gcdn.co/icons/wotb/current/achievements/{}.png",
                achievement_id,
            )),
        }
    }

    #[test]
    fn achievement_description_ok() {
        let description = models::AchievementDescription::from(achievement(
            "markOfMastery",
            "Знак классности \n«Мастер» (markOfMastery)",
        ));
        assert_eq!(
            description,
            models::AchievementDescription {
                id: "markOfMastery".to_string(),
                image: "http://glossary-ru-static.gcdn.co/icons/wotb/current/achievements/markOfMastery.png".to_string(),
                name: "Знак классности \n«Мастер»".to_string(),
            },
        );
    }

    #[test]
    fn achievement_suffix_exact_match_only_ok() {
        let description =
            models::AchievementDescription::from(achievement("sniper", "«Снайпер»  [sniper]"));
        assert_eq!(description.name, "«Снайпер»  [sniper]");
    }

    #[test]
    fn achievement_id_is_taken_from_record_ok() -> Result {
        let data = vec![("mainGun".to_string(), achievement("MainGun", "«Основной калибр» (MainGun)"))];
        let descriptions = to_achievement_descriptions(data);
        let description = descriptions.get("mainGun").ok_or_else(|| anyhow!("missing"))?;
        assert_eq!(description.id, "MainGun");
        assert_eq!(description.name, "«Основной калибр»");
        Ok(())
    }

    #[test]
    fn missing_image_ok() {
        let mut raw = achievement("warrior", "«Воин» (warrior)");
        raw.image = None;
        assert_eq!(models::AchievementDescription::from(raw).image, "");
    }

    #[test]
    fn vehicle_info_ok() -> Result {
        let data = vec![(
            "1".to_string(),
            wargaming::Vehicle {
                tank_id: 1,
                name: "Т-34".to_string(),
                images: Some(wargaming::VehicleImages {
                    preview: Some("http://glossary-ru-static.gcdn.co/icons/wotb/current/uploaded/vehicles/hd_thumbnail/T-34.png".to_string()),
                }),
            },
        )];
        let vehicles = to_vehicle_info(data);
        assert_eq!(
            vehicles.get("1").ok_or_else(|| anyhow!("missing"))?,
            &models::VehicleInfo {
                id: 1,
                name: "Т-34".to_string(),
                preview: "http://glossary-ru-static.gcdn.co/icons/wotb/current/uploaded/vehicles/hd_thumbnail/T-34.png".to_string(),
            },
        );
        Ok(())
    }

    #[test]
    fn vehicle_without_preview_ok() {
        let info = models::VehicleInfo::from(wargaming::Vehicle {
            tank_id: 64769,
            name: "Hellraiser".to_string(),
            images: None,
        });
        assert_eq!(info.preview, "");
    }

    #[test]
    fn vehicles_stats_ok() {
        let stats = to_vehicles_stats(vec![wargaming::TankStatistics {
            tank_id: 1,
            all: wargaming::TankShots {
                hits: 515,
                shots: 596,
            },
        }]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].id, 1);
        assert!((stats[0].hits_percentage - 86.40939597315436).abs() < 1e-9);
        assert_eq!(stats[0].hits_percentage_string, "86.41");
    }

    #[test]
    fn zero_shots_is_nan_ok() {
        let stats = models::VehicleStats::from(wargaming::TankStatistics {
            tank_id: 1,
            all: wargaming::TankShots::default(),
        });
        assert!(stats.hits_percentage.is_nan());
        assert_eq!(stats.hits_percentage_string, "NaN");
    }

    #[test]
    fn hits_percentage_tie_rounds_up_ok() {
        let stats = models::VehicleStats::from(wargaming::TankStatistics {
            tank_id: 1,
            all: wargaming::TankShots { hits: 1, shots: 32 },
        });
        assert_eq!(stats.hits_percentage, 3.125);
        assert_eq!(stats.hits_percentage_string, "3.13");
    }

    #[test]
    fn to_fixed_2_ok() {
        assert_eq!(to_fixed_2(3.125), "3.13");
        assert_eq!(to_fixed_2(-3.125), "-3.13");
        assert_eq!(to_fixed_2(0.625), "0.63");
        assert_eq!(to_fixed_2(100.0), "100.00");
        assert_eq!(to_fixed_2(0.0), "0.00");
        assert_eq!(to_fixed_2(1.005), "1.00");
        assert_eq!(to_fixed_2(86.40939597315436), "86.41");
        assert_eq!(to_fixed_2(f64::NAN), "NaN");
        assert_eq!(to_fixed_2(f64::INFINITY), "Infinity");
    }

    #[test]
    fn vehicle_achievements_ok() {
        let achievements = to_vehicle_achievements(vec![wargaming::TankAchievements {
            tank_id: 2561,
            achievements: [("markOfMastery".to_string(), 2)].into_iter().collect(),
        }]);
        assert_eq!(achievements.len(), 1);
        assert_eq!(achievements[0].vehicle_id, 2561);
        assert_eq!(achievements[0].achievements.get("markOfMastery"), Some(&2));
    }

    #[test]
    fn search_options_ok() {
        let options = to_search_options(vec![wargaming::FoundAccount {
            nickname: "meaning".to_string(),
            id: 42,
        }]);
        assert_eq!(
            options,
            vec![models::SearchOption {
                title: "meaning".to_string(),
                value: "42".to_string(),
            }],
        );
    }

    #[test]
    fn account_info_ok() {
        let info = models::AccountInfo::from(wargaming::AccountInfo {
            id: 1,
            nickname: "eigenein".to_string(),
            statistics: wargaming::AccountInfoStatistics {
                all: wargaming::AccountInfoTotals {
                    battles: 1,
                    wins: 1,
                    damage_dealt: 1,
                    shots: 1,
                    hits: 1,
                },
            },
        });
        assert_eq!(
            info,
            models::AccountInfo {
                battles: 1,
                damage_dealt: 1,
                hits: 1,
                shots: 1,
                wins: 1,
            },
        );
    }
}
