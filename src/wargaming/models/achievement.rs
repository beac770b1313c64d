use serde::Deserialize;

/// Achievement description from the encyclopedia.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct AchievementDescription {
    pub achievement_id: String,

    /// Full name, followed by ` (<achievement_id>)`.
    pub name: String,

    #[serde(default)]
    pub image: Option<String>,
}
