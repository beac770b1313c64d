use serde::Deserialize;

use crate::wargaming::TankId;

/// Represents a vehicle from the tankopedia.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct Vehicle {
    pub tank_id: TankId,
    pub name: String,

    #[serde(default)]
    pub images: Option<VehicleImages>,
}

#[derive(Deserialize, Debug, PartialEq, Clone, Default)]
pub struct VehicleImages {
    #[serde(default)]
    pub preview: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn tankopedia_ok() -> Result {
        let vehicles = serde_json::from_str::<HashMap<String, Vehicle>>(
            // language=json
            r#"{"1649":{"images":{"preview":"http:\/\/glossary-ru-static.gcdn.co\/icons\/wotb\/current\/uploaded\/vehicles\/hd_thumbnail\/Van_Helsing.png"},"tank_id":1649,"name":"Helsing"},"64769":{"images":null,"tank_id":64769,"name":"Hellraiser"}}"#,
        )?;
        assert_eq!(vehicles["1649"].name, "Helsing");
        assert_eq!(
            vehicles["1649"].images.as_ref().and_then(|images| images.preview.as_deref()),
            Some("http://glossary-ru-static.gcdn.co/icons/wotb/current/uploaded/vehicles/hd_thumbnail/Van_Helsing.png"),
        );
        assert_eq!(vehicles["64769"].images, None);
        Ok(())
    }
}
