use super::container::Container;
use crate::config::Config;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const THEME_KEY: &str = "theme";

/// Hardware tuning for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotorSettings {
    pub motor_speed: u32,
    pub trigger_threshold: u32,
}

impl Default for MotorSettings {
    fn default() -> Self {
        Self {
            motor_speed: Config::DEFAULT_MOTOR_SPEED,
            trigger_threshold: Config::DEFAULT_TRIGGER_THRESHOLD,
        }
    }
}

/// Display theme, stored next to the container settings.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// The device's settings object: container numbers map to motor settings and
/// a sibling `theme` key holds the global theme.
///
/// ```json
/// { "1": { "motorSpeed": 200, "triggerThreshold": 1500 }, "theme": "dark" }
/// ```
///
/// Keys this panel does not understand are kept and written back unchanged.
/// That includes a `theme` other than `"light"` or `"dark"` and a container
/// entry that is not an object of motor settings; both read as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsMap {
    containers: BTreeMap<Container, MotorSettings>,
    theme: Option<Theme>,
    extra: Map<String, Value>,
}

impl SettingsMap {
    /// Stored settings for a container, if the device has any.
    pub fn get(&self, container: Container) -> Option<MotorSettings> {
        self.containers.get(&container).copied()
    }

    /// Stored settings or the documented defaults. Defaults are not written back.
    pub fn get_or_default(&self, container: Container) -> MotorSettings {
        self.get(container).unwrap_or_default()
    }

    pub fn set(&mut self, container: Container, settings: MotorSettings) {
        self.containers.insert(container, settings);
    }

    /// Stored theme; `None` when the device has never saved one.
    pub fn stored_theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty() && self.theme.is_none() && self.extra.is_empty()
    }
}

impl Serialize for SettingsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut object = self.extra.clone();
        for (container, settings) in &self.containers {
            let value = serde_json::to_value(settings).map_err(serde::ser::Error::custom)?;
            object.insert(container.number().to_string(), value);
        }
        if let Some(theme) = self.theme {
            object.insert(THEME_KEY.to_string(), Value::from(theme.as_str()));
        }
        object.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SettingsMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let mut map = SettingsMap::default();

        for (key, value) in object {
            if key == THEME_KEY {
                if let Ok(theme) = Theme::deserialize(&value) {
                    map.theme = Some(theme);
                    continue;
                }
            } else if let Ok(container) = key.parse::<Container>() {
                if let Some(settings) = read_motor_settings(&value) {
                    map.containers.insert(container, settings);
                    continue;
                }
            }
            map.extra.insert(key, value);
        }

        Ok(map)
    }
}

fn read_motor_settings(value: &Value) -> Option<MotorSettings> {
    if !value.is_object() {
        return None;
    }
    MotorSettings::deserialize(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_container_settings_take_defaults() {
        let map: SettingsMap = serde_json::from_str(r#"{"2": {"motorSpeed": 90}}"#).unwrap();
        assert_eq!(
            map.get(Container::Two),
            Some(MotorSettings {
                motor_speed: 90,
                trigger_threshold: 1500
            })
        );
        assert_eq!(map.get(Container::One), None);
        assert_eq!(map.get_or_default(Container::One).motor_speed, 128);
    }

    #[test]
    fn test_unknown_keys_survive_a_save() {
        let json = r#"{"1": {"motorSpeed": 10, "triggerThreshold": 20}, "wifi": {"ssid": "pills"}}"#;
        let map: SettingsMap = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["wifi"]["ssid"], "pills");
        assert_eq!(value["1"]["motorSpeed"], 10);
        assert!(value.get("theme").is_none());
    }

    #[test]
    fn test_unrecognized_theme_reads_as_light_and_is_kept() {
        for raw in [r#""Dark""#, r#""sepia""#, "null", "1"] {
            let json = format!(r#"{{"theme": {raw}}}"#);
            let map: SettingsMap = serde_json::from_str(&json).unwrap();
            assert_eq!(map.stored_theme(), None);
            assert_eq!(map.theme(), Theme::Light);

            let value = serde_json::to_value(&map).unwrap();
            assert_eq!(value["theme"], serde_json::from_str::<Value>(raw).unwrap());
        }
    }

    #[test]
    fn test_setting_theme_replaces_unrecognized_value() {
        let mut map: SettingsMap = serde_json::from_str(r#"{"theme": "Dark"}"#).unwrap();
        map.set_theme(Theme::Dark);
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value, serde_json::json!({"theme": "dark"}));
    }

    #[test]
    fn test_malformed_container_entries_read_as_unset() {
        let json = r#"{"1": null, "2": "fast", "3": {"motorSpeed": "high"}, "4": {"motorSpeed": 70}}"#;
        let mut map: SettingsMap = serde_json::from_str(json).unwrap();

        assert_eq!(map.get(Container::One), None);
        assert_eq!(map.get(Container::Two), None);
        assert_eq!(map.get(Container::Three), None);
        assert_eq!(map.get_or_default(Container::One), MotorSettings::default());
        assert_eq!(map.get(Container::Four).map(|s| s.motor_speed), Some(70));

        // Untouched entries go back as they came; a saved one replaces its slot
        map.set(Container::Two, MotorSettings::default());
        let value = serde_json::to_value(&map).unwrap();
        assert!(value["1"].is_null());
        assert_eq!(value["3"]["motorSpeed"], "high");
        assert_eq!(value["2"]["motorSpeed"], 128);
    }
}
