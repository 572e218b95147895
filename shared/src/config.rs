use serde::{Deserialize, Serialize};

/// Widget-level settings
///
/// The defaults match the storage key and export file names already in
/// use, so existing stored data keeps loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Key of the single storage record holding the event collection
    pub storage_key: String,
    /// Export file names are `<prefix>-<year>-<month>.<ext>`
    pub export_prefix: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            storage_key: "events".to_string(),
            export_prefix: "events".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overrides_keep_defaults() {
        let config = serde_json::from_str::<CalendarConfig>(r#"{"storage_key":"team-events"}"#).unwrap();
        assert_eq!(config.storage_key, "team-events");
        assert_eq!(config.export_prefix, "events");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(serde_json::from_str::<CalendarConfig>("{}").unwrap(), CalendarConfig::default());
    }
}
