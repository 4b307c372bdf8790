#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::notification::{NotificationCategory, NotificationSettings};

    #[test]
    fn test_default_enables_everything() {
        let settings = NotificationSettings::default();
        assert_eq!(settings, NotificationSettings::DEFAULT);
        assert!(settings.allows(NotificationCategory::DeckyUpdates));
        assert!(settings.allows(NotificationCategory::PluginUpdates));
    }

    #[test]
    fn test_allows_follows_flags() {
        let settings = NotificationSettings { decky_updates: false, plugin_updates: true };
        assert!(!settings.allows(NotificationCategory::DeckyUpdates));
        assert!(settings.allows(NotificationCategory::PluginUpdates));
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: NotificationSettings = serde_json::from_str(r#"{"pluginUpdates": false}"#).unwrap();
        assert!(settings.decky_updates, "Missing key falls back to default");
        assert!(!settings.plugin_updates);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings: NotificationSettings =
            serde_json::from_str(r#"{"deckyUpdates": false, "soundEnabled": true}"#).unwrap();
        assert!(!settings.decky_updates);
        assert!(settings.plugin_updates);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(NotificationSettings::DEFAULT).unwrap();
        assert_eq!(value, serde_json::json!({"deckyUpdates": true, "pluginUpdates": true}));
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("notifications.json");
        fs::write(&path, r#"{"deckyUpdates": false}"#).unwrap();

        let settings = NotificationSettings::load(&path).unwrap();
        assert_eq!(settings, NotificationSettings { decky_updates: false, plugin_updates: true });
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("notifications.toml");
        fs::write(&path, "pluginUpdates = false\n").unwrap();

        let settings = NotificationSettings::load(&path).unwrap();
        assert!(settings.decky_updates);
        assert!(!settings.plugin_updates);
    }
}
