//! # Notification Settings
//!
//! The settings the notification service consults before raising a toast.
//! The store only holds them; deciding when to notify is the service's job.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{self, ConfigError};

/// Categories of notifications the user can switch off individually
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    /// A new loader release is available
    DeckyUpdates,
    /// One or more plugins have updates in the store
    PluginUpdates,
}

/// Per-category notification switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub decky_updates: bool,
    pub plugin_updates: bool,
}

impl NotificationSettings {
    /// Value used before the notification service loads the user's settings
    pub const DEFAULT: Self = Self {
        decky_updates: true,
        plugin_updates: true,
    };

    pub fn allows(&self, category: NotificationCategory) -> bool {
        match category {
            NotificationCategory::DeckyUpdates => self.decky_updates,
            NotificationCategory::PluginUpdates => self.plugin_updates,
        }
    }

    /// Load settings from a json/yaml/toml file. Missing keys keep their default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        config::load_from_path(path)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
