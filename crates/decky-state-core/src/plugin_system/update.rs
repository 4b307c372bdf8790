use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A plugin version published in the plugin store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePluginVersion {
    /// Version name, e.g. "1.4.2"
    pub name: String,
    /// Artifact hash used by the installer
    pub hash: String,
    /// Download location of the artifact, when not derived from the hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
    /// Publication timestamp as reported by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl StorePluginVersion {
    pub fn new(name: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hash: hash.into(),
            artifact: None,
            created: None,
        }
    }
}

/// Plugin name to available update, as computed by the updater
pub type PluginUpdateMapping = BTreeMap<String, StorePluginVersion>;
