use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::notification::NotificationSettings;
use crate::plugin_system::{
    DisabledPlugin, InstalledPlugin, Plugin, PluginUpdateMapping, StorePluginVersion, VersionInfo,
};

/// Identity of the user the loader runs as, set once per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    /// Home directory of that user
    pub path: PathBuf,
}

impl UserInfo {
    pub fn new(username: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            username: username.into(),
            path: path.into(),
        }
    }
}

/// Point-in-time copy of every store field.
///
/// Collections are shared behind `Arc` and the store only ever swaps them for
/// new ones, so a snapshot never changes after it has been taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicDeckyState {
    pub plugins: Arc<[Plugin]>,
    pub disabled_plugins: Arc<[DisabledPlugin]>,
    /// Always `plugins` followed by `disabled_plugins`
    pub installed_plugins: Arc<[InstalledPlugin]>,
    pub plugin_order: Arc<[String]>,
    pub frozen_plugins: Arc<[String]>,
    pub hidden_plugins: Arc<[String]>,
    pub active_plugin: Option<Plugin>,
    pub updates: Option<Arc<PluginUpdateMapping>>,
    pub has_loader_update: bool,
    pub is_loader_updating: bool,
    pub version_info: Option<Arc<VersionInfo>>,
    pub notification_settings: NotificationSettings,
    pub user_info: Option<Arc<UserInfo>>,
}

impl PublicDeckyState {
    pub fn is_frozen(&self, name: &str) -> bool {
        self.frozen_plugins.iter().any(|frozen| frozen == name)
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden_plugins.iter().any(|hidden| hidden == name)
    }

    /// Available update for a plugin, if the updater reported one
    pub fn update_for(&self, name: &str) -> Option<&StorePluginVersion> {
        self.updates.as_deref().and_then(|updates| updates.get(name))
    }

    /// Plugins sorted by `plugin_order`. Plugins missing from the order keep
    /// their relative position after the ordered ones.
    pub fn ordered_plugins(&self) -> Vec<&Plugin> {
        let mut ordered: Vec<&Plugin> = self.plugins.iter().collect();
        ordered.sort_by_key(|plugin| {
            self.plugin_order
                .iter()
                .position(|name| *name == plugin.name)
                .unwrap_or(usize::MAX)
        });
        ordered
    }
}

impl Default for PublicDeckyState {
    fn default() -> Self {
        Self {
            plugins: Arc::from([]),
            disabled_plugins: Arc::from([]),
            installed_plugins: Arc::from([]),
            plugin_order: Arc::from([]),
            frozen_plugins: Arc::from([]),
            hidden_plugins: Arc::from([]),
            active_plugin: None,
            updates: None,
            has_loader_update: false,
            is_loader_updating: false,
            version_info: None,
            notification_settings: NotificationSettings::DEFAULT,
            user_info: None,
        }
    }
}
