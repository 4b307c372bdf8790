use std::path::Path;

use decky_state_core::config;
use decky_state_core::notification::NotificationSettings;
use decky_state_core::plugin_system::{DisabledPlugin, Plugin, PluginUpdateMapping, VersionInfo};
use decky_state_core::state::{DeckyState, UserInfo};
use decky_state_core::ui_bridge::use_decky_state;
use log::debug;
use serde::Deserialize;

/// One collaborator call recorded in a session script
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionStep {
    SetPlugins { plugins: Vec<Plugin> },
    SetDisabledPlugins { plugins: Vec<DisabledPlugin> },
    SetPluginOrder { order: Vec<String> },
    SetFrozenPlugins { names: Vec<String> },
    SetHiddenPlugins { names: Vec<String> },
    SetActivePlugin { name: String },
    CloseActivePlugin,
    SetUpdates { updates: PluginUpdateMapping },
    SetHasLoaderUpdate { value: bool },
    SetIsLoaderUpdating { value: bool },
    SetVersionInfo { info: VersionInfo },
    SetNotificationSettings { settings: NotificationSettings },
    SetUserInfo { user: UserInfo },
}

/// Ordered list of steps replayed against a store
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub steps: Vec<SessionStep>,
}

impl SessionScript {
    pub fn load(path: &Path) -> decky_state_core::Result<Self> {
        Ok(config::load_from_path(path)?)
    }

    /// Apply every step in order.
    ///
    /// Steps a UI consumer could perform go through the state context; the
    /// rest are written to the store directly, as the loader, updater and
    /// notification service would.
    pub fn replay(&self, store: &DeckyState) {
        for (index, step) in self.steps.iter().enumerate() {
            debug!("Replaying step {}: {:?}", index + 1, step);
            match step.clone() {
                SessionStep::SetPlugins { plugins } => store.set_plugins(plugins),
                SessionStep::SetDisabledPlugins { plugins } => use_decky_state().set_disabled_plugins(plugins),
                SessionStep::SetPluginOrder { order } => use_decky_state().set_plugin_order(order),
                SessionStep::SetFrozenPlugins { names } => store.set_frozen_plugins(names),
                SessionStep::SetHiddenPlugins { names } => store.set_hidden_plugins(names),
                SessionStep::SetActivePlugin { name } => use_decky_state().set_active_plugin(&name),
                SessionStep::CloseActivePlugin => use_decky_state().close_active_plugin(),
                SessionStep::SetUpdates { updates } => store.set_updates(updates),
                SessionStep::SetHasLoaderUpdate { value } => store.set_has_loader_update(value),
                SessionStep::SetIsLoaderUpdating { value } => use_decky_state().set_is_loader_updating(value),
                SessionStep::SetVersionInfo { info } => use_decky_state().set_version_info(info),
                SessionStep::SetNotificationSettings { settings } => store.set_notification_settings(settings),
                SessionStep::SetUserInfo { user } => store.set_user_info(user),
            }
        }
    }
}
