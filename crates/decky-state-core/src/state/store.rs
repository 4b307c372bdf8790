use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::event::{ListenerId, ListenerRegistry};
use crate::notification::NotificationSettings;
use crate::plugin_system::{
    DisabledPlugin, InstalledPlugin, Plugin, PluginUpdateMapping, VersionInfo,
};
use crate::state::snapshot::{PublicDeckyState, UserInfo};

/// The authoritative plugin menu state.
///
/// Every mutator replaces one field, recomputes whatever derives from it and
/// then notifies each subscribed listener exactly once, synchronously, before
/// returning. No lock is held while listeners run, so a listener may read the
/// snapshot again or call another mutator.
pub struct DeckyState {
    state: RwLock<PublicDeckyState>,
    listeners: ListenerRegistry,
}

impl fmt::Debug for DeckyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckyState")
         .field("state", &*self.read())
         .field("listeners", &self.listeners)
         .finish()
    }
}

impl DeckyState {
    /// Create a store with empty state and default notification settings
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PublicDeckyState::default()),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Current snapshot of every field
    pub fn public_state(&self) -> PublicDeckyState {
        self.read().clone()
    }

    pub fn set_version_info(&self, version_info: VersionInfo) {
        self.mutate("version_info", |state| {
            state.version_info = Some(Arc::new(version_info));
        });
    }

    pub fn set_plugins(&self, plugins: Vec<Plugin>) {
        self.mutate("plugins", |state| {
            state.plugins = plugins.into();
            state.installed_plugins = installed(&state.plugins, &state.disabled_plugins);
        });
    }

    pub fn set_disabled_plugins(&self, disabled_plugins: Vec<DisabledPlugin>) {
        self.mutate("disabled_plugins", |state| {
            state.disabled_plugins = disabled_plugins.into();
            state.installed_plugins = installed(&state.plugins, &state.disabled_plugins);
        });
    }

    pub fn set_plugin_order(&self, plugin_order: Vec<String>) {
        self.mutate("plugin_order", |state| {
            state.plugin_order = plugin_order.into();
        });
    }

    pub fn set_frozen_plugins(&self, frozen_plugins: Vec<String>) {
        self.mutate("frozen_plugins", |state| {
            state.frozen_plugins = frozen_plugins.into();
        });
    }

    pub fn set_hidden_plugins(&self, hidden_plugins: Vec<String>) {
        self.mutate("hidden_plugins", |state| {
            state.hidden_plugins = hidden_plugins.into();
        });
    }

    /// Resolve `name` against the current plugins. An unknown name clears the
    /// active plugin instead of failing.
    ///
    /// The result is not re-resolved when the plugin list changes later; only
    /// another `set_active_plugin` or `close_active_plugin` updates it.
    pub fn set_active_plugin(&self, name: &str) {
        self.mutate("active_plugin", |state| {
            state.active_plugin = state.plugins.iter().find(|plugin| plugin.name == name).cloned();
            if state.active_plugin.is_none() {
                debug!("No loaded plugin named '{}', clearing active plugin", name);
            }
        });
    }

    pub fn close_active_plugin(&self) {
        self.mutate("active_plugin", |state| {
            state.active_plugin = None;
        });
    }

    pub fn set_updates(&self, updates: PluginUpdateMapping) {
        self.mutate("updates", |state| {
            state.updates = Some(Arc::new(updates));
        });
    }

    pub fn set_has_loader_update(&self, has_update: bool) {
        self.mutate("has_loader_update", |state| {
            state.has_loader_update = has_update;
        });
    }

    pub fn set_is_loader_updating(&self, is_updating: bool) {
        self.mutate("is_loader_updating", |state| {
            state.is_loader_updating = is_updating;
        });
    }

    pub fn set_notification_settings(&self, notification_settings: NotificationSettings) {
        self.mutate("notification_settings", |state| {
            state.notification_settings = notification_settings;
        });
    }

    pub fn set_user_info(&self, user_info: UserInfo) {
        self.mutate("user_info", |state| {
            state.user_info = Some(Arc::new(user_info));
        });
    }

    /// Register a change listener, called once after every mutation
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn mutate<F>(&self, field: &'static str, apply: F)
    where
        F: FnOnce(&mut PublicDeckyState),
    {
        // Fields are fully updated before anyone is told about it.
        apply(&mut *self.write());
        debug!("Updated decky state field '{}'", field);
        self.notify_update();
    }

    fn notify_update(&self) {
        self.listeners.notify();
    }

    fn read(&self) -> RwLockReadGuard<'_, PublicDeckyState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PublicDeckyState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DeckyState {
    fn default() -> Self {
        Self::new()
    }
}

fn installed(plugins: &[Plugin], disabled_plugins: &[DisabledPlugin]) -> Arc<[InstalledPlugin]> {
    plugins
        .iter()
        .cloned()
        .map(InstalledPlugin::Enabled)
        .chain(disabled_plugins.iter().cloned().map(InstalledPlugin::Disabled))
        .collect()
}
