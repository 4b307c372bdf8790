use std::collections::BTreeMap;
use std::sync::Arc;

use crate::notification::NotificationSettings;
use crate::plugin_system::{DisabledPlugin, InstalledPlugin, Plugin, StorePluginVersion, VersionInfo};
use crate::state::{DeckyState, UserInfo};

fn names(installed: &[InstalledPlugin]) -> Vec<&str> {
    installed.iter().map(InstalledPlugin::name).collect()
}

#[test]
fn test_new_store_is_empty() {
    let store = DeckyState::new();
    let state = store.public_state();

    assert!(state.plugins.is_empty());
    assert!(state.disabled_plugins.is_empty());
    assert!(state.installed_plugins.is_empty());
    assert!(state.plugin_order.is_empty());
    assert!(state.frozen_plugins.is_empty());
    assert!(state.hidden_plugins.is_empty());
    assert!(state.active_plugin.is_none());
    assert!(state.updates.is_none());
    assert!(!state.has_loader_update);
    assert!(!state.is_loader_updating);
    assert!(state.version_info.is_none());
    assert!(state.user_info.is_none());
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn test_notification_settings_default_before_first_set() {
    let store = DeckyState::new();
    assert_eq!(store.public_state().notification_settings, NotificationSettings::DEFAULT);

    let custom = NotificationSettings { decky_updates: false, plugin_updates: true };
    store.set_notification_settings(custom);
    assert_eq!(store.public_state().notification_settings, custom);
}

#[test]
fn test_installed_plugins_concatenates_sources() {
    let store = DeckyState::new();

    store.set_plugins(vec![Plugin::new("A"), Plugin::new("B")]);
    assert_eq!(names(&store.public_state().installed_plugins), vec!["A", "B"]);

    store.set_disabled_plugins(vec![DisabledPlugin::new("C")]);
    let state = store.public_state();
    assert_eq!(names(&state.installed_plugins), vec!["A", "B", "C"]);
    assert!(state.installed_plugins[0].is_enabled());
    assert!(!state.installed_plugins[2].is_enabled());
}

#[test]
fn test_installed_plugins_uses_latest_of_each_source() {
    let store = DeckyState::new();

    // Interleave updates of both sources; only the last value of each counts.
    store.set_disabled_plugins(vec![DisabledPlugin::new("X")]);
    store.set_plugins(vec![Plugin::new("A")]);
    store.set_disabled_plugins(vec![DisabledPlugin::new("Y"), DisabledPlugin::new("Z")]);
    store.set_plugins(vec![Plugin::new("B"), Plugin::new("A")]);
    store.set_plugins(vec![Plugin::new("C")]);

    assert_eq!(names(&store.public_state().installed_plugins), vec!["C", "Y", "Z"]);

    store.set_disabled_plugins(Vec::new());
    store.set_plugins(Vec::new());
    assert!(store.public_state().installed_plugins.is_empty());
}

#[test]
fn test_set_active_plugin_resolves_by_name() {
    let store = DeckyState::new();
    store.set_plugins(vec![Plugin::new("A"), Plugin::new("B").with_version("1.0.0")]);

    store.set_active_plugin("B");
    assert_eq!(store.public_state().active_plugin, Some(Plugin::new("B").with_version("1.0.0")));
}

#[test]
fn test_set_active_plugin_unknown_name_clears() {
    let store = DeckyState::new();
    store.set_plugins(vec![Plugin::new("A")]);
    store.set_active_plugin("A");
    assert!(store.public_state().active_plugin.is_some());

    store.set_active_plugin("missing");
    assert!(store.public_state().active_plugin.is_none());
}

#[test]
fn test_set_active_plugin_ignores_disabled_plugins() {
    let store = DeckyState::new();
    store.set_disabled_plugins(vec![DisabledPlugin::new("C")]);

    store.set_active_plugin("C");
    assert!(store.public_state().active_plugin.is_none(), "Only enabled plugins can be active");
}

#[test]
fn test_set_active_plugin_is_exact_match() {
    let store = DeckyState::new();
    store.set_plugins(vec![Plugin::new("PowerTools")]);

    store.set_active_plugin("powertools");
    assert!(store.public_state().active_plugin.is_none());
    store.set_active_plugin("Power");
    assert!(store.public_state().active_plugin.is_none());
}

#[test]
fn test_close_active_plugin() {
    let store = DeckyState::new();

    // Closing with nothing open is fine
    store.close_active_plugin();
    assert!(store.public_state().active_plugin.is_none());

    store.set_plugins(vec![Plugin::new("A")]);
    store.set_active_plugin("A");
    store.close_active_plugin();
    assert!(store.public_state().active_plugin.is_none());
}

#[test]
fn test_active_plugin_is_not_revalidated_when_plugins_change() {
    let store = DeckyState::new();
    store.set_plugins(vec![Plugin::new("A"), Plugin::new("B")]);
    store.set_disabled_plugins(vec![DisabledPlugin::new("C")]);
    assert_eq!(names(&store.public_state().installed_plugins), vec!["A", "B", "C"]);

    store.set_active_plugin("B");
    assert_eq!(store.public_state().active_plugin, Some(Plugin::new("B")));

    // Removing B leaves the previously resolved entry in place.
    store.set_plugins(vec![Plugin::new("A")]);
    let state = store.public_state();
    assert_eq!(state.active_plugin, Some(Plugin::new("B")));
    assert_eq!(names(&state.installed_plugins), vec!["A", "C"]);
}

#[test]
fn test_simple_field_setters() {
    let store = DeckyState::new();

    store.set_plugin_order(vec!["B".to_string(), "A".to_string()]);
    store.set_frozen_plugins(vec!["A".to_string()]);
    store.set_hidden_plugins(vec!["A".to_string(), "B".to_string()]);
    store.set_has_loader_update(true);
    store.set_is_loader_updating(true);
    store.set_version_info(VersionInfo::new("v2.10.3"));
    store.set_user_info(UserInfo::new("deck", "/home/deck"));

    let mut updates = BTreeMap::new();
    updates.insert("A".to_string(), StorePluginVersion::new("1.1.0", "abc"));
    store.set_updates(updates);

    let state = store.public_state();
    assert_eq!(&*state.plugin_order, ["B".to_string(), "A".to_string()]);
    assert_eq!(&*state.frozen_plugins, ["A".to_string()]);
    assert_eq!(state.hidden_plugins.len(), 2);
    assert!(state.has_loader_update);
    assert!(state.is_loader_updating);
    assert_eq!(state.version_info.as_ref().map(|v| v.current.as_str()), Some("v2.10.3"));
    assert_eq!(state.user_info.as_deref(), Some(&UserInfo::new("deck", "/home/deck")));
    assert_eq!(state.updates.as_ref().map(|u| u.len()), Some(1));

    store.set_is_loader_updating(false);
    assert!(!store.public_state().is_loader_updating);
}

#[test]
fn test_snapshots_are_not_affected_by_later_mutations() {
    let store = DeckyState::new();
    store.set_plugins(vec![Plugin::new("A")]);
    store.set_plugin_order(vec!["A".to_string()]);

    let before = store.public_state();
    store.set_plugins(vec![Plugin::new("B")]);
    store.set_plugin_order(Vec::new());
    store.set_version_info(VersionInfo::new("v1.0.0"));

    assert_eq!(before.plugins.len(), 1);
    assert_eq!(before.plugins[0].name, "A");
    assert_eq!(names(&before.installed_plugins), vec!["A"]);
    assert_eq!(before.plugin_order.len(), 1);
    assert!(before.version_info.is_none());
}

#[test]
fn test_unchanged_fields_share_storage_between_snapshots() {
    let store = DeckyState::new();
    store.set_plugins(vec![Plugin::new("A")]);

    let first = store.public_state();
    store.set_has_loader_update(true);
    let second = store.public_state();

    assert!(Arc::ptr_eq(&first.plugins, &second.plugins));
    assert!(Arc::ptr_eq(&first.installed_plugins, &second.installed_plugins));
}

#[test]
fn test_public_state_does_not_notify() {
    let store = DeckyState::new();
    let calls = Arc::new(std::sync::atomic::AtomicU32::new(0));
    let calls_clone = Arc::clone(&calls);
    store.subscribe(move || {
        calls_clone.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });

    let _ = store.public_state();
    let _ = store.public_state();
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}
