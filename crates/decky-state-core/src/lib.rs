//! # Decky State Core
//!
//! Observable application state for the Decky plugin menu.
//!
//! - **[`state`]**: the [`DeckyState`] store and its [`PublicDeckyState`] snapshot.
//! - **[`ui_bridge`]**: [`StateContextProvider`] and [`use_decky_state`], which
//!   keep a UI tree's published copy in sync with the store.
//! - **[`event`]**: the listener list behind store change notifications.
//! - **[`plugin_system`]**: plugin, update and loader version records.
//! - **[`notification`]**: notification settings and their defaults.
//! - **[`config`]**: json/yaml/toml loading for settings files.
//! - **[`error`]**: the crate-level [`Error`] type.
pub mod config;
pub mod error;
pub mod event;
pub mod notification;
pub mod plugin_system;
pub mod state;
pub mod ui_bridge;

// Re-export key public types for easier use by the binary and collaborators
pub use error::{Error, Result};
pub use notification::NotificationSettings;
pub use plugin_system::{DisabledPlugin, InstalledPlugin, Plugin, PluginUpdateMapping, VersionInfo};
pub use state::{DeckyState, PublicDeckyState, UserInfo};
pub use ui_bridge::{use_decky_state, DeckyStateContext, RenderTarget, StateContextProvider};
