//! # Plugin Data Model
//!
//! Plain data records handed to the state store by its collaborators. The
//! store never validates or mutates them; it only replaces whole lists.
//!
//! - **[`plugin`]**: [`Plugin`], [`DisabledPlugin`] and the derived
//!   [`InstalledPlugin`] union, as supplied by the plugin loader.
//! - **[`update`]**: [`PluginUpdateMapping`], the updater's per-plugin
//!   available-update table.
//! - **[`version`]**: [`VersionInfo`], the loader version descriptor.
pub mod plugin;
pub mod update;
pub mod version;

pub use plugin::{DisabledPlugin, InstalledPlugin, Plugin};
pub use update::{PluginUpdateMapping, StorePluginVersion};
pub use version::{ReleaseAsset, RemoteVersion, VersionInfo};
