//! # Decky State Store
//!
//! The single source of truth for the plugin menu: loaded and disabled
//! plugins, ordering, the active plugin, pending updates, loader version,
//! notification settings and user identity.
//!
//! - **[`store`]**: [`DeckyState`], private fields plus typed mutators that
//!   keep derived fields consistent and notify listeners.
//! - **[`snapshot`]**: [`PublicDeckyState`], the immutable copy handed to
//!   readers, and [`UserInfo`].
//!
//! Collaborators (plugin loader, updater, notification service) call the
//! mutators directly; UI consumers read through the
//! [`ui_bridge`](crate::ui_bridge).
pub mod snapshot;
pub mod store;

pub use snapshot::{PublicDeckyState, UserInfo};
pub use store::DeckyState;

// Test module declaration
#[cfg(test)]
mod tests;
