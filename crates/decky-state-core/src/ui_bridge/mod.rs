//! # UI Bridge
//!
//! Binds a [`DeckyState`](crate::state::DeckyState) to a UI tree. A
//! [`StateContextProvider`] keeps exactly one published snapshot fresh by
//! listening for store notifications, and nested consumers reach it through
//! [`use_decky_state`] without the state being threaded through every call.
//!
//! Consumers only get a narrow set of mutators (version info, loader
//! updating flag, active plugin, plugin order, disabled plugins). Other
//! fields are written by collaborators holding the store itself.
//!
//! Only one provider may be attached per thread.
pub mod context;
pub mod error;
pub mod provider;

use crate::state::PublicDeckyState;

pub use context::{current_context, use_decky_state, DeckyStateContext};
pub use error::UiBridgeError;
pub use provider::StateContextProvider;

/// A rendering collaborator that redraws from published snapshots
pub trait RenderTarget: Send + Sync {
    /// Get the name of this render target
    fn name(&self) -> &str;

    /// Called after every republish. Must not block; the bridge does not wait
    /// for the redraw to happen.
    fn schedule_redraw(&self, state: &PublicDeckyState);
}

// Test module declaration
#[cfg(test)]
mod tests;
