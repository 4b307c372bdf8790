//! # Change Notification
//!
//! The state store announces every mutation through a plain observer list
//! rather than a runtime event bus. A notification carries no payload: it
//! means "state changed, re-read the snapshot".
//!
//! - **[`dispatcher`]**: [`ListenerRegistry`], the ordered listener list with
//!   per-listener failure isolation.
pub mod dispatcher;

use std::sync::Arc;

/// Opaque handle returned by `subscribe`, used to unsubscribe later
pub type ListenerId = u64;

/// Zero-argument change listener
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Re-export important types
pub use dispatcher::ListenerRegistry;

// Test module declaration
#[cfg(test)]
mod tests;
