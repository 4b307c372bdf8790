//! # UI Bridge Errors
//!
//! Defines [`UiBridgeError`], covering misuse of the state context scope:
//! looking up the published state with no provider attached, or attaching a
//! second provider on a thread that already has one.
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UiBridgeError {
    #[error("use_decky_state needs a parent StateContextProvider")]
    NoActiveScope,

    #[error("A StateContextProvider is already attached on this thread; nested providers are not supported")]
    ScopeAlreadyActive,
}
