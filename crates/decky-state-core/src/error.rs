//! # Decky State Errors
//!
//! [`Error`] gathers the subsystem errors so callers that touch several of
//! them (like the command-line driver) can use a single `Result` type.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::ConfigError;
use crate::ui_bridge::error::UiBridgeError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Reading or parsing a configuration file failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The state context scope was misused
    #[error("UI bridge error: {0}")]
    UiBridge(#[from] UiBridgeError),
}

/// Result type for decky state operations
pub type Result<T> = StdResult<T, Error>;
