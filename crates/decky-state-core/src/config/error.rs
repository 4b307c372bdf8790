//! # Configuration Errors
//!
//! Defines [`ConfigError`], raised while reading settings or session files
//! from disk: unknown file extensions, I/O failures and parse failures.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration format for path: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Deserialization from '{format}' failed: {source}")]
    Deserialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

// Helper for creating Io errors, ensuring path is always included.
impl ConfigError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        ConfigError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }

    fn deserialization<E>(format: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::Deserialization {
            format: format.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::deserialization("json", source)
    }

    #[cfg(feature = "yaml-config")]
    pub(crate) fn yaml(source: serde_yaml::Error) -> Self {
        Self::deserialization("yaml", source)
    }

    #[cfg(feature = "toml-config")]
    pub(crate) fn toml(source: toml::de::Error) -> Self {
        Self::deserialization("toml", source)
    }
}
