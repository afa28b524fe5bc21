use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid start epoch {epoch:?}: {reason}")]
    InvalidEpoch { epoch: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for `InvalidConfig`, `None` for every other kind.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidConfig { field, .. } => Some(*field),
            _ => None,
        }
    }
}
