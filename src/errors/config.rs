use std::env::VarError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set but unreadable, e.g. not unicode
    #[error("Could not read {key}: {source}")]
    EnvVar {
        key: String,
        #[source]
        source: VarError,
    },

    /// Value (or built-in default) does not parse
    #[error("Could not parse {key}: {reason}")]
    Parse { key: String, reason: String },
}
