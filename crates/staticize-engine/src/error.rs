//! Engine errors
//!
//! The pass itself cannot fail; only loading its configuration can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`PassConfig`](crate::PassConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML or has wrong value types.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
