//! # Roster Error Types
//!
//! The slot engine itself never fails. These errors only come from loading
//! and validating the roster configuration at startup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading roster configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read roster config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for a roster config.
    #[error("invalid roster config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written back out as TOML.
    #[error("failed to serialize roster config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A slot table with no rows cannot hold the local participant.
    #[error("num_slots must be at least 1")]
    ZeroSlots,

    /// Requested more rows than the engine supports.
    #[error("num_slots {requested} exceeds the maximum of {max}")]
    TooManySlots {
        /// Value from the config file.
        requested: usize,
        /// Largest supported value.
        max: usize,
    },

    /// An enumeration bound of zero would hide every participant or unit.
    #[error("{field} must be at least 1")]
    ZeroBound {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
