//! Errors raised while loading or validating configuration.
//!
//! Gameplay never fails: blocked movement, starvation and empty containers are
//! ordinary state. Only loading or validating
//! [`Params`](crate::simulation::params::Params) can go wrong, either from disk
//! or when a world is built.

use thiserror::Error;

/// Errors produced while loading or validating simulation parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The parameter file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The parameter file is not valid JSON for [`Params`](crate::simulation::params::Params).
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A parameter holds a value the simulation cannot run with.
    #[error("Invalid parameter `{name}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
