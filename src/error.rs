//! Error types for flux calculation.
//!
//! Configuration problems are detected once, when a [`FluxCalculator`](crate::FluxCalculator)
//! is built. Numerical degeneracy (non-finite fluxes, non-positive densities) is never
//! reported here; it propagates as data for an outer stability monitor to catch.

use thiserror::Error;

/// Errors detected while validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading or writing a configuration file.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),

    /// A single value is out of its valid range.
    #[error("invalid value '{key}': {value} - {reason}")]
    InvalidValue {
        /// Configuration key
        key: String,
        /// Offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Enabled physics flags that cannot be combined.
    #[error("inconsistent physics: {0}")]
    InconsistentPhysics(String),

    /// An enum variant name that is not recognised.
    #[error("unknown {enum_type} '{variant}'")]
    UnknownVariant {
        /// Kind of enum being parsed
        enum_type: &'static str,
        /// Name supplied by the user
        variant: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors returned by the flux pipeline.
#[derive(Debug, Error)]
pub enum FluxError {
    /// The pipeline was configured inconsistently.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An input or output array does not match the configured block.
    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Which array was rejected
        what: &'static str,
        /// Shape implied by the block geometry
        expected: String,
        /// Shape of the array supplied
        actual: String,
    },

    /// A field required by the enabled physics was not supplied.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The worker pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}
