//! Error types for the safe teleop arbiter

use thiserror::Error;

/// Errors surfaced by the arbiter and its configuration
#[derive(Debug, Error)]
pub enum TeleopError {
    /// Startup configuration is unusable. Raised fail-fast before the
    /// control loop starts; never recoverable at runtime.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An incoming controller sample does not cover the indices the
    /// configuration reads, or carries unusable axis values. Per-tick
    /// handling is local: the tick produces no command and the loop
    /// continues.
    #[error("Invalid sample shape: {0}")]
    InvalidSampleShape(String),
}

/// Convenience alias used throughout the crate
pub type TeleopResult<T> = Result<T, TeleopError>;
