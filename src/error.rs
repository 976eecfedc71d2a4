//! Crate-level error taxonomy.

use thiserror::Error;

use crate::config::ConfigError;
use crate::executor::ExecutionError;

/// Errors that end a flow.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Missing or malformed configuration or secret.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The signer could not produce a signature.
    #[error("Signing error: {0}")]
    Signing(String),

    /// An executor call reverted or the network call failed.
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

/// Result type for flow operations.
pub type OpsResult<T> = Result<T, OpsError>;
