//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject zero addresses for contracts a flow talks to
//! - Validate value ranges (chain id, timeouts > 0, RPC URL scheme)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: OpsConfig → Result<(), Vec<ValidationError>>
//! - Basis points are copied verbatim and left to the contracts to enforce

use std::fmt;

use crate::config::schema::OpsConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the settings every flow relies on.
pub fn validate_config(config: &OpsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain.chain_id == 0 {
        errors.push(ValidationError::new("chain.chain_id", "must be non-zero"));
    }

    match url::Url::parse(&config.chain.rpc_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "chain.rpc_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "chain.rpc_url",
            format!("invalid URL: {}", e),
        )),
    }

    let addresses = &config.addresses;
    for (field, address) in [
        ("addresses.safe", addresses.safe),
        ("addresses.roles", addresses.roles),
        ("addresses.proxy", addresses.proxy),
    ] {
        if address.is_zero() {
            errors.push(ValidationError::new(field, "must not be the zero address"));
        }
    }

    if config.executor.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "executor.confirmation_timeout_secs",
            "must be greater than zero",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate everything `validate_config` does, plus what signing a deposit
/// authorization needs.
pub fn validate_deposit_config(config: &OpsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_config(config).err().unwrap_or_default();

    if config.addresses.proxy_factory.is_zero() {
        errors.push(ValidationError::new(
            "addresses.proxy_factory",
            "must be set to sign deposit authorizations",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
