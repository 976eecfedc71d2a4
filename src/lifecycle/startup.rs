//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (.env, optional TOML file, env overrides)
//! - Validate it for the flow about to run
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No network access before the configuration is known to be usable

use crate::config::loader::load_from_env;
use crate::config::validation::ValidationError;
use crate::config::{ConfigError, OpsConfig};

/// Load configuration and run `validate` against it.
pub fn load_validated<V>(validate: V) -> Result<OpsConfig, ConfigError>
where
    V: Fn(&OpsConfig) -> Result<(), Vec<ValidationError>>,
{
    let config = load_from_env()?;
    validate(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        chain_id = config.chain.chain_id,
        safe = %config.addresses.safe,
        roles = %config.addresses.roles,
        proxy = %config.addresses.proxy,
        "Configuration loaded"
    );

    Ok(config)
}
