//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::OpsConfig;
use crate::config::validation::ValidationError;

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_PATH_ENV_VAR: &str = "SUPERFORM_OPS_CONFIG";

/// Environment variable overriding `chain.rpc_url`.
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
    /// A required secret is not present in the environment.
    MissingSecret(&'static str),
    /// A secret is present but not in the expected `0x`-prefixed hex form.
    MalformedSecret(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            ConfigError::MissingSecret(var) => {
                write!(f, "{} must be set in environment", var)
            }
            ConfigError::MalformedSecret(var) => {
                write!(f, "{} must be a 0x-prefixed 32-byte hex string", var)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse configuration from a TOML file.
///
/// Semantic validation is left to the caller since each flow needs a
/// different subset of the settings.
pub fn load_config(path: &Path) -> Result<OpsConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load configuration the way the binaries do.
///
/// Reads `.env` if present, then the file named by `SUPERFORM_OPS_CONFIG`
/// (falling back to defaults), then applies the `RPC_URL` override.
pub fn load_from_env() -> Result<OpsConfig, ConfigError> {
    // A missing .env file is normal in production.
    let _ = dotenv::dotenv();

    load_with(|name| std::env::var(name).ok())
}

/// Same as [`load_from_env`] with an injectable variable lookup.
pub fn load_with<F>(lookup: F) -> Result<OpsConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_PATH_ENV_VAR) {
        Some(path) => {
            tracing::info!(path = %path, "Loading configuration file");
            load_config(Path::new(&path))?
        }
        None => OpsConfig::default(),
    };

    if let Some(rpc_url) = lookup(RPC_URL_ENV_VAR) {
        config.chain.rpc_url = rpc_url;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate_config;

    #[test]
    fn test_defaults_without_config_file() {
        let config = load_with(|_| None).unwrap();
        assert_eq!(config.chain.chain_id, 8453);
    }

    #[test]
    fn test_rpc_url_override() {
        let config = load_with(|name| {
            (name == RPC_URL_ENV_VAR).then(|| "http://localhost:8545".to_string())
        })
        .unwrap();
        assert_eq!(config.chain.rpc_url, "http://localhost:8545");
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_with(|name| {
            (name == CONFIG_PATH_ENV_VAR).then(|| "/nonexistent/superform-ops.toml".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_file() {
        let path = std::env::temp_dir().join(format!("superform-ops-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[chain]\nchain_id = 31337\nrpc_url = \"http://127.0.0.1:8545\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.chain.chain_id, 31337);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let path = std::env::temp_dir().join(format!("superform-ops-bad-{}.toml", std::process::id()));
        fs::write(&path, "[chain\nchain_id = ").unwrap();

        let result = load_config(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_secret_error_display() {
        let err = ConfigError::MissingSecret("P2P_SIGNER_PRIVATE_KEY");
        assert_eq!(err.to_string(), "P2P_SIGNER_PRIVATE_KEY must be set in environment");
    }
}
