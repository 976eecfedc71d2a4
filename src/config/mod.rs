//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env (optional) + SUPERFORM_OPS_CONFIG (optional TOML file)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks per flow)
//!     → OpsConfig (validated, immutable)
//!     → passed explicitly into the flows and the executor
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; each process run loads it once
//! - All fields have defaults describing the observed Base deployment
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::OpsConfig;
pub use schema::{AddressConfig, CalldataConfig, ChainConfig, ExecutorConfig, FeeConfig};
