//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Flows, executor, signer produce:
//!     → logging.rs (structured log events: phases, addresses, tx hashes)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - Structured fields instead of formatted strings where a value matters
//! - Secrets are never logged; derived addresses are

pub mod logging;

pub use logging::init_logging;
