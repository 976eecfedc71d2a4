//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load .env + config → Validate for the flow
//!
//! Exit (exit.rs):
//!     Flow result → error log → exit status (0 ok/skip, 1 fatal)
//! ```
//!
//! # Design Decisions
//! - One flow per process; no signal handling or graceful drain
//! - A started flow runs to completion or to its first fatal error

pub mod exit;
pub mod startup;

pub use exit::{exit_code, EXIT_FAILURE, EXIT_SUCCESS};
pub use startup::load_validated;
