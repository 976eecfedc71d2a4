//! Claim accrued rewards for the safe's proxy.
//!
//! Exits successfully when there is nothing to claim.

use safe_superform_ops::config::validation::validate_config;
use safe_superform_ops::lifecycle::{exit_code, load_validated};
use safe_superform_ops::observability::init_logging;
use safe_superform_ops::operations::{BatchClaimFlow, BatchClaimOutcome};
use safe_superform_ops::{OpsResult, RolesExecutor};

async fn run() -> OpsResult<BatchClaimOutcome> {
    let config = load_validated(validate_config)?;
    let executor = RolesExecutor::from_env(&config)?;

    BatchClaimFlow::new(config, executor).run().await
}

#[tokio::main]
async fn main() {
    init_logging();

    let result = run().await;
    std::process::exit(exit_code("Batch claim", &result));
}
