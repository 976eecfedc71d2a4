//! Deposit into the yield protocol through the proxy factory, then withdraw.
//!
//! Configuration comes from the environment (see `config::loader`); the
//! authorization signer key is read from `P2P_SIGNER_PRIVATE_KEY`.

use safe_superform_ops::config::validation::validate_deposit_config;
use safe_superform_ops::lifecycle::{exit_code, load_validated};
use safe_superform_ops::observability::init_logging;
use safe_superform_ops::operations::{DepositWithdrawFlow, DepositWithdrawOutcome};
use safe_superform_ops::{OpsResult, RolesExecutor};

async fn run() -> OpsResult<DepositWithdrawOutcome> {
    let config = load_validated(validate_deposit_config)?;
    let executor = RolesExecutor::from_env(&config)?;

    DepositWithdrawFlow::new(config, executor).run().await
}

#[tokio::main]
async fn main() {
    init_logging();

    let result = run().await;
    std::process::exit(exit_code("Deposit-withdraw", &result));
}
