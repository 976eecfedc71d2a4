//! Process exit status for a finished flow.

use crate::error::OpsResult;

/// Exit status for success or a recognized skip.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status for any fatal error.
pub const EXIT_FAILURE: i32 = 1;

/// Log a fatal error and map the flow result to an exit status.
pub fn exit_code<T>(flow: &str, result: &OpsResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!(flow, error = %e, "{} failed", flow);
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::OpsError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code("Batch claim", &Ok::<_, OpsError>(())), EXIT_SUCCESS);

        let failed: OpsResult<()> = Err(ConfigError::MissingSecret("P2P_SIGNER_PRIVATE_KEY").into());
        assert_eq!(exit_code("Deposit-withdraw", &failed), EXIT_FAILURE);
    }
}
