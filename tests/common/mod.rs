//! Shared utilities for flow integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{address, TxHash, B256};
use safe_superform_ops::executor::{
    BatchClaimRequest, DepositRequest, ExecutionError, Executor, WithdrawRequest,
};
use safe_superform_ops::OpsConfig;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

// Anvil's well-known test account #0; never use for real funds
pub const TEST_SIGNER_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// A call observed by the stub, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Deposit(DepositRequest),
    Withdraw(WithdrawRequest),
    BatchClaim(BatchClaimRequest),
}

/// Executor stub with scripted results and a call log.
#[derive(Debug)]
pub struct StubExecutor {
    deposit_result: Result<TxHash, ExecutionError>,
    withdraw_result: Result<TxHash, ExecutionError>,
    claim_result: Result<TxHash, ExecutionError>,
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub deposit_count: AtomicU32,
    pub withdraw_count: AtomicU32,
    pub claim_count: AtomicU32,
}

impl StubExecutor {
    /// Every call succeeds with a distinct hash.
    pub fn succeeding() -> Self {
        Self {
            deposit_result: Ok(deposit_hash()),
            withdraw_result: Ok(withdraw_hash()),
            claim_result: Ok(claim_hash()),
            calls: Arc::new(Mutex::new(Vec::new())),
            deposit_count: AtomicU32::new(0),
            withdraw_count: AtomicU32::new(0),
            claim_count: AtomicU32::new(0),
        }
    }

    pub fn failing_deposit(error: ExecutionError) -> Self {
        Self {
            deposit_result: Err(error),
            ..Self::succeeding()
        }
    }

    pub fn failing_withdraw(error: ExecutionError) -> Self {
        Self {
            withdraw_result: Err(error),
            ..Self::succeeding()
        }
    }

    pub fn failing_claim(error: ExecutionError) -> Self {
        Self {
            claim_result: Err(error),
            ..Self::succeeding()
        }
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl Executor for StubExecutor {
    async fn deposit(&self, request: DepositRequest) -> Result<TxHash, ExecutionError> {
        self.deposit_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(Call::Deposit(request));
        self.deposit_result.clone()
    }

    async fn withdraw(&self, request: WithdrawRequest) -> Result<TxHash, ExecutionError> {
        self.withdraw_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(Call::Withdraw(request));
        self.withdraw_result.clone()
    }

    async fn batch_claim(&self, request: BatchClaimRequest) -> Result<TxHash, ExecutionError> {
        self.claim_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(Call::BatchClaim(request));
        self.claim_result.clone()
    }
}

pub fn deposit_hash() -> TxHash {
    B256::repeat_byte(0xd0)
}

pub fn withdraw_hash() -> TxHash {
    B256::repeat_byte(0xe0)
}

pub fn claim_hash() -> TxHash {
    B256::repeat_byte(0xc0)
}

/// Default deployment with a proxy factory set.
pub fn test_config() -> OpsConfig {
    let mut config = OpsConfig::default();
    config.addresses.proxy_factory = address!("1111111111111111111111111111111111111111");
    config
}

/// Formatted log output collected in memory.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route this thread's log events into a buffer until the guard drops.
///
/// `#[tokio::test]` runs on a current-thread runtime, so the flow's events
/// land on the same thread.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
