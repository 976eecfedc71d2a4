//! Signer authorization for deposits.
//!
//! # Data Flow
//! ```text
//! (safe, bps of deposit, bps of profit, deadline, proxy factory, chain id)
//!     → payload.rs (fixed-width ABI encoding, keccak-256)
//!     → signer.rs (Ethereum signed message over the hash)
//!     → SignedAuthorization handed to the executor's deposit call
//! ```

pub mod payload;
pub mod signer;

pub use payload::{AuthorizationPayload, ENCODED_LEN};
pub use signer::{
    deadline_from, sign_authorization, unix_now, SignedAuthorization, AUTHORIZATION_VALIDITY_SECS,
};
