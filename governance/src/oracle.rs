//! External balance oracle consumed by the token gate.

use thiserror::Error;
use tokengov_types::{HolderAddress, TokenId};

/// Failure reported by the external balance oracle.
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct OracleError(pub String);

impl OracleError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Read-only capability answering how many units of a token a holder owns.
///
/// The query may be latent; the engine performs no retries, and callers
/// choose their own timeout policy behind this trait. A failed or stalled
/// query surfaces to the caller as
/// [`GovernanceError::OracleUnavailable`](crate::GovernanceError::OracleUnavailable),
/// never as a zero balance.
pub trait BalanceOracle {
    fn balance_of(&self, holder: &HolderAddress, token: TokenId) -> Result<u128, OracleError>;
}
