//! Administrator-only mutations of the quorum and the token gate.

use crate::config::GovernanceConfig;
use crate::error::GovernanceError;
use crate::token_gate::TokenGate;
use tokengov_types::{HolderAddress, TokenId};

/// Restricted mutation surface. Every method rejects callers other than the
/// owner fixed in [`GovernanceConfig`] with `Unauthorized`.
pub struct AdminControls;

impl AdminControls {
    /// Replace the quorum percentage.
    ///
    /// Quorum is read at resolve time, never snapshotted per proposal:
    /// already-resolved proposals keep their outcome, while every proposal
    /// still unresolved — including ones created before this call — is
    /// judged against the new value.
    pub fn change_quorum(
        &self,
        config: &mut GovernanceConfig,
        caller: &HolderAddress,
        new_value: u8,
    ) -> Result<(), GovernanceError> {
        if !config.is_owner(caller) {
            return Err(GovernanceError::Unauthorized);
        }
        if new_value > 100 {
            return Err(GovernanceError::InvalidQuorum(new_value));
        }
        config.quorum_percent = new_value;
        Ok(())
    }

    /// Append a token id to the eligible set. No dedup check.
    pub fn add_token(
        &self,
        config: &GovernanceConfig,
        gate: &mut TokenGate,
        caller: &HolderAddress,
        id: TokenId,
    ) -> Result<(), GovernanceError> {
        if !config.is_owner(caller) {
            return Err(GovernanceError::Unauthorized);
        }
        gate.add_token(id);
        Ok(())
    }

    /// Swap-delete the token at `index`.
    ///
    /// The last entry moves into `index`, so indices cached before this call
    /// are stale afterwards. Returns the removed token id.
    pub fn remove_token(
        &self,
        config: &GovernanceConfig,
        gate: &mut TokenGate,
        caller: &HolderAddress,
        index: usize,
    ) -> Result<TokenId, GovernanceError> {
        if !config.is_owner(caller) {
            return Err(GovernanceError::Unauthorized);
        }
        gate.remove_token(index)
    }
}
