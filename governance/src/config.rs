//! Process-wide governance configuration.

use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};
use tokengov_types::{HolderAddress, ProposalId};

/// Ticks a proposal stays open for voting after creation
/// (~12 hours when the clock ticks once per second).
pub const DEFAULT_VOTING_WINDOW: u64 = 43_200;

/// Admin-controlled, process-wide state.
///
/// Owned by the engine and passed by reference into the admin surface and
/// the resolver; never ambient. `quorum_percent` is read at resolve time,
/// so changing it affects every proposal not yet resolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceConfig {
    /// The single administrator, fixed at construction.
    pub owner: HolderAddress,
    /// Minimum participation percentage (0..=100) a proposal needs to pass.
    pub quorum_percent: u8,
    /// Next proposal id to allocate; starts at 1.
    pub next_proposal_id: ProposalId,
    /// Offset added to `now` at creation to form the voting deadline.
    pub voting_window: u64,
}

impl GovernanceConfig {
    pub fn new(owner: HolderAddress, quorum_percent: u8) -> Result<Self, GovernanceError> {
        if quorum_percent > 100 {
            return Err(GovernanceError::InvalidQuorum(quorum_percent));
        }
        Ok(Self {
            owner,
            quorum_percent,
            next_proposal_id: 1,
            voting_window: DEFAULT_VOTING_WINDOW,
        })
    }

    pub fn is_owner(&self, caller: &HolderAddress) -> bool {
        &self.owner == caller
    }
}
