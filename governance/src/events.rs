//! Events emitted once per successful state transition.

use serde::{Deserialize, Serialize};
use tokengov_types::{HolderAddress, ProposalId};

/// Observer-facing record of a governance state transition.
///
/// The engine buffers events in emission order; observers drain them with
/// [`GovernanceEngine::drain_events`](crate::GovernanceEngine::drain_events).
/// Rejected calls emit nothing. No delivery guarantee exists beyond
/// "emitted once per successful transition".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceEvent {
    ProposalCreated {
        proposer: HolderAddress,
        description: String,
        id: ProposalId,
        max_votes: u32,
    },
    VoteCast {
        votes_up: u32,
        votes_down: u32,
        proposal_id: ProposalId,
        voter: HolderAddress,
        in_favor: bool,
    },
    ProposalResolved {
        id: ProposalId,
        passed: bool,
    },
}
