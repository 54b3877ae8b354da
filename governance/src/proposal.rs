//! Proposal records and their lifecycle status.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tokengov_types::{HolderAddress, ProposalId, Timestamp};

/// Lifecycle view derived from a proposal's deadline and resolution flag.
///
/// `Open → ClosedUnresolved → Resolved`, driven by the external clock and
/// the single resolving call. Votes are accepted only in `Open`; resolution
/// only in `ClosedUnresolved`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalStatus {
    /// Deadline not yet passed; votes are accepted.
    Open,
    /// Deadline passed, outcome not yet fixed.
    ClosedUnresolved,
    /// Terminal: tallied against quorum, outcome fixed.
    Resolved,
}

/// A governance proposal with its creation-time voter snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub proposer: HolderAddress,
    /// Free-form text, immutable after creation.
    pub description: String,
    /// Last tick at which votes are still accepted (inclusive).
    pub deadline: Timestamp,
    /// Who may vote, fixed at creation. This snapshot is supplied by the
    /// proposer; it is NOT re-derived from the token gate at vote time.
    pub eligible_voters: Vec<HolderAddress>,
    pub votes_up: u32,
    pub votes_down: u32,
    /// Cardinality of the voter snapshot, fixed at creation.
    pub max_votes: u32,
    /// Holders that have already cast their vote.
    pub voted: HashSet<HolderAddress>,
    /// One-way flag set by resolution.
    pub resolved: bool,
    /// Meaningful only once `resolved` is true.
    pub passed: bool,
}

impl Proposal {
    pub fn status(&self, now: Timestamp) -> ProposalStatus {
        if self.resolved {
            ProposalStatus::Resolved
        } else if now <= self.deadline {
            ProposalStatus::Open
        } else {
            ProposalStatus::ClosedUnresolved
        }
    }

    /// Whether `holder` appears in the creation-time voter snapshot.
    pub fn is_authorized_voter(&self, holder: &HolderAddress) -> bool {
        self.eligible_voters.contains(holder)
    }

    /// Total votes cast so far. Bounded by `max_votes`.
    pub fn participation(&self) -> u32 {
        self.votes_up + self.votes_down
    }
}
