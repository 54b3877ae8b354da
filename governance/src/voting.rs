//! One-address-one-vote recording.

use crate::error::GovernanceError;
use crate::registry::ProposalRegistry;
use tokengov_types::{HolderAddress, ProposalId, Timestamp};

/// Validates and records a single vote per authorized holder per proposal.
pub struct VotingEngine;

impl VotingEngine {
    /// Cast `voter`'s vote on proposal `id`.
    ///
    /// The check order is part of the contract: unknown proposal, then voter
    /// authorization, then double-vote, then deadline. Nothing is mutated
    /// until every check has passed, so a rejected call leaves no partial
    /// state. Votes are accepted up to and including the deadline tick.
    ///
    /// Returns the updated `(votes_up, votes_down)` tallies.
    pub fn vote(
        &self,
        registry: &mut ProposalRegistry,
        voter: &HolderAddress,
        id: ProposalId,
        in_favor: bool,
        now: Timestamp,
    ) -> Result<(u32, u32), GovernanceError> {
        let proposal = registry.get_mut(id)?;
        if !proposal.is_authorized_voter(voter) {
            return Err(GovernanceError::NotAuthorizedVoter(voter.to_string()));
        }
        if proposal.voted.contains(voter) {
            return Err(GovernanceError::AlreadyVoted(voter.to_string()));
        }
        if now > proposal.deadline {
            return Err(GovernanceError::DeadlinePassed {
                deadline: proposal.deadline,
                now,
            });
        }
        if in_favor {
            proposal.votes_up += 1;
        } else {
            proposal.votes_down += 1;
        }
        proposal.voted.insert(voter.clone());
        Ok((proposal.votes_up, proposal.votes_down))
    }
}
