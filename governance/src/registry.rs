//! Proposal storage and id allocation.

use crate::config::GovernanceConfig;
use crate::error::GovernanceError;
use crate::proposal::Proposal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tokengov_types::{HolderAddress, ProposalId, Timestamp};

/// Owns every proposal record, including each proposal's voted-set.
///
/// Ids come from the shared config counter and are never reused. Records
/// are only ever mutated through [`VotingEngine`](crate::VotingEngine) and
/// [`QuorumResolver`](crate::QuorumResolver).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalRegistry {
    proposals: HashMap<ProposalId, Proposal>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new proposal and return its id.
    ///
    /// Proposer eligibility has already been established by the caller (the
    /// engine checks the token gate before reaching the registry). The empty
    /// voter list check guards the division by `max_votes` in resolution.
    pub(crate) fn create(
        &mut self,
        config: &mut GovernanceConfig,
        proposer: HolderAddress,
        description: String,
        eligible_voters: Vec<HolderAddress>,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        if description.is_empty() {
            return Err(GovernanceError::EmptyDescription);
        }
        if eligible_voters.is_empty() {
            return Err(GovernanceError::EmptyVoterList);
        }
        let id = config.next_proposal_id;
        config.next_proposal_id += 1;
        let max_votes = eligible_voters.len() as u32;
        self.proposals.insert(
            id,
            Proposal {
                id,
                proposer,
                description,
                deadline: now.saturating_add(config.voting_window),
                eligible_voters,
                votes_up: 0,
                votes_down: 0,
                max_votes,
                voted: HashSet::new(),
                resolved: false,
                passed: false,
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: ProposalId) -> Result<&mut Proposal, GovernanceError> {
        self.proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
