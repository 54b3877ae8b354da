//! Engine facade — wires the gate, registry, voting and resolution together.

use crate::admin::AdminControls;
use crate::config::GovernanceConfig;
use crate::error::GovernanceError;
use crate::events::GovernanceEvent;
use crate::oracle::BalanceOracle;
use crate::proposal::Proposal;
use crate::registry::ProposalRegistry;
use crate::resolver::QuorumResolver;
use crate::token_gate::TokenGate;
use crate::voting::VotingEngine;
use tokengov_types::{HolderAddress, ProposalId, Timestamp, TokenId};

/// The governance engine: a single-writer state machine.
///
/// Every mutating operation takes `&mut self` and is all-or-nothing, which
/// gives each call the atomicity the model requires; callers in a concurrent
/// setting wrap the engine in their own lock (or a per-engine actor). No
/// operation blocks internally except the oracle query during proposal
/// creation, whose failure surfaces as `OracleUnavailable`.
///
/// The current clock tick is supplied by the caller on every time-sensitive
/// operation; the engine never reads a clock of its own.
pub struct GovernanceEngine<O: BalanceOracle> {
    config: GovernanceConfig,
    gate: TokenGate,
    registry: ProposalRegistry,
    voting: VotingEngine,
    resolver: QuorumResolver,
    admin: AdminControls,
    oracle: O,
    events: Vec<GovernanceEvent>,
}

impl<O: BalanceOracle> GovernanceEngine<O> {
    /// Construct an engine with the fixed owner, the initial quorum
    /// percentage (0..=100), the initial eligible-token set, and the
    /// balance oracle. The oracle reference cannot be swapped at runtime.
    pub fn new(
        owner: HolderAddress,
        quorum_percent: u8,
        initial_tokens: Vec<TokenId>,
        oracle: O,
    ) -> Result<Self, GovernanceError> {
        Ok(Self {
            config: GovernanceConfig::new(owner, quorum_percent)?,
            gate: TokenGate::new(initial_tokens),
            registry: ProposalRegistry::new(),
            voting: VotingEngine,
            resolver: QuorumResolver,
            admin: AdminControls,
            oracle,
            events: Vec::new(),
        })
    }

    /// Create a proposal with a fixed voter snapshot.
    ///
    /// The caller must hold at least one eligible token; the voter list is
    /// taken as supplied and is not checked against the gate. The deadline
    /// is `now + voting_window`. Returns the new proposal id.
    pub fn create_proposal(
        &mut self,
        caller: &HolderAddress,
        description: impl Into<String>,
        eligible_voters: Vec<HolderAddress>,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        if !self.gate.is_eligible(&self.oracle, caller)? {
            return Err(GovernanceError::NotEligible(caller.to_string()));
        }
        let id = self.registry.create(
            &mut self.config,
            caller.clone(),
            description.into(),
            eligible_voters,
            now,
        )?;
        let proposal = self.registry.get(id)?;
        tracing::info!(
            proposal = id,
            proposer = %proposal.proposer,
            max_votes = proposal.max_votes,
            deadline = %proposal.deadline,
            "proposal created"
        );
        self.events.push(GovernanceEvent::ProposalCreated {
            proposer: proposal.proposer.clone(),
            description: proposal.description.clone(),
            id,
            max_votes: proposal.max_votes,
        });
        Ok(id)
    }

    /// Cast the caller's single vote on proposal `id`.
    ///
    /// A second attempt by the same holder fails with `AlreadyVoted` and
    /// changes nothing. Votes are accepted up to and including the deadline
    /// tick.
    pub fn vote(
        &mut self,
        caller: &HolderAddress,
        id: ProposalId,
        in_favor: bool,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let (votes_up, votes_down) =
            self.voting
                .vote(&mut self.registry, caller, id, in_favor, now)?;
        tracing::debug!(
            proposal = id,
            voter = %caller,
            in_favor,
            votes_up,
            votes_down,
            "vote recorded"
        );
        self.events.push(GovernanceEvent::VoteCast {
            votes_up,
            votes_down,
            proposal_id: id,
            voter: caller.clone(),
            in_favor,
        });
        Ok(())
    }

    /// Tally proposal `id` against the current quorum and fix its outcome.
    ///
    /// Owner-only; requires the deadline to have strictly passed. One-way:
    /// a second call fails with `AlreadyResolved`. Returns whether the
    /// proposal passed.
    pub fn resolve(
        &mut self,
        caller: &HolderAddress,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<bool, GovernanceError> {
        if !self.config.is_owner(caller) {
            return Err(GovernanceError::Unauthorized);
        }
        let passed =
            self.resolver
                .resolve(&mut self.registry, self.config.quorum_percent, id, now)?;
        tracing::info!(proposal = id, passed, "proposal resolved");
        self.events.push(GovernanceEvent::ProposalResolved { id, passed });
        Ok(passed)
    }

    /// Replace the quorum percentage. Owner-only; affects every proposal
    /// not yet resolved.
    pub fn change_quorum(
        &mut self,
        caller: &HolderAddress,
        new_value: u8,
    ) -> Result<(), GovernanceError> {
        self.admin.change_quorum(&mut self.config, caller, new_value)?;
        tracing::info!(quorum_percent = new_value, "quorum changed");
        Ok(())
    }

    /// Append a token id to the eligible set. Owner-only.
    pub fn add_token(
        &mut self,
        caller: &HolderAddress,
        id: TokenId,
    ) -> Result<(), GovernanceError> {
        self.admin.add_token(&self.config, &mut self.gate, caller, id)?;
        tracing::info!(token = %id, "eligible token added");
        Ok(())
    }

    /// Swap-delete the token at `index`. Owner-only; indices cached before
    /// this call are stale afterwards.
    pub fn remove_token(
        &mut self,
        caller: &HolderAddress,
        index: usize,
    ) -> Result<TokenId, GovernanceError> {
        let removed = self
            .admin
            .remove_token(&self.config, &mut self.gate, caller, index)?;
        tracing::info!(token = %removed, index, "eligible token removed");
        Ok(removed)
    }

    /// Whether `holder` currently holds any eligible token.
    pub fn is_eligible(&self, holder: &HolderAddress) -> Result<bool, GovernanceError> {
        self.gate.is_eligible(&self.oracle, holder)
    }

    pub fn proposal(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.registry.get(id)
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    pub fn eligible_tokens(&self) -> &[TokenId] {
        self.gate.tokens()
    }

    /// Drain buffered events in emission order.
    pub fn drain_events(&mut self) -> Vec<GovernanceEvent> {
        std::mem::take(&mut self.events)
    }
}
