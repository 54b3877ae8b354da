//! Token-gated governance — proposals, one-address-one-vote, quorum-gated
//! resolution.
//!
//! Holders of designated membership tokens create proposals. Each address in
//! a proposal's creation-time voter snapshot may cast exactly one vote until
//! the deadline (inclusive); once the deadline has passed, the single
//! administrator resolves the proposal by tallying participation against the
//! quorum percentage. Resolution is a one-way transition.
//!
//! External collaborators stay external: token balances come from a
//! [`BalanceOracle`] implementation supplied at construction, and the
//! monotonic clock is supplied by the caller as a `Timestamp` argument on
//! every time-sensitive operation.

pub mod admin;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod oracle;
pub mod proposal;
pub mod registry;
pub mod resolver;
pub mod token_gate;
pub mod voting;

pub use admin::AdminControls;
pub use config::GovernanceConfig;
pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use events::GovernanceEvent;
pub use oracle::{BalanceOracle, OracleError};
pub use proposal::{Proposal, ProposalStatus};
pub use registry::ProposalRegistry;
pub use resolver::QuorumResolver;
pub use token_gate::TokenGate;
pub use voting::VotingEngine;
