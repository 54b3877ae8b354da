//! Fundamental types for the tokengov engine.

pub mod address;
pub mod time;
pub mod token;

pub use address::HolderAddress;
pub use time::Timestamp;
pub use token::TokenId;

/// Identifier of a proposal, assigned sequentially starting at 1.
pub type ProposalId = u64;
