use thiserror::Error;
use tokengov_types::{ProposalId, Timestamp};

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("caller is not the governance owner")]
    Unauthorized,

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("holder {0} does not hold any eligible token")]
    NotEligible(String),

    #[error("proposal description must not be empty")]
    EmptyDescription,

    #[error("proposal must name at least one eligible voter")]
    EmptyVoterList,

    #[error("holder {0} is not in the proposal's voter snapshot")]
    NotAuthorizedVoter(String),

    #[error("holder {0} has already voted on this proposal")]
    AlreadyVoted(String),

    #[error("voting closed at tick {deadline}, now {now}")]
    DeadlinePassed { deadline: Timestamp, now: Timestamp },

    #[error("voting is open until tick {deadline} inclusive, now {now}")]
    DeadlineNotReached { deadline: Timestamp, now: Timestamp },

    #[error("proposal {0} has already been resolved")]
    AlreadyResolved(ProposalId),

    #[error("quorum percentage {0} exceeds 100")]
    InvalidQuorum(u8),

    #[error("token index {index} out of range for set of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("balance oracle unavailable: {0}")]
    OracleUnavailable(String),
}
