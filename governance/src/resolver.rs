//! Terminal tally-and-resolve step.

use crate::error::GovernanceError;
use crate::registry::ProposalRegistry;
use tokengov_types::{ProposalId, Timestamp};

/// Performs the one-way tally-and-resolve step, exactly once per proposal.
pub struct QuorumResolver;

impl QuorumResolver {
    /// Tally proposal `id` against `quorum_percent` and fix its outcome.
    ///
    /// Requires the deadline to have strictly passed (`now > deadline`; a
    /// resolve attempt at the deadline tick is rejected, since that tick
    /// still accepts votes). A second call on the same id fails with
    /// `AlreadyResolved` and leaves the first outcome untouched.
    ///
    /// The proposal passes iff more votes were cast in favor than against
    /// AND participation meets quorum. Returns the outcome.
    pub fn resolve(
        &self,
        registry: &mut ProposalRegistry,
        quorum_percent: u8,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<bool, GovernanceError> {
        let proposal = registry.get_mut(id)?;
        if now <= proposal.deadline {
            return Err(GovernanceError::DeadlineNotReached {
                deadline: proposal.deadline,
                now,
            });
        }
        if proposal.resolved {
            return Err(GovernanceError::AlreadyResolved(id));
        }
        let passed = proposal.votes_down < proposal.votes_up
            && Self::meets_quorum(
                proposal.votes_up,
                proposal.votes_down,
                proposal.max_votes,
                quorum_percent,
            );
        proposal.resolved = true;
        proposal.passed = passed;
        Ok(passed)
    }

    /// Floor-divided participation percentage against the quorum threshold.
    ///
    /// Multiplies before dividing — `(up + down) * 100 / max_votes` — so the
    /// threshold keeps meaning for small voter lists. Dividing first would
    /// truncate both sides to near-zero integers and make any quorum below
    /// 100 inert once participation reaches `max_votes`. Widened to u64 so
    /// the `* 100` cannot overflow.
    fn meets_quorum(up: u32, down: u32, max_votes: u32, quorum_percent: u8) -> bool {
        debug_assert!(max_votes > 0, "registry rejects empty voter lists");
        let participation = (up as u64 + down as u64) * 100;
        participation / max_votes as u64 >= quorum_percent as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quorum_uses_floor_division() {
        // 1 of 3 voters = 33.33% participation, floored to 33.
        assert!(QuorumResolver::meets_quorum(1, 0, 3, 33));
        assert!(!QuorumResolver::meets_quorum(1, 0, 3, 34));
    }

    #[test]
    fn zero_quorum_always_met() {
        assert!(QuorumResolver::meets_quorum(0, 0, 5, 0));
    }

    #[test]
    fn full_participation_meets_hundred_percent_quorum() {
        assert!(QuorumResolver::meets_quorum(3, 1, 4, 100));
        assert!(!QuorumResolver::meets_quorum(2, 1, 4, 100));
    }

    #[test]
    fn wide_tallies_do_not_overflow() {
        assert!(QuorumResolver::meets_quorum(u32::MAX, 0, u32::MAX, 100));
    }
}
