use proptest::prelude::*;

use tokengov_governance::{GovernanceEngine, GovernanceError};
use tokengov_nullables::NullOracle;
use tokengov_types::{HolderAddress, Timestamp, TokenId};

const GOLD: TokenId = TokenId::new(1);

/// Engine with a single proposal (id 1) created at tick 0 with `n_voters`
/// snapshot voters named `voter0..`.
fn engine_with_proposal(
    n_voters: u32,
    quorum: u8,
) -> (GovernanceEngine<NullOracle>, Vec<HolderAddress>) {
    let oracle = NullOracle::new();
    let proposer = HolderAddress::new("proposer");
    oracle.set_balance(&proposer, GOLD, 1);
    let mut engine =
        GovernanceEngine::new(HolderAddress::new("admin"), quorum, vec![GOLD], oracle).unwrap();
    let voters: Vec<HolderAddress> = (0..n_voters)
        .map(|i| HolderAddress::new(format!("voter{i}")))
        .collect();
    let id = engine
        .create_proposal(&proposer, "raise the budget", voters.clone(), Timestamp::ZERO)
        .unwrap();
    assert_eq!(id, 1);
    (engine, voters)
}

fn past_deadline(engine: &GovernanceEngine<NullOracle>) -> Timestamp {
    Timestamp::new(engine.config().voting_window + 1)
}

proptest! {
    /// Tallies never exceed the voter snapshot, whatever sequence of vote
    /// attempts (including repeats and out-of-snapshot callers) arrives.
    #[test]
    fn tally_bounded_by_snapshot(
        n_voters in 1u32..12,
        attempts in prop::collection::vec((0usize..16, any::<bool>()), 0..64),
    ) {
        let (mut engine, voters) = engine_with_proposal(n_voters, 50);
        for (pick, in_favor) in attempts {
            let caller = HolderAddress::new(format!("voter{pick}"));
            let _ = engine.vote(&caller, 1, in_favor, Timestamp::ZERO);
        }
        let proposal = engine.proposal(1).unwrap();
        prop_assert!(proposal.participation() <= proposal.max_votes);
        prop_assert_eq!(proposal.participation() as usize, proposal.voted.len());
        prop_assert_eq!(proposal.max_votes as usize, voters.len());
    }

    /// A second vote by the same holder always fails with AlreadyVoted and
    /// leaves the tallies untouched, regardless of direction.
    #[test]
    fn double_vote_is_rejected_without_effect(
        n_voters in 1u32..12,
        first in any::<bool>(),
        second in any::<bool>(),
    ) {
        let (mut engine, voters) = engine_with_proposal(n_voters, 50);
        engine.vote(&voters[0], 1, first, Timestamp::ZERO).unwrap();
        let before = {
            let p = engine.proposal(1).unwrap();
            (p.votes_up, p.votes_down)
        };
        let err = engine.vote(&voters[0], 1, second, Timestamp::ZERO).unwrap_err();
        prop_assert!(matches!(err, GovernanceError::AlreadyVoted(_)));
        let p = engine.proposal(1).unwrap();
        prop_assert_eq!((p.votes_up, p.votes_down), before);
    }

    /// Any vote attempt after the deadline is rejected.
    #[test]
    fn vote_after_deadline_always_rejected(
        n_voters in 1u32..8,
        offset in 1u64..1_000_000,
        in_favor in any::<bool>(),
    ) {
        let (mut engine, voters) = engine_with_proposal(n_voters, 50);
        let late = Timestamp::new(engine.config().voting_window + offset);
        let err = engine.vote(&voters[0], 1, in_favor, late).unwrap_err();
        let is_deadline_passed = matches!(err, GovernanceError::DeadlinePassed { .. });
        prop_assert!(is_deadline_passed);
    }

    /// The resolved outcome matches the quorum rule exactly:
    /// `down < up && (up + down) * 100 / max >= quorum` with floor division.
    #[test]
    fn resolution_matches_quorum_formula(
        n_voters in 1u32..10,
        up_frac in 0u32..=10,
        down_frac in 0u32..=10,
        quorum in 0u8..=100,
    ) {
        let up = n_voters * up_frac / 10;
        let down = (n_voters - up).min(n_voters * down_frac / 10);
        let (mut engine, voters) = engine_with_proposal(n_voters, quorum);
        for voter in voters.iter().take(up as usize) {
            engine.vote(voter, 1, true, Timestamp::ZERO).unwrap();
        }
        for voter in voters.iter().skip(up as usize).take(down as usize) {
            engine.vote(voter, 1, false, Timestamp::ZERO).unwrap();
        }
        let admin = HolderAddress::new("admin");
        let passed = engine.resolve(&admin, 1, past_deadline(&engine)).unwrap();

        let expected = down < up
            && (up as u64 + down as u64) * 100 / n_voters as u64 >= quorum as u64;
        prop_assert_eq!(passed, expected);
    }

    /// Resolution is one-way: a second resolve fails and the outcome fields
    /// keep their first values.
    #[test]
    fn resolve_is_terminal(
        n_voters in 1u32..8,
        votes_cast in 0u32..8,
        quorum in 0u8..=100,
    ) {
        let votes_cast = votes_cast.min(n_voters);
        let (mut engine, voters) = engine_with_proposal(n_voters, quorum);
        for voter in voters.iter().take(votes_cast as usize) {
            engine.vote(voter, 1, true, Timestamp::ZERO).unwrap();
        }
        let admin = HolderAddress::new("admin");
        let now = past_deadline(&engine);
        let first = engine.resolve(&admin, 1, now).unwrap();

        let err = engine.resolve(&admin, 1, now).unwrap_err();
        prop_assert!(matches!(err, GovernanceError::AlreadyResolved(1)));
        let p = engine.proposal(1).unwrap();
        prop_assert!(p.resolved);
        prop_assert_eq!(p.passed, first);
    }
}
