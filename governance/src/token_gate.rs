//! Membership gating — which token ids confer proposal rights.

use crate::error::GovernanceError;
use crate::oracle::BalanceOracle;
use serde::{Deserialize, Serialize};
use tokengov_types::{HolderAddress, TokenId};

/// The set of membership tokens whose holders may create proposals.
///
/// Stored as an ordered list; duplicates are permitted (the gate mirrors
/// whatever the admin put in). Removal is swap-delete: the last entry moves
/// into the removed slot, so an index resolved before a deletion is stale
/// afterwards and must be re-resolved before the next deletion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenGate {
    tokens: Vec<TokenId>,
}

impl TokenGate {
    pub fn new(tokens: Vec<TokenId>) -> Self {
        Self { tokens }
    }

    /// Whether `holder` owns at least one unit of any eligible token.
    ///
    /// Short-circuits on the first matching token. An empty set gates
    /// everyone out. Oracle failures propagate as `OracleUnavailable`; a
    /// holder is never treated as ineligible because the oracle was
    /// unreachable.
    pub fn is_eligible<O: BalanceOracle>(
        &self,
        oracle: &O,
        holder: &HolderAddress,
    ) -> Result<bool, GovernanceError> {
        for &token in &self.tokens {
            let balance = oracle
                .balance_of(holder, token)
                .map_err(|e| GovernanceError::OracleUnavailable(e.to_string()))?;
            if balance >= 1 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Append a token id. No dedup check.
    pub(crate) fn add_token(&mut self, id: TokenId) {
        self.tokens.push(id);
    }

    /// Remove the token at `index` by swapping the last entry into its slot.
    pub(crate) fn remove_token(&mut self, index: usize) -> Result<TokenId, GovernanceError> {
        if index >= self.tokens.len() {
            return Err(GovernanceError::IndexOutOfRange {
                index,
                len: self.tokens.len(),
            });
        }
        Ok(self.tokens.swap_remove(index))
    }

    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::OracleError;
    use std::collections::HashMap;

    struct MapOracle(HashMap<(HolderAddress, TokenId), u128>);

    impl BalanceOracle for MapOracle {
        fn balance_of(
            &self,
            holder: &HolderAddress,
            token: TokenId,
        ) -> Result<u128, OracleError> {
            Ok(*self.0.get(&(holder.clone(), token)).unwrap_or(&0))
        }
    }

    struct DownOracle;

    impl BalanceOracle for DownOracle {
        fn balance_of(&self, _: &HolderAddress, _: TokenId) -> Result<u128, OracleError> {
            Err(OracleError::new("oracle offline"))
        }
    }

    fn addr(s: &str) -> HolderAddress {
        HolderAddress::new(s)
    }

    #[test]
    fn empty_set_gates_everyone_out() {
        let gate = TokenGate::default();
        let oracle = MapOracle(HashMap::new());
        assert!(!gate.is_eligible(&oracle, &addr("alice")).unwrap());
    }

    #[test]
    fn any_held_token_confers_eligibility() {
        let gate = TokenGate::new(vec![TokenId::new(1), TokenId::new(2)]);
        let mut balances = HashMap::new();
        balances.insert((addr("alice"), TokenId::new(2)), 1);
        let oracle = MapOracle(balances);
        assert!(gate.is_eligible(&oracle, &addr("alice")).unwrap());
        assert!(!gate.is_eligible(&oracle, &addr("bob")).unwrap());
    }

    #[test]
    fn oracle_failure_is_not_ineligibility() {
        let gate = TokenGate::new(vec![TokenId::new(1)]);
        let err = gate.is_eligible(&DownOracle, &addr("alice")).unwrap_err();
        assert!(matches!(err, GovernanceError::OracleUnavailable(_)));
    }

    #[test]
    fn remove_swaps_last_entry_into_slot() {
        let (a, b, c) = (TokenId::new(10), TokenId::new(11), TokenId::new(12));
        let mut gate = TokenGate::new(vec![a, b, c]);
        let removed = gate.remove_token(0).unwrap();
        assert_eq!(removed, a);
        assert_eq!(gate.tokens(), [c, b]);
    }

    #[test]
    fn add_then_remove_at_appended_index_restores_set() {
        let mut gate = TokenGate::new(vec![TokenId::new(1), TokenId::new(2)]);
        let before = gate.tokens().to_vec();
        gate.add_token(TokenId::new(3));
        gate.remove_token(2).unwrap();
        assert_eq!(gate.tokens(), before.as_slice());
    }

    #[test]
    fn remove_out_of_range_is_rejected() {
        let mut gate = TokenGate::new(vec![TokenId::new(1)]);
        let err = gate.remove_token(1).unwrap_err();
        assert!(matches!(
            err,
            GovernanceError::IndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn duplicates_are_permitted() {
        let mut gate = TokenGate::new(vec![TokenId::new(7)]);
        gate.add_token(TokenId::new(7));
        assert_eq!(gate.tokens().len(), 2);
    }
}
