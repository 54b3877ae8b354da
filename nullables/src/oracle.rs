//! Nullable balance oracle — programmable token balances for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokengov_governance::{BalanceOracle, OracleError};
use tokengov_types::{HolderAddress, TokenId};

#[derive(Default)]
struct OracleState {
    balances: HashMap<(HolderAddress, TokenId), u128>,
    unavailable: bool,
}

/// An in-memory balance oracle for testing.
///
/// Clones share state, so a test can keep a handle and adjust balances (or
/// take the oracle offline) after handing a clone to the engine.
#[derive(Clone, Default)]
pub struct NullOracle {
    inner: Arc<Mutex<OracleState>>,
}

impl NullOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the balance the oracle reports for `(holder, token)`.
    pub fn set_balance(&self, holder: &HolderAddress, token: TokenId, amount: u128) {
        self.inner
            .lock()
            .unwrap()
            .balances
            .insert((holder.clone(), token), amount);
    }

    /// Take the oracle offline (every subsequent query fails) or bring it
    /// back online.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().unavailable = unavailable;
    }
}

impl BalanceOracle for NullOracle {
    fn balance_of(&self, holder: &HolderAddress, token: TokenId) -> Result<u128, OracleError> {
        let state = self.inner.lock().unwrap();
        if state.unavailable {
            return Err(OracleError::new("oracle offline"));
        }
        Ok(*state
            .balances
            .get(&(holder.clone(), token))
            .unwrap_or(&0))
    }
}
