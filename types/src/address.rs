//! Holder address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The address of a token holder, as reported by the external ledger.
///
/// Opaque to the engine: addresses are compared for equality and hashed,
/// never parsed or derived here.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolderAddress(String);

impl HolderAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for HolderAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for HolderAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
