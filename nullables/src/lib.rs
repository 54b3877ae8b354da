//! Nullable infrastructure for deterministic testing.
//!
//! The engine's external collaborators (the monotonic clock and the balance
//! oracle) are abstracted at its API boundary. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod oracle;

pub use clock::NullClock;
pub use oracle::NullOracle;
