//! # arbor-core: shared plumbing for the arbor analytics tool
//!
//! Provides the unified error type used across the arbor crates and the
//! seed-generation capability backing the seed-defaulting policy of the
//! option framework.

pub mod error;
pub mod random;

pub use error::{ArborError, ArborResult};
pub use random::{generate_seed, UNSET_SEED};
