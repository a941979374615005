//! Fixtures for tests in other crates
//!
//! Deterministic keystone chains plus logger setup for test binaries.

pub mod keystones;
pub mod logging;

pub use keystones::{make_shared_keystones, validate_keystone_chain, KeystoneIndex};
pub use logging::init_test_logging;
