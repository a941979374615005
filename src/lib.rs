//! # Hemi Testutil - Shared Helpers for Hemi Test Suites
//!
//! Test code across the Hemi crates keeps needing the same small pieces, so
//! they live here instead of being copied into every test module.
//!
//! ## What's In Here
//! - **Keystone fixtures**: a deterministic chain of linked L2 keystones plus
//!   an index keyed by abbreviated hash
//! - **Byte helpers**: fixed-length padded buffers, OS random bytes, SHA-256
//! - **Free ports**: an ephemeral TCP port for test servers
//! - **Script harness**: single-steps a Bitcoin script engine and dumps
//!   every opcode and stack when asked
//!
//! ## Layout
//! - `core/`: `ChainHash` and the keystone records
//! - `utils/`: hashing, randomness and padding
//! - `testnet/`: keystone fixtures and test logger setup
//! - `network/`: free port probing
//! - `script/`: the engine trait and the stepping harness
//! - `config/`: bind host and log level settings
//! - `error/`: the crate error type
//!
//! Nothing here keeps state between calls apart from the global config and
//! the logger. Failures that would abort a Go test (entropy, port probes) come
//! back as [`TestUtilError`] so the test decides what to do with them.

pub mod config;
pub mod core;
pub mod error;
pub mod network;
pub mod script;
pub mod testnet;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{Config, GLOBAL_CONFIG};
pub use crate::core::{
    ChainHash, L2Keystone, L2KeystoneAbrev, ShortHash, KEYSTONE_ABREV_SIZE,
};
pub use error::{Result, TestUtilError};
pub use network::{free_port, free_port_number};
pub use script::{
    execute_tx, format_stack, trace_tx, ScriptEngine, ScriptFlags, ScriptStep, ScriptTrace,
    ScriptTx,
};
pub use testnet::{
    init_test_logging, make_shared_keystones, validate_keystone_chain, KeystoneIndex,
};
pub use utils::{
    double_sha256_digest, fill_bytes, fill_bytes_zero, random_bytes, sha256_digest, FILL_BYTE,
    SHA256_OUTPUT_LEN,
};
