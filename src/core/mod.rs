//! Core chain types
//!
//! The hash type shared by every fixture and the keystone records that
//! checkpoint L2 state on L1.

pub mod hash;
pub mod keystone;

pub use hash::{ChainHash, ShortHash, CHAIN_HASH_LEN, SHORT_HASH_LEN};
pub use keystone::{L2Keystone, L2KeystoneAbrev, KEYSTONE_ABREV_SIZE};
