//! Utility functions and helpers
//!
//! Hashing, random bytes and the fixed-length buffer builders that fixtures
//! use to fill out records of an exact size.

pub mod bytes;
pub mod crypto;

pub use bytes::{fill_bytes, fill_bytes_zero, FILL_BYTE};
pub use crypto::{double_sha256_digest, random_bytes, sha256_digest, SHA256_OUTPUT_LEN};
