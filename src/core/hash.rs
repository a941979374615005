use crate::error::{Result, TestUtilError};
use crate::utils::{double_sha256_digest, sha256_digest};
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CHAIN_HASH_LEN: usize = 32;
pub const SHORT_HASH_LEN: usize = 12;

/// A 32-byte hash, shown in reversed byte order like Bitcoin block and
/// transaction ids.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChainHash([u8; CHAIN_HASH_LEN]);

impl ChainHash {
    pub const fn zero() -> ChainHash {
        ChainHash([0u8; CHAIN_HASH_LEN])
    }

    pub const fn from_bytes(bytes: [u8; CHAIN_HASH_LEN]) -> ChainHash {
        ChainHash(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<ChainHash> {
        let array: [u8; CHAIN_HASH_LEN] = bytes.try_into().map_err(|_| {
            TestUtilError::InvalidHash(format!(
                "expected {CHAIN_HASH_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(ChainHash(array))
    }

    pub fn sha256(data: &[u8]) -> ChainHash {
        ChainHash(sha256_digest(data))
    }

    pub fn double_sha256(data: &[u8]) -> ChainHash {
        ChainHash(double_sha256_digest(data))
    }

    pub fn as_bytes(&self) -> &[u8; CHAIN_HASH_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// The leading bytes kept by abbreviated records.
    pub fn short(&self) -> ShortHash {
        let mut short = [0u8; SHORT_HASH_LEN];
        short.copy_from_slice(&self.0[..SHORT_HASH_LEN]);
        ShortHash(short)
    }
}

impl AsRef<[u8]> for ChainHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ChainHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&HEXLOWER.encode(&reversed))
    }
}

impl FromStr for ChainHash {
    type Err = TestUtilError;

    fn from_str(s: &str) -> Result<ChainHash> {
        let mut bytes = [0u8; CHAIN_HASH_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        bytes.reverse();
        Ok(ChainHash(bytes))
    }
}

/// Truncated hash carried by abbreviated keystones.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ShortHash([u8; SHORT_HASH_LEN]);

impl ShortHash {
    pub const fn from_bytes(bytes: [u8; SHORT_HASH_LEN]) -> ShortHash {
        ShortHash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SHORT_HASH_LEN] {
        &self.0
    }
}

impl fmt::Display for ShortHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&HEXLOWER.encode(&self.0))
    }
}
