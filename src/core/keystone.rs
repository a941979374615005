//! Keystone records
//!
//! Keystones checkpoint an L2 block against the L1 block that carried it.
//! Fixtures only need the full record and its abbreviated form; the
//! abbreviated encoding is fixed-width big-endian so its hash is stable.

use crate::core::hash::{ChainHash, ShortHash, CHAIN_HASH_LEN, SHORT_HASH_LEN};
use crate::error::{Result, TestUtilError};
use serde::{Deserialize, Serialize};

/// Size in bytes of an encoded [`L2KeystoneAbrev`].
pub const KEYSTONE_ABREV_SIZE: usize = 1 + 4 + 4 + SHORT_HASH_LEN * 3 + CHAIN_HASH_LEN;

const L1_OFFSET: usize = 1;
const L2_OFFSET: usize = L1_OFFSET + 4;
const PARENT_OFFSET: usize = L2_OFFSET + 4;
const PREV_OFFSET: usize = PARENT_OFFSET + SHORT_HASH_LEN;
const STATE_ROOT_OFFSET: usize = PREV_OFFSET + SHORT_HASH_LEN;
const EP_OFFSET: usize = STATE_ROOT_OFFSET + CHAIN_HASH_LEN;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2Keystone {
    pub version: u8,
    pub l1_block_number: u32,
    pub l2_block_number: u32,
    pub parent_ep_hash: ChainHash,
    pub prev_keystone_ep_hash: ChainHash,
    pub state_root: ChainHash,
    pub ep_hash: ChainHash,
}

impl L2Keystone {
    pub fn abbreviate(&self) -> L2KeystoneAbrev {
        L2KeystoneAbrev {
            version: self.version,
            l1_block_number: self.l1_block_number,
            l2_block_number: self.l2_block_number,
            parent_ep_hash: self.parent_ep_hash.short(),
            prev_keystone_ep_hash: self.prev_keystone_ep_hash.short(),
            state_root: self.state_root,
            ep_hash: self.ep_hash.short(),
        }
    }

    /// Hash of the abbreviated form, the key keystones are indexed by.
    pub fn abbreviated_hash(&self) -> ChainHash {
        self.abbreviate().hash()
    }

    /// True when `self` directly follows `prev` in a keystone chain.
    pub fn follows(&self, prev: &L2Keystone) -> bool {
        self.prev_keystone_ep_hash == prev.ep_hash
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2KeystoneAbrev {
    pub version: u8,
    pub l1_block_number: u32,
    pub l2_block_number: u32,
    pub parent_ep_hash: ShortHash,
    pub prev_keystone_ep_hash: ShortHash,
    pub state_root: ChainHash,
    pub ep_hash: ShortHash,
}

impl L2KeystoneAbrev {
    pub fn to_bytes(&self) -> [u8; KEYSTONE_ABREV_SIZE] {
        let mut out = [0u8; KEYSTONE_ABREV_SIZE];
        out[0] = self.version;
        out[L1_OFFSET..L2_OFFSET].copy_from_slice(&self.l1_block_number.to_be_bytes());
        out[L2_OFFSET..PARENT_OFFSET].copy_from_slice(&self.l2_block_number.to_be_bytes());
        out[PARENT_OFFSET..PREV_OFFSET].copy_from_slice(self.parent_ep_hash.as_bytes());
        out[PREV_OFFSET..STATE_ROOT_OFFSET].copy_from_slice(self.prev_keystone_ep_hash.as_bytes());
        out[STATE_ROOT_OFFSET..EP_OFFSET].copy_from_slice(self.state_root.as_bytes());
        out[EP_OFFSET..].copy_from_slice(self.ep_hash.as_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<L2KeystoneAbrev> {
        if bytes.len() != KEYSTONE_ABREV_SIZE {
            return Err(TestUtilError::InvalidKeystone(format!(
                "abbreviated keystone must be {KEYSTONE_ABREV_SIZE} bytes, got {}",
                bytes.len()
            )));
        }

        Ok(L2KeystoneAbrev {
            version: bytes[0],
            l1_block_number: u32::from_be_bytes(read_array(bytes, L1_OFFSET)),
            l2_block_number: u32::from_be_bytes(read_array(bytes, L2_OFFSET)),
            parent_ep_hash: ShortHash::from_bytes(read_array(bytes, PARENT_OFFSET)),
            prev_keystone_ep_hash: ShortHash::from_bytes(read_array(bytes, PREV_OFFSET)),
            state_root: ChainHash::from_bytes(read_array(bytes, STATE_ROOT_OFFSET)),
            ep_hash: ShortHash::from_bytes(read_array(bytes, EP_OFFSET)),
        })
    }

    /// Double SHA-256 of the encoded record.
    pub fn hash(&self) -> ChainHash {
        ChainHash::double_sha256(&self.to_bytes())
    }
}

// Callers have already checked the total length.
fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> L2Keystone {
        L2Keystone {
            version: 1,
            l1_block_number: 0x0102_0304,
            l2_block_number: 0x0a0b_0c0d,
            parent_ep_hash: ChainHash::sha256(&[1, 1]),
            prev_keystone_ep_hash: ChainHash::sha256(&[0]),
            state_root: ChainHash::sha256(&[1, 1, 1]),
            ep_hash: ChainHash::sha256(&[1]),
        }
    }

    #[test]
    fn test_abbreviate_truncates_epoch_hashes() {
        let ks = sample();
        let abrev = ks.abbreviate();

        assert_eq!(abrev.version, 1);
        assert_eq!(abrev.parent_ep_hash, ks.parent_ep_hash.short());
        assert_eq!(abrev.prev_keystone_ep_hash, ks.prev_keystone_ep_hash.short());
        assert_eq!(abrev.ep_hash, ks.ep_hash.short());
        assert_eq!(abrev.state_root, ks.state_root);
    }

    #[test]
    fn test_to_bytes_layout() {
        let abrev = sample().abbreviate();
        let bytes = abrev.to_bytes();

        assert_eq!(bytes.len(), KEYSTONE_ABREV_SIZE);
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[1..5], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[5..9], &[0x0a, 0x0b, 0x0c, 0x0d]);
        assert_eq!(&bytes[STATE_ROOT_OFFSET..EP_OFFSET], abrev.state_root.as_bytes());
    }

    #[test]
    fn test_from_bytes_restores_record() {
        let abrev = sample().abbreviate();
        let decoded = L2KeystoneAbrev::from_bytes(&abrev.to_bytes()).unwrap();
        assert_eq!(decoded, abrev);
        assert_eq!(decoded.hash(), abrev.hash());
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        let bytes = sample().abbreviate().to_bytes();
        assert!(matches!(
            L2KeystoneAbrev::from_bytes(&bytes[..KEYSTONE_ABREV_SIZE - 1]),
            Err(TestUtilError::InvalidKeystone(_))
        ));
        assert!(L2KeystoneAbrev::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_byte_encoding_is_independent_of_serde() {
        let abrev = sample().abbreviate();
        let json = serde_json::to_string(&abrev).unwrap();
        let parsed: L2KeystoneAbrev = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, abrev);
        assert_eq!(parsed.to_bytes(), abrev.to_bytes());
    }

    #[test]
    fn test_hash_changes_with_content() {
        let ks = sample();
        let mut other = ks;
        other.l1_block_number += 1;
        assert_eq!(ks.abbreviated_hash(), ks.abbreviated_hash());
        assert_ne!(ks.abbreviated_hash(), other.abbreviated_hash());
    }

    #[test]
    fn test_follows() {
        let first = sample();
        let second = L2Keystone {
            prev_keystone_ep_hash: first.ep_hash,
            ep_hash: ChainHash::sha256(&[2]),
            ..first
        };
        assert!(second.follows(&first));
        assert!(!first.follows(&second));
    }
}
