//! Keystone fixtures
//!
//! Builds a reproducible chain of keystones together with an index keyed by
//! each keystone's abbreviated hash. Every hash input is derived from the
//! loop index so two calls with the same count produce identical output.

use crate::core::{ChainHash, L2Keystone, L2KeystoneAbrev};
use log::debug;
use std::collections::HashMap;

/// Keystone index keyed by abbreviated hash
pub type KeystoneIndex = HashMap<ChainHash, L2KeystoneAbrev>;

const KEYSTONE_VERSION: u8 = 1;
const GENESIS_L1_BLOCK: u32 = 10_000;
const L2_BLOCKS_PER_KEYSTONE: u32 = 25;

// Never emitted; the first generated keystone links back to it.
fn synthetic_genesis() -> L2Keystone {
    L2Keystone {
        version: KEYSTONE_VERSION,
        l1_block_number: GENESIS_L1_BLOCK,
        l2_block_number: L2_BLOCKS_PER_KEYSTONE,
        prev_keystone_ep_hash: ChainHash::sha256(&[0, 0]),
        ep_hash: ChainHash::sha256(&[0]),
        ..L2Keystone::default()
    }
}

/// Creates `n` linked keystones and the matching abbreviated-hash index.
pub fn make_shared_keystones(n: usize) -> (KeystoneIndex, Vec<L2Keystone>) {
    let mut keystones = Vec::with_capacity(n);
    let mut index = KeystoneIndex::with_capacity(n);

    let mut prev = synthetic_genesis();
    for ci in 0..n {
        // Byte seeds wrap past 255 the same way the block numbers do.
        let x = (ci + 1) as u8;
        let keystone = L2Keystone {
            version: KEYSTONE_VERSION,
            l1_block_number: prev.l1_block_number.wrapping_add(1),
            l2_block_number: ((ci + 1) as u32).wrapping_mul(L2_BLOCKS_PER_KEYSTONE),
            parent_ep_hash: ChainHash::sha256(&[x, x]),
            prev_keystone_ep_hash: prev.ep_hash,
            state_root: ChainHash::sha256(&[x, x, x]),
            ep_hash: ChainHash::sha256(&[x]),
        };

        let abrev = keystone.abbreviate();
        index.insert(abrev.hash(), abrev);
        keystones.push(keystone);
        prev = keystone;
    }

    debug!("Generated {} shared keystones", keystones.len());
    (index, keystones)
}

/// Validate keystone chain linkage
///
/// Every keystone must reference its predecessor's epoch hash and sit on a
/// later L1 block.
pub fn validate_keystone_chain(keystones: &[L2Keystone]) -> bool {
    keystones.windows(2).all(|pair| {
        let (prev, next) = (&pair[0], &pair[1]);
        next.follows(prev) && next.l1_block_number > prev.l1_block_number
    })
}
