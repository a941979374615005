use ring::digest::{Context, SHA256, SHA256_OUTPUT_LEN as RING_SHA256_LEN};
use ring::rand::{SecureRandom, SystemRandom};

use crate::error::{Result, TestUtilError};

pub const SHA256_OUTPUT_LEN: usize = RING_SHA256_LEN;

pub fn sha256_digest(data: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();

    let mut out = [0u8; SHA256_OUTPUT_LEN];
    out.copy_from_slice(digest.as_ref());
    out
}

/// SHA-256 applied twice, the digest Bitcoin uses for block and record hashes.
pub fn double_sha256_digest(data: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
    sha256_digest(&sha256_digest(data))
}

/// Returns `count` bytes from the operating system's secure random source.
///
/// A failing entropy source is reported as [`TestUtilError::Entropy`]; tests
/// usually `unwrap()` since nothing sensible can follow it.
pub fn random_bytes(count: usize) -> Result<Vec<u8>> {
    let rng = SystemRandom::new();
    let mut bytes = vec![0u8; count];
    rng.fill(&mut bytes)
        .map_err(|e| TestUtilError::Entropy(format!("Failed to read {count} random bytes: {e}")))?;
    Ok(bytes)
}
