//! Fixed-length buffers for fixtures
//!
//! A readable prefix followed by padding. A prefix longer than the requested
//! length is cut to fit. Negative lengths behave like zero.

/// Padding byte used by [`fill_bytes`].
pub const FILL_BYTE: u8 = b'_';

/// Returns exactly `n` bytes: `prefix` followed by underscores.
pub fn fill_bytes(prefix: &str, n: isize) -> Vec<u8> {
    let mut result = fill_bytes_zero(prefix, n);
    let start = prefix.len().min(result.len());
    result[start..].fill(FILL_BYTE);
    result
}

/// Returns exactly `n` bytes: `prefix` followed by zero bytes.
pub fn fill_bytes_zero(prefix: &str, n: isize) -> Vec<u8> {
    let n = usize::try_from(n).unwrap_or(0);
    let prefix = prefix.as_bytes();
    let prefix = &prefix[..prefix.len().min(n)];

    let mut result = vec![0u8; n];
    result[..prefix.len()].copy_from_slice(prefix);
    result
}
