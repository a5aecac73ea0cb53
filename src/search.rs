//! Descending power-of-two divisor search.

use crate::MIN_BLOCK_SIZE;

/// Find the largest power-of-two blocksize no greater than `max_block_size`
/// that evenly divides `byte_count`.
///
/// Candidates are tested strictly in descending order, halving from
/// `max_block_size` down to [`MIN_BLOCK_SIZE`]. Returns `None` when no
/// candidate in that range divides evenly.
///
/// Callers must reject `byte_count == 0` before searching; zero is divisible
/// by every candidate and would always yield `max_block_size`.
pub fn find_blocksize(byte_count: u64, max_block_size: u64) -> Option<u64> {
    let mut candidate = max_block_size;
    while candidate >= MIN_BLOCK_SIZE {
        if byte_count % candidate == 0 {
            return Some(candidate);
        }
        candidate >>= 1;
    }
    None
}

/// Number of blocks of `blocksize` that make up `byte_count`.
///
/// Only meaningful for a `blocksize` returned by [`find_blocksize`] for the
/// same `byte_count`, in which case the division is exact.
pub fn find_block_count(byte_count: u64, blocksize: u64) -> u64 {
    byte_count / blocksize
}
