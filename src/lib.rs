//! Calculate the largest power-of-two blocksize that evenly divides a
//! filesize, for picking an efficient `dd`-style copy block size.
//!
//! The input is either a decimal byte count or the name of an existing file
//! (the file's size is used). The search walks candidate blocksizes downward
//! from [`MAX_BLOCK_SIZE`] by successive halvings and stops at
//! [`MIN_BLOCK_SIZE`].

pub mod cli;
pub mod error;
pub mod render;
pub mod resolve;
pub mod search;
pub mod wrap;

pub use cli::{dispatch, Command};
pub use error::BlocksizerError;
pub use resolve::resolve_byte_count;
pub use search::{find_block_count, find_blocksize};

/// Smallest acceptable blocksize in bytes.
pub const MIN_BLOCK_SIZE: u64 = 512;
/// Largest acceptable blocksize in bytes (2^20, i.e. 1 MiB).
pub const MAX_BLOCK_SIZE: u64 = 1 << 20;
