//! Resolve a command-line operand to a byte count.

use std::fs;
use std::path::Path;

use crate::error::BlocksizerError;

/// Resolve `arg` to a byte count.
///
/// An existing filesystem entry takes precedence: its metadata length is the
/// byte count (no file content is read). Otherwise the argument must be a
/// string of decimal digits parsed as `u64`. A byte count of zero is rejected
/// as invalid input in either case.
pub fn resolve_byte_count(arg: &str) -> Result<u64, BlocksizerError> {
    let path = Path::new(arg);
    let byte_count = if path.exists() {
        let meta = fs::metadata(path).map_err(|e| BlocksizerError::InvalidFilename {
            path: arg.to_string(),
            source: e,
        })?;
        meta.len()
    } else {
        parse_byte_count(arg)?
    };

    if byte_count == 0 {
        return Err(BlocksizerError::InvalidInput(arg.to_string()));
    }
    Ok(byte_count)
}

/// Parse an all-decimal-digit string as a `u64` byte count.
fn parse_byte_count(arg: &str) -> Result<u64, BlocksizerError> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BlocksizerError::InvalidNumber(arg.to_string()));
    }
    arg.parse::<u64>()
        .map_err(|_| BlocksizerError::InvalidNumber(arg.to_string()))
}
