use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlocksizerError {
    /// The argument named no existing file and is not a representable
    /// unsigned decimal integer.
    #[error("not a valid number or out of range: '{0}'")]
    InvalidNumber(String),

    /// A path that appeared accessible failed the metadata lookup.
    #[error("cannot determine size of '{path}': {source}")]
    InvalidFilename {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The argument resolved to a zero byte count, which every candidate
    /// blocksize divides and is therefore rejected outright.
    #[error("invalid input: '{0}'")]
    InvalidInput(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
