//! Buffer Errors
//!
//! Every fallible buffer operation reports one of these synchronously. None
//! of them are retried internally.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Errors raised by [`ByteBuffer`](super::ByteBuffer) operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The buffer was closed and its storage released.
    #[error("I/O operation on closed buffer")]
    Closed,

    /// A requested size exceeds what the buffer may hold.
    #[error("new buffer size too large: {requested} bytes")]
    Overflow { requested: usize },

    /// The allocator refused to provide the requested storage.
    #[error("out of memory allocating {requested} bytes")]
    OutOfMemory {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// The caller supplied input the buffer cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for buffer operations.
pub type Result<T> = std::result::Result<T, BufferError>;

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        let kind = match err {
            BufferError::Closed => io::ErrorKind::Other,
            BufferError::InvalidArgument(_) => io::ErrorKind::InvalidInput,
            BufferError::Overflow { .. } | BufferError::OutOfMemory { .. } => {
                io::ErrorKind::OutOfMemory
            }
        };
        io::Error::new(kind, err)
    }
}
