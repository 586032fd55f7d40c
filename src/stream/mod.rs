//! Stream module
//!
//! Contains the growable byte buffer and the pieces it is built from:
//! - `growth`: the capacity policy (exact fits for big jumps, amortized
//!   over-allocation for small overshoots)
//! - `lines`: the line scanner shared by `read_line` and iteration
//! - `source`: the [`ByteSource`] capability accepted by writes
//! - `size`: [`ReadSize`], the "how much to read" argument

pub mod buffer;
pub mod error;
pub mod growth;
pub mod lines;
pub mod size;
pub mod source;

pub use buffer::ByteBuffer;
pub use error::{BufferError, Result};
pub use growth::{Resize, MAX_SIZE};
pub use lines::Lines;
pub use size::ReadSize;
pub use source::ByteSource;
