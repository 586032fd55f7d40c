//! bytesio - In-memory growable byte stream
//!
//! A single owned buffer with a logical length and one cursor shared by
//! reads and writes, shaped like the request-body stream a web server hands
//! to an application.
//!
//! # Features
//!
//! - **Amortized growth**: exact allocations for large jumps, a small
//!   over-allocation for writes that barely overshoot the current capacity
//! - **Gap zero-fill**: writing past the logical end fills the hole with zeros
//! - **Line reads**: newline-inclusive `read_line`, plus a lazy, fused line
//!   iterator that borrows straight from the buffer
//! - **Explicit lifecycle**: `close` releases storage and every later
//!   operation reports [`BufferError::Closed`]
//! - **std::io interop**: implements `Read`, `BufRead` and `Write`
//!
//! # Example
//!
//! ```rust
//! use bytesio::{ByteBuffer, ReadSize};
//!
//! let mut buf = ByteBuffer::with_initial(b"hello\nworld").unwrap();
//! assert_eq!(buf.size().unwrap(), 11);
//! assert_eq!(buf.read(ReadSize::AtMost(4)).unwrap(), b"hell");
//! assert_eq!(buf.read_line().unwrap(), b"o\n");
//!
//! let rest: Vec<&[u8]> = buf.iter_lines().unwrap().collect();
//! assert_eq!(rest, vec![&b"world"[..]]);
//!
//! buf.close();
//! assert!(buf.read_line().is_err());
//! ```
//!
//! # Layout
//!
//! ```text
//! 0                 cursor           length        capacity
//! ├── already read ──┼── remaining ───┼── reserved ───┤
//! ```

pub mod config;
pub mod logging;
pub mod stream;

pub use config::{BufferConfig, BytesioConfig, CliConfig, ConfigError, LogConfig};
pub use stream::{
    BufferError, ByteBuffer, ByteSource, Lines, ReadSize, Resize, Result, MAX_SIZE,
};
