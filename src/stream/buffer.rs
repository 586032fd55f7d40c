//! Growable Byte Stream
//!
//! An owned, contiguous byte region with a logical length and a single
//! cursor shared by reads and writes.

use std::io;

use tracing::{debug, trace, warn};

use super::error::{BufferError, Result};
use super::growth::{self, Resize, MAX_SIZE};
use super::lines::{scan_line, Lines};
use super::size::ReadSize;
use super::source::ByteSource;
use crate::config::BufferConfig;

/// In-memory byte stream.
///
/// The stored bytes are the high-water mark of everything written so far.
/// Writes past the logical end zero-fill the gap; reads never go past it.
#[derive(Debug)]
pub struct ByteBuffer {
    /// Logical contents, `None` once closed. `data.len()` is the stream length.
    data: Option<Vec<u8>>,
    /// Allocation size chosen by the growth policy. Never below `data.len()`.
    capacity: usize,
    /// Current read/write offset. May sit past the end of `data`.
    cursor: usize,
    /// Largest logical size accepted before reporting an overflow.
    max_size: usize,
}

impl ByteBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::with_max_size(MAX_SIZE)
    }

    /// Create an empty buffer that refuses to grow beyond `max_size` bytes
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            data: Some(Vec::new()),
            capacity: 0,
            cursor: 0,
            max_size,
        }
    }

    /// Create an empty buffer using the `[buffer]` configuration section
    pub fn with_config(config: &BufferConfig) -> Self {
        Self::with_max_size(config.max_size)
    }

    /// Create a buffer pre-loaded with `initial`, positioned at its start
    pub fn with_initial<S: ByteSource + ?Sized>(initial: &S) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.load(initial)?;
        Ok(buffer)
    }

    /// Start a fresh stream over `initial`.
    ///
    /// Length and cursor drop to zero while the allocation is kept, then the
    /// content is written and the cursor rewound to the start.
    pub fn reinit<S: ByteSource + ?Sized>(&mut self, initial: &S) -> Result<()> {
        let data = self.data.as_mut().ok_or(BufferError::Closed)?;
        debug!(
            discarded = data.len(),
            capacity = self.capacity,
            "reinitializing buffer"
        );
        data.clear();
        self.cursor = 0;
        self.load(initial)
    }

    /// Empty the stream, keeping the allocation
    pub fn reset(&mut self) -> Result<()> {
        self.reinit(&[][..])
    }

    fn load<S: ByteSource + ?Sized>(&mut self, initial: &S) -> Result<()> {
        self.write(initial)?;
        self.cursor = 0;
        Ok(())
    }

    /// Write `source` at the cursor and advance past it.
    ///
    /// Returns the number of bytes written. On error nothing is modified.
    pub fn write<S: ByteSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        if self.data.is_none() {
            return Err(BufferError::Closed);
        }
        let bytes = source.contiguous().ok_or_else(|| {
            BufferError::InvalidArgument("byte source has no contiguous view".to_string())
        })?;
        let n = bytes.len();
        if n == 0 {
            return Ok(0);
        }

        let end = self.cursor.checked_add(n).ok_or(BufferError::Overflow {
            requested: usize::MAX,
        })?;
        if end > self.max_size {
            warn!(need = end, max_size = self.max_size, "write exceeds buffer limit");
            return Err(BufferError::Overflow { requested: end });
        }
        if end > self.capacity {
            self.reserve(end)?;
        }

        let data = self.data.as_mut().ok_or(BufferError::Closed)?;
        if self.cursor > data.len() {
            // Gap between the old end and the cursor.
            data.resize(self.cursor, 0);
        }
        let overlap = data.len().min(end) - self.cursor;
        data[self.cursor..self.cursor + overlap].copy_from_slice(&bytes[..overlap]);
        data.extend_from_slice(&bytes[overlap..]);
        self.cursor = end;
        Ok(n)
    }

    /// Read up to `size` bytes from the cursor.
    ///
    /// Returns an empty vector at end of stream.
    pub fn read(&mut self, size: ReadSize) -> Result<Vec<u8>> {
        let data = self.data.as_deref().ok_or(BufferError::Closed)?;
        let n = size.clamp(data.len().saturating_sub(self.cursor));
        if n == 0 {
            return Ok(Vec::new());
        }
        let out = data[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        Ok(out)
    }

    /// Read the next line, newline included.
    ///
    /// The last line may lack a newline. Returns an empty vector at end of
    /// stream.
    pub fn read_line(&mut self) -> Result<Vec<u8>> {
        self.read_line_limited(ReadSize::ToEnd)
    }

    /// Read the next line, returning at most `limit` bytes of it.
    ///
    /// When the limit cuts the line short the rest is returned by later
    /// calls.
    pub fn read_line_limited(&mut self, limit: ReadSize) -> Result<Vec<u8>> {
        let data = self.data.as_deref().ok_or(BufferError::Closed)?;
        let start = self.cursor;
        let stop = match limit {
            ReadSize::ToEnd => data.len(),
            ReadSize::AtMost(n) => start.saturating_add(n).min(data.len()),
        };
        let end = scan_line(data, start, stop);
        if end == start {
            return Ok(Vec::new());
        }
        self.cursor = end;
        Ok(data[start..end].to_vec())
    }

    /// Iterate over the remaining lines.
    pub fn iter_lines(&mut self) -> Result<Lines<'_>> {
        let data = self.data.as_deref().ok_or(BufferError::Closed)?;
        Ok(Lines::new(data, &mut self.cursor))
    }

    /// Logical length of the stream
    pub fn size(&self) -> Result<usize> {
        self.data.as_ref().map(Vec::len).ok_or(BufferError::Closed)
    }

    /// Everything written so far, regardless of the cursor
    pub fn contents(&self) -> Result<&[u8]> {
        self.data.as_deref().ok_or(BufferError::Closed)
    }

    /// Current cursor offset
    pub fn position(&self) -> Result<usize> {
        self.check_open()?;
        Ok(self.cursor)
    }

    /// Bytes between the cursor and the end of the stream
    pub fn remaining(&self) -> Result<usize> {
        Ok(self.size()?.saturating_sub(self.cursor))
    }

    /// Allocation size chosen by the growth policy
    pub fn capacity(&self) -> Result<usize> {
        self.check_open()?;
        Ok(self.capacity)
    }

    /// Check if the buffer has been closed
    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    /// Give back storage when the stream uses under half of its allocation.
    pub fn compact(&mut self) -> Result<()> {
        let len = self.size()?;
        if len < self.capacity {
            self.reserve(len)?;
        }
        Ok(())
    }

    /// Release the storage. Later operations fail with
    /// [`BufferError::Closed`]; closing again does nothing.
    pub fn close(&mut self) {
        if let Some(data) = self.data.take() {
            debug!(
                len = data.len(),
                capacity = self.capacity,
                "closing buffer"
            );
            self.capacity = 0;
        }
    }

    fn check_open(&self) -> Result<()> {
        if self.data.is_none() {
            return Err(BufferError::Closed);
        }
        Ok(())
    }

    /// Apply the growth policy so the buffer can hold `need` bytes.
    fn reserve(&mut self, need: usize) -> Result<()> {
        let plan = growth::plan(need, self.capacity, self.max_size).map_err(|err| {
            warn!(need, max_size = self.max_size, "buffer size request rejected");
            err
        })?;
        let data = self.data.as_mut().ok_or(BufferError::Closed)?;
        debug_assert!(need >= data.len());

        match plan {
            Resize::Keep => return Ok(()),
            Resize::Grow(alloc) => {
                data.try_reserve_exact(alloc - data.len())
                    .map_err(|source| {
                        warn!(requested = alloc, "buffer allocation failed");
                        BufferError::OutOfMemory {
                            requested: alloc,
                            source,
                        }
                    })?;
            }
            Resize::Shrink(alloc) => data.shrink_to(alloc),
        }

        let alloc = plan.target(self.capacity);
        trace!(need, from = self.capacity, to = alloc, "resized buffer");
        self.capacity = alloc;
        Ok(())
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for ByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(ByteBuffer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(self.check_open()?)
    }
}

impl io::Read for ByteBuffer {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let chunk = io::BufRead::fill_buf(self)?;
        let n = chunk.len().min(out.len());
        out[..n].copy_from_slice(&chunk[..n]);
        io::BufRead::consume(self, n);
        Ok(n)
    }
}

impl io::BufRead for ByteBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        let data = self.data.as_deref().ok_or(BufferError::Closed)?;
        Ok(data.get(self.cursor..).unwrap_or_default())
    }

    fn consume(&mut self, amt: usize) {
        self.cursor = self.cursor.saturating_add(amt);
    }
}
