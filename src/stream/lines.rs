//! Line scanning
//!
//! A line runs from the cursor through the next `\n` inclusive. Without a
//! newline the line ends at the scan limit, which yields a final unterminated
//! fragment once and an empty slice afterwards.

use std::iter::FusedIterator;

/// Return the end offset of the line that starts at `start`, looking no
/// further than `end`.
///
/// A start at or past `end` yields `start`, i.e. an empty line.
pub(crate) fn scan_line(data: &[u8], start: usize, end: usize) -> usize {
    if start >= end {
        return start;
    }
    match data[start..end].iter().position(|&b| b == b'\n') {
        Some(i) => start + i + 1,
        None => end,
    }
}

/// Lazy, single-pass iterator over the lines of a
/// [`ByteBuffer`](super::ByteBuffer), created by
/// [`ByteBuffer::iter_lines`](super::ByteBuffer::iter_lines).
///
/// Each item borrows straight from the buffer's storage. The buffer's cursor
/// advances as lines are yielded, so a partially consumed iterator leaves
/// the buffer positioned after the last line it returned. Once a scan comes
/// up empty the iterator stays exhausted.
#[derive(Debug)]
pub struct Lines<'a> {
    data: &'a [u8],
    cursor: &'a mut usize,
    done: bool,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(data: &'a [u8], cursor: &'a mut usize) -> Self {
        Self {
            data,
            cursor,
            done: false,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let data = self.data;
        let start = *self.cursor;
        let end = scan_line(data, start, data.len());
        if end == start {
            self.done = true;
            return None;
        }
        *self.cursor = end;
        Some(&data[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = self.data.len().saturating_sub(*self.cursor);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Lines<'_> {}
