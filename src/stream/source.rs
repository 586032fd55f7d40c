//! Byte sources accepted by [`ByteBuffer::write`](super::ByteBuffer::write).

use std::borrow::Cow;
use std::collections::VecDeque;

/// Anything that can lend a read-only contiguous view of its bytes.
///
/// Returning `None` means the value holds bytes but cannot present them as a
/// single slice; the buffer rejects such a source as an invalid argument.
pub trait ByteSource {
    /// Borrow the source's bytes as one slice, if possible.
    fn contiguous(&self) -> Option<&[u8]>;
}

impl ByteSource for [u8] {
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for Vec<u8> {
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for Box<[u8]> {
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for Cow<'_, [u8]> {
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for str {
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl ByteSource for String {
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

/// A ring buffer is only contiguous while it has not wrapped around.
impl ByteSource for VecDeque<u8> {
    fn contiguous(&self) -> Option<&[u8]> {
        match self.as_slices() {
            (front, []) => Some(front),
            ([], back) => Some(back),
            _ => None,
        }
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn contiguous(&self) -> Option<&[u8]> {
        (**self).contiguous()
    }
}
