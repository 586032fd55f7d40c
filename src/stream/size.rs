//! Read sizes

use std::fmt;
use std::str::FromStr;

use super::error::BufferError;

/// How many bytes a read may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadSize {
    /// Everything up to the end of the stream.
    #[default]
    ToEnd,
    /// At most this many bytes.
    AtMost(usize),
}

impl ReadSize {
    /// Clamp to the bytes actually available.
    pub fn clamp(self, remaining: usize) -> usize {
        match self {
            ReadSize::ToEnd => remaining,
            ReadSize::AtMost(n) => n.min(remaining),
        }
    }
}

/// Negative sizes read to the end, as stream APIs traditionally do.
impl From<i64> for ReadSize {
    fn from(size: i64) -> Self {
        if size < 0 {
            return ReadSize::ToEnd;
        }
        ReadSize::AtMost(usize::try_from(size).unwrap_or(usize::MAX))
    }
}

impl From<Option<usize>> for ReadSize {
    fn from(size: Option<usize>) -> Self {
        size.map_or(ReadSize::ToEnd, ReadSize::AtMost)
    }
}

impl FromStr for ReadSize {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(ReadSize::ToEnd);
        }
        s.parse::<i64>().map(ReadSize::from).map_err(|_| {
            BufferError::InvalidArgument(format!("integer argument expected, got '{}'", s))
        })
    }
}

impl fmt::Display for ReadSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadSize::ToEnd => f.write_str("all"),
            ReadSize::AtMost(n) => write!(f, "{}", n),
        }
    }
}
