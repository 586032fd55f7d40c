//! Capacity growth policy
//!
//! Decides the allocation size for a buffer that must hold `need` bytes.
//! Small overshoots of the current capacity get an amortized over-allocation
//! so that runs of short sequential writes do not reallocate every time;
//! large jumps and large shrinks allocate exactly what was asked for.

use super::error::{BufferError, Result};

/// Largest allocation a buffer can ever make, in bytes.
pub const MAX_SIZE: usize = isize::MAX as usize;

/// Outcome of planning a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// The current allocation already satisfies the request.
    Keep,
    /// Shrink to the given capacity.
    Shrink(usize),
    /// Grow to the given capacity.
    Grow(usize),
}

impl Resize {
    /// The capacity the buffer will have after applying this plan.
    pub fn target(self, current: usize) -> usize {
        match self {
            Resize::Keep => current,
            Resize::Shrink(n) | Resize::Grow(n) => n,
        }
    }
}

/// Plan a resize so a buffer of `capacity` bytes can hold `need` bytes.
///
/// `max_size` bounds `need`; anything above it is an overflow and nothing
/// should be mutated. The computed allocation is checked separately against
/// [`MAX_SIZE`].
pub fn plan(need: usize, capacity: usize, max_size: usize) -> Result<Resize> {
    if need > max_size {
        return Err(BufferError::Overflow { requested: need });
    }

    let alloc = if need < capacity / 2 {
        // Major shrink: exact size.
        need.checked_add(1)
    } else if need < capacity {
        return Ok(Resize::Keep);
    } else if need <= capacity.saturating_add(capacity >> 3) {
        // Moderate growth, need <= capacity * 1.125.
        let pad = if need < 9 { 3 } else { 6 };
        need
            .checked_add(need >> 3)
            .and_then(|n| n.checked_add(pad))
    } else {
        // Major growth: exact size.
        need.checked_add(1)
    };

    match alloc {
        Some(alloc) if alloc <= MAX_SIZE => {
            if alloc < capacity {
                Ok(Resize::Shrink(alloc))
            } else {
                Ok(Resize::Grow(alloc))
            }
        }
        _ => Err(BufferError::Overflow { requested: need }),
    }
}
