//! # ringkit - bounded FIFO ring buffers
//!
//! Three single-owner ring buffers that share one contract, [`RingBuffer`],
//! and differ only in how they store elements.
//!
//! ## Variants
//!
//! - [`FixedRing`] - inline array, length fixed by a const generic
//! - [`DynamicRing`] - heap array sized at runtime, can be released and reallocated
//! - [`LinkedRing`] - cycle of doubly-linked nodes that can grow in place
//!
//! ## Design
//!
//! - Non-blocking: a write into a full ring or a read from an empty one
//!   fails immediately with [`RingError`]
//! - Array rings keep one sentinel slot free, so a ring of `N` slots holds `N - 1`
//! - The linked ring counts occupancy explicitly and can use every node
//! - A failed operation leaves the ring untouched
//! - Reads move the element out; nothing hands out references into storage
//!   except [`RingBuffer::peek`]
//!
//! ## Example
//!
//! ```
//! use ringkit::{DynamicRing, ResultCode, RingBuffer, RingError};
//!
//! let mut ring = DynamicRing::new(3).unwrap();
//!
//! ring.try_write(1).unwrap();
//! ring.try_write(2).unwrap();
//! assert_eq!(ring.try_write(3), Err(RingError::Full));
//!
//! assert_eq!(ring.try_read(), Ok(1));
//! let status = ResultCode::of(&ring.try_write(3));
//! assert_eq!(status, ResultCode::Success);
//! ```

#![warn(missing_docs)]

mod dynamic;
mod error;
mod fixed;
mod linked;

pub use dynamic::DynamicRing;
pub use error::{ResultCode, RingError};
pub use fixed::FixedRing;
pub use linked::{Iter as LinkedIter, LinkedRing};

use static_assertions::{assert_impl_all, const_assert};

/// Slot count used by [`FixedRing`] and [`DynamicRing::default`] when none is given
pub const DEFAULT_CAPACITY: usize = 10;

const_assert!(DEFAULT_CAPACITY >= 2);

assert_impl_all!(FixedRing<u64>: Send, Sync, Default);
assert_impl_all!(DynamicRing<String>: Send, Sync, Default);
assert_impl_all!(LinkedRing<String>: Send, Sync, Default);
assert_impl_all!(RingError: std::error::Error, Send, Sync, Copy);

/// Bounded FIFO contract shared by every ring variant
///
/// Mutating operations take `&mut self`; a ring has exactly one owner that
/// both writes and reads.
pub trait RingBuffer<T> {
    /// Store `value` behind the newest element
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RingError::Full)` if no slot is free
    /// * `Err(RingError::NotInited)` if the ring has no storage
    fn try_write(&mut self, value: T) -> Result<(), RingError>;

    /// Remove and return the oldest element
    ///
    /// # Returns
    /// * `Ok(T)` with the element
    /// * `Err(RingError::Empty)` if nothing is stored
    /// * `Err(RingError::NotInited)` if the ring has no storage
    fn try_read(&mut self) -> Result<T, RingError>;

    /// The element the next [`RingBuffer::try_read`] would return
    fn peek(&self) -> Option<&T>;

    /// Number of storage slots
    fn capacity(&self) -> usize;

    /// Number of stored elements
    fn len(&self) -> usize;

    /// `true` if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if the next write would fail with [`RingError::Full`]
    fn is_full(&self) -> bool;
}

/// Advance a cursor one slot, wrapping to 0 at `size`.
#[inline]
pub(crate) const fn bump_cursor(cursor: usize, size: usize) -> usize {
    let next = cursor + 1;
    if next == size {
        0
    } else {
        next
    }
}
