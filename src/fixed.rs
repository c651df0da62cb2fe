//! Ring buffer over an inline array whose length is part of the type.

use crate::error::RingError;
use crate::{bump_cursor, RingBuffer, DEFAULT_CAPACITY};

struct CapacityCheck<const N: usize>;

impl<const N: usize> CapacityCheck<N> {
    /// Compile-time assertion that the ring has at least one slot.
    const OK: () = assert!(N > 0, "FixedRing capacity must be greater than 0");
}

/// Fixed-capacity ring buffer
///
/// Holds at most `N - 1` elements: one slot always stays empty so that
/// `read == write` means empty and `write + 1 == read` (mod `N`) means full.
///
/// ```
/// use ringkit::{FixedRing, RingBuffer, RingError};
///
/// let mut ring: FixedRing<u32, 3> = FixedRing::new();
/// ring.try_write(1).unwrap();
/// ring.try_write(2).unwrap();
/// assert_eq!(ring.try_write(3), Err(RingError::Full));
/// assert_eq!(ring.try_read(), Ok(1));
/// ```
#[derive(Debug)]
pub struct FixedRing<T, const N: usize = DEFAULT_CAPACITY> {
    buf: [Option<T>; N],
    write: usize,
    read: usize,
}

impl<T, const N: usize> FixedRing<T, N> {
    /// Create an empty ring
    ///
    /// Fails to compile if `N == 0`.
    pub fn new() -> Self {
        let () = CapacityCheck::<N>::OK;

        Self {
            buf: std::array::from_fn(|_| None),
            write: 0,
            read: 0,
        }
    }

    /// Number of elements the ring can actually hold (`N - 1`)
    pub const fn usable_capacity(&self) -> usize {
        N - 1
    }

    /// Drop every stored element and reset both cursors
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.write = 0;
        self.read = 0;
    }

    /// Iterate over stored elements, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let read = self.read;
        (0..self.len()).filter_map(move |i| self.buf[(read + i) % N].as_ref())
    }
}

impl<T, const N: usize> Default for FixedRing<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> RingBuffer<T> for FixedRing<T, N> {
    fn try_write(&mut self, value: T) -> Result<(), RingError> {
        let next = bump_cursor(self.write, N);
        if next == self.read {
            return Err(RingError::Full);
        }

        self.buf[self.write] = Some(value);
        self.write = next;
        Ok(())
    }

    fn try_read(&mut self) -> Result<T, RingError> {
        if self.read == self.write {
            return Err(RingError::Empty);
        }

        let value = self.buf[self.read].take().ok_or(RingError::Empty)?;
        self.read = bump_cursor(self.read, N);
        Ok(value)
    }

    fn peek(&self) -> Option<&T> {
        if self.read == self.write {
            None
        } else {
            self.buf[self.read].as_ref()
        }
    }

    /// Raw slot count `N`, one more than [`FixedRing::usable_capacity`]
    fn capacity(&self) -> usize {
        N
    }

    fn len(&self) -> usize {
        (self.write + N - self.read) % N
    }

    fn is_full(&self) -> bool {
        bump_cursor(self.write, N) == self.read
    }
}
