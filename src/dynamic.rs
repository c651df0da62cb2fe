//! Ring buffer over a heap array sized at runtime.
//!
//! Storage can be released with [`DynamicRing::erase_storage`] and allocated
//! again with [`DynamicRing::create_storage`]. Until then every read and write
//! reports [`RingError::NotInited`].

use log::{debug, trace};

use crate::error::RingError;
use crate::{bump_cursor, RingBuffer, DEFAULT_CAPACITY};

/// Dynamically-sized ring buffer
///
/// Uses the same sentinel-slot discipline as [`crate::FixedRing`]: a ring of
/// `size` slots holds at most `size - 1` elements.
#[derive(Debug)]
pub struct DynamicRing<T> {
    storage: Option<Box<[Option<T>]>>,
    write: usize,
    read: usize,
}

fn allocate<T>(size: usize) -> Result<Box<[Option<T>]>, RingError> {
    if size == 0 {
        debug!("rejecting dynamic ring allocation of 0 slots");
        return Err(RingError::InvalidCapacity { requested: size });
    }
    trace!("allocating dynamic ring storage of {} slots", size);
    Ok((0..size).map(|_| None).collect())
}

impl<T> DynamicRing<T> {
    /// Create a ring with `size` slots
    ///
    /// # Returns
    /// * `Ok(DynamicRing)` on success
    /// * `Err(RingError::InvalidCapacity)` if `size` is 0
    pub fn new(size: usize) -> Result<Self, RingError> {
        Ok(Self {
            storage: Some(allocate(size)?),
            write: 0,
            read: 0,
        })
    }

    /// Create a ring with no storage; call [`DynamicRing::create_storage`] before use
    pub const fn unallocated() -> Self {
        Self {
            storage: None,
            write: 0,
            read: 0,
        }
    }

    /// Allocate `size` slots if the ring has no storage
    ///
    /// Does nothing when storage already exists, whatever its size. This is
    /// not a resize.
    pub fn create_storage(&mut self, size: usize) -> Result<(), RingError> {
        if let Some(storage) = &self.storage {
            trace!(
                "dynamic ring already holds {} slots, ignoring create({})",
                storage.len(),
                size
            );
            return Ok(());
        }

        self.storage = Some(allocate(size)?);
        self.write = 0;
        self.read = 0;
        Ok(())
    }

    /// Release storage and every element in it; a no-op without storage
    pub fn erase_storage(&mut self) {
        if let Some(storage) = self.storage.take() {
            trace!("releasing dynamic ring storage of {} slots", storage.len());
        }
        self.write = 0;
        self.read = 0;
    }

    /// Whether storage is currently allocated
    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Number of elements the ring can actually hold, or 0 without storage
    pub fn usable_capacity(&self) -> usize {
        self.capacity().saturating_sub(1)
    }

    /// Drop every stored element, keeping the storage
    pub fn clear(&mut self) {
        if let Some(storage) = self.storage.as_mut() {
            for slot in storage.iter_mut() {
                *slot = None;
            }
        }
        self.write = 0;
        self.read = 0;
    }

    /// Iterate over stored elements, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let slots: &[Option<T>] = self.storage.as_deref().unwrap_or(&[]);
        let size = slots.len();
        let read = self.read;
        (0..self.len()).filter_map(move |i| slots[(read + i) % size].as_ref())
    }
}

impl<T> Default for DynamicRing<T> {
    /// A ring of [`DEFAULT_CAPACITY`] slots
    fn default() -> Self {
        Self {
            storage: Some((0..DEFAULT_CAPACITY).map(|_| None).collect()),
            write: 0,
            read: 0,
        }
    }
}

impl<T> RingBuffer<T> for DynamicRing<T> {
    fn try_write(&mut self, value: T) -> Result<(), RingError> {
        let storage = self.storage.as_mut().ok_or(RingError::NotInited)?;

        let next = bump_cursor(self.write, storage.len());
        if next == self.read {
            return Err(RingError::Full);
        }

        storage[self.write] = Some(value);
        self.write = next;
        Ok(())
    }

    fn try_read(&mut self) -> Result<T, RingError> {
        let storage = self.storage.as_mut().ok_or(RingError::NotInited)?;

        if self.read == self.write {
            return Err(RingError::Empty);
        }

        let value = storage[self.read].take().ok_or(RingError::Empty)?;
        self.read = bump_cursor(self.read, storage.len());
        Ok(value)
    }

    fn peek(&self) -> Option<&T> {
        if self.read == self.write {
            return None;
        }
        self.storage.as_ref()?[self.read].as_ref()
    }

    /// Allocated slot count, or 0 without storage
    fn capacity(&self) -> usize {
        self.storage.as_ref().map_or(0, |s| s.len())
    }

    fn len(&self) -> usize {
        match self.capacity() {
            0 => 0,
            size => (self.write + size - self.read) % size,
        }
    }

    fn is_full(&self) -> bool {
        match self.capacity() {
            0 => false,
            size => bump_cursor(self.write, size) == self.read,
        }
    }
}
