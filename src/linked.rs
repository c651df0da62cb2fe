//! Ring buffer over a cycle of doubly-linked nodes.
//!
//! Nodes live in an arena (`Vec<Node<T>>`) and link to their neighbours by
//! index, so the cycle has no owning back-edges and teardown is a plain drop
//! of the arena: every node is released exactly once no matter how the links
//! are arranged.
//!
//! Unlike the array rings, every node is usable. Full and empty both have
//! `read == write`, so occupancy is kept as an explicit counter.
//!
//! The cycle can grow after construction with [`LinkedRing::push_next`] and
//! [`LinkedRing::push_prev`], which splice a new node next to the write cursor.

use log::{debug, trace};

use crate::error::RingError;
use crate::RingBuffer;

#[derive(Debug)]
struct Node<T> {
    value: Option<T>,
    next: usize,
    prev: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursors {
    write: usize,
    read: usize,
}

/// Linked-cycle ring buffer
///
/// ```
/// use ringkit::{LinkedRing, RingBuffer, RingError};
///
/// let mut ring = LinkedRing::new(2).unwrap();
/// ring.try_write('a').unwrap();
/// ring.try_write('b').unwrap();
/// assert_eq!(ring.try_write('c'), Err(RingError::Full));
///
/// // Growing the cycle makes room for one more.
/// ring.push_prev('c');
/// assert_eq!(ring.capacity(), 3);
/// assert_eq!(ring.iter().collect::<String>(), "abc");
/// ```
#[derive(Debug)]
pub struct LinkedRing<T> {
    nodes: Vec<Node<T>>,
    /// `None` exactly when `nodes` is empty
    cursors: Option<Cursors>,
    len: usize,
}

fn build_cycle<T>(size: usize) -> Result<Vec<Node<T>>, RingError> {
    if size == 0 {
        debug!("rejecting linked ring of 0 nodes");
        return Err(RingError::InvalidCapacity { requested: size });
    }
    trace!("building linked ring cycle of {} nodes", size);
    Ok((0..size)
        .map(|i| Node {
            value: None,
            next: (i + 1) % size,
            prev: (i + size - 1) % size,
        })
        .collect())
}

impl<T> LinkedRing<T> {
    /// Create a ring of `size` empty nodes
    ///
    /// # Returns
    /// * `Ok(LinkedRing)` on success
    /// * `Err(RingError::InvalidCapacity)` if `size` is 0
    pub fn new(size: usize) -> Result<Self, RingError> {
        Ok(Self {
            nodes: build_cycle(size)?,
            cursors: Some(Cursors { write: 0, read: 0 }),
            len: 0,
        })
    }

    /// Create a ring with no nodes
    ///
    /// Reads and writes report [`RingError::NotInited`] until
    /// [`LinkedRing::create_buf`] or a push adds nodes.
    pub const fn unallocated() -> Self {
        Self {
            nodes: Vec::new(),
            cursors: None,
            len: 0,
        }
    }

    /// Build a cycle of `size` nodes if the ring has none
    ///
    /// A ring that already has nodes is left untouched.
    pub fn create_buf(&mut self, size: usize) -> Result<(), RingError> {
        if self.cursors.is_some() {
            trace!(
                "linked ring already holds {} nodes, ignoring create({})",
                self.nodes.len(),
                size
            );
            return Ok(());
        }

        self.nodes = build_cycle(size)?;
        self.cursors = Some(Cursors { write: 0, read: 0 });
        self.len = 0;
        Ok(())
    }

    /// Release every node and clear both cursors; a no-op without nodes
    pub fn erase_buf(&mut self) {
        if self.cursors.take().is_some() {
            trace!("releasing linked ring of {} nodes", self.nodes.len());
        }
        // Dropping the arena frees each node once, independent of the links.
        self.nodes = Vec::new();
        self.len = 0;
    }

    /// Splice a node holding `value` in directly after the write cursor
    ///
    /// The node joins the free part of the cycle: capacity grows by one,
    /// occupancy does not change, and `value` stays in the slot until a write
    /// reaches it. When the ring is full, the slot after the write cursor holds
    /// the oldest element, so the node goes into the gap just behind the
    /// cursor instead and becomes the next write position.
    pub fn push_next(&mut self, value: T) {
        let Some(mut cursors) = self.cursors else {
            self.start_cycle(value, 0);
            return;
        };

        if self.is_full() {
            cursors.write = self.splice_before(cursors.write, Some(value));
            self.cursors = Some(cursors);
        } else {
            self.splice_after(cursors.write, Some(value));
        }
        trace!("push_next grew linked ring to {} nodes", self.nodes.len());
    }

    /// Splice a node holding `value` in directly before the write cursor
    ///
    /// That is the tail of the queue, so `value` becomes the newest element:
    /// both capacity and occupancy grow by one.
    pub fn push_prev(&mut self, value: T) {
        let Some(mut cursors) = self.cursors else {
            self.start_cycle(value, 1);
            return;
        };

        let node = self.splice_before(cursors.write, Some(value));
        if self.len == 0 {
            cursors.read = node;
            self.cursors = Some(cursors);
        }
        self.len += 1;
        trace!("push_prev grew linked ring to {} nodes", self.nodes.len());
    }

    /// Number of nodes in the cycle
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the ring currently has any nodes
    pub fn has_storage(&self) -> bool {
        self.cursors.is_some()
    }

    /// Drop every stored element, keeping the cycle
    pub fn clear(&mut self) {
        for node in self.nodes.iter_mut() {
            node.value = None;
        }
        if let Some(cursors) = self.cursors.as_mut() {
            cursors.read = cursors.write;
        }
        self.len = 0;
    }

    /// Iterate over stored elements, oldest first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            at: self.cursors.map_or(0, |c| c.read),
            remaining: self.len,
        }
    }

    fn start_cycle(&mut self, value: T, len: usize) {
        self.nodes.push(Node {
            value: Some(value),
            next: 0,
            prev: 0,
        });
        self.cursors = Some(Cursors { write: 0, read: 0 });
        self.len = len;
        trace!("started linked ring with a single node");
    }

    fn splice_after(&mut self, at: usize, value: Option<T>) -> usize {
        let node = self.nodes.len();
        let next = self.nodes[at].next;
        self.nodes.push(Node {
            value,
            next,
            prev: at,
        });
        self.nodes[next].prev = node;
        self.nodes[at].next = node;
        node
    }

    fn splice_before(&mut self, at: usize, value: Option<T>) -> usize {
        let node = self.nodes.len();
        let prev = self.nodes[at].prev;
        self.nodes.push(Node {
            value,
            next: at,
            prev,
        });
        self.nodes[prev].next = node;
        self.nodes[at].prev = node;
        node
    }
}

impl<T> Default for LinkedRing<T> {
    fn default() -> Self {
        Self::unallocated()
    }
}

impl<T> RingBuffer<T> for LinkedRing<T> {
    fn try_write(&mut self, value: T) -> Result<(), RingError> {
        let cursors = self.cursors.as_mut().ok_or(RingError::NotInited)?;
        if self.len == self.nodes.len() {
            return Err(RingError::Full);
        }

        let node = &mut self.nodes[cursors.write];
        node.value = Some(value);
        cursors.write = node.next;
        self.len += 1;
        Ok(())
    }

    fn try_read(&mut self) -> Result<T, RingError> {
        let cursors = self.cursors.as_mut().ok_or(RingError::NotInited)?;
        if self.len == 0 {
            return Err(RingError::Empty);
        }

        let node = &mut self.nodes[cursors.read];
        let value = node.value.take().ok_or(RingError::Empty)?;
        cursors.read = node.next;
        self.len -= 1;
        Ok(value)
    }

    fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.nodes[self.cursors?.read].value.as_ref()
    }

    fn capacity(&self) -> usize {
        self.nodes.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_full(&self) -> bool {
        self.cursors.is_some() && self.len == self.nodes.len()
    }
}

/// Iterator over the elements of a [`LinkedRing`], following `next` links
/// from the read cursor
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    at: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.at)?;
        self.at = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
