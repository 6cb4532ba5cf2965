//! Fixed-capacity FIFO queue over a ring buffer.
//!
//! With only `head` and `tail` indices a ring buffer cannot tell "empty"
//! from "full", since both put the indices on the same slot. Here `head`
//! is `None` exactly when the queue is empty, and an empty queue always has
//! `tail == 0`, so `head == Some(tail)` means full.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::QueueError;

/// A bounded queue of integers.
pub type IntQueue = BoundedQueue<i64>;

/// Occupancy of a [`BoundedQueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueState {
    /// No elements.
    Empty,
    /// Some elements, some free slots.
    Partial,
    /// Every slot is taken.
    Full,
}

/// A FIFO queue with a capacity fixed at construction.
///
/// Enqueue and dequeue are O(1) and never move elements.
///
/// # Invariants
///
/// - `head` is `None` or an index in `0..capacity`
/// - `tail` is in `0..capacity`, or 0 when `capacity == 0`
/// - `head == None` implies `tail == 0`
/// - slots in the circular range `head..tail` hold `Some`, the rest `None`
#[derive(Clone, Debug)]
pub struct BoundedQueue<T> {
    /// Backing ring buffer.
    elements: Box<[Option<T>]>,
    /// Index of the first element, `None` when empty.
    head: Option<usize>,
    /// Index of the first free slot.
    tail: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// A queue of capacity 0 is both empty and full.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let queue = Self {
            elements: (0..capacity).map(|_| None).collect(),
            head: None,
            tail: 0,
        };
        debug_assert!(queue.rep_ok());
        queue
    }

    /// Returns the maximum number of elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the queue holds no element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns true if no element can be enqueued.
    #[must_use]
    pub fn is_full(&self) -> bool {
        match self.head {
            Some(head) => head == self.tail,
            None => self.capacity() == 0,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        let capacity = self.capacity();
        match self.head {
            None => 0,
            Some(head) if head == self.tail => capacity,
            Some(head) => (self.tail + capacity - head) % capacity,
        }
    }

    /// Returns the current occupancy state.
    #[must_use]
    pub fn state(&self) -> QueueState {
        if self.is_empty() {
            QueueState::Empty
        } else if self.is_full() {
            QueueState::Full
        } else {
            QueueState::Partial
        }
    }

    /// Appends `value` at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Full`], carrying `value`, if the queue is full.
    /// The queue is left unchanged.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError<T>> {
        let capacity = self.capacity();
        if self.is_full() {
            trace!(capacity, "enqueue rejected: queue full");
            return Err(QueueError::Full {
                capacity,
                rejected: value,
            });
        }

        if self.head.is_none() {
            self.head = Some(0);
        }
        self.elements[self.tail] = Some(value);
        self.tail = (self.tail + 1) % capacity;

        debug_assert!(self.rep_ok());
        Ok(())
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
        let Some(head) = self.head else {
            trace!(capacity = self.capacity(), "dequeue rejected: queue empty");
            return Err(QueueError::Empty);
        };
        // a non-empty queue always holds a value at `head`
        let Some(value) = self.elements[head].take() else {
            unreachable!("slot {head} is empty while the queue is not");
        };

        let next = (head + 1) % self.capacity();
        if next == self.tail {
            trace!(capacity = self.capacity(), "last element removed, resetting");
            self.head = None;
            self.tail = 0;
        } else {
            self.head = Some(next);
        }

        debug_assert!(self.rep_ok());
        Ok(value)
    }

    /// Returns the element at the front without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|head| self.elements[head].as_ref())
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let head = self.head.unwrap_or(0);
        let capacity = self.capacity();
        (0..self.size()).filter_map(move |i| self.elements[(head + i) % capacity].as_ref())
    }

    /// Checks the representation invariant.
    fn rep_ok(&self) -> bool {
        let capacity = self.capacity();
        let tail_ok = if capacity == 0 {
            self.tail == 0
        } else {
            self.tail < capacity
        };
        let head_ok = match self.head {
            None => self.tail == 0,
            Some(head) => head < capacity,
        };
        let occupied = self.elements.iter().filter(|slot| slot.is_some()).count();

        tail_ok && head_ok && occupied == self.size() && self.iter().count() == occupied
    }
}

impl<T: PartialEq> PartialEq for BoundedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.size() == other.size()
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedQueue<T> {}

impl<T: Hash> Hash for BoundedQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity().hash(state);
        self.size().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
