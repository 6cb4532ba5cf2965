//! Growable FIFO queue.

use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::error::QueueError;

/// A FIFO queue without a capacity bound.
///
/// Shares the [`BoundedQueue`](crate::BoundedQueue) contract except that
/// enqueue never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnboundedQueue<T> {
    elements: VecDeque<T>,
}

impl<T> UnboundedQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the queue holds no element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.elements.push_back(value);
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
        self.elements.pop_front().ok_or_else(|| {
            trace!("dequeue rejected: queue empty");
            QueueError::Empty
        })
    }

    /// Returns the element at the front without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.iter()
    }
}

impl<T> Default for UnboundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for UnboundedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for UnboundedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: fmt::Display> fmt::Display for UnboundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
