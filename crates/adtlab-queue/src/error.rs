//! Queue errors.

use thiserror::Error;

/// Errors returned by queue operations.
///
/// A rejected enqueue hands the element back so the caller keeps ownership.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueueError<T> {
    /// The queue has no free slot.
    #[error("queue is full (capacity {capacity})")]
    Full {
        /// Capacity of the queue.
        capacity: usize,
        /// The element that could not be enqueued.
        rejected: T,
    },

    /// The queue has no element to remove.
    #[error("queue is empty")]
    Empty,
}

impl<T> QueueError<T> {
    /// Returns the rejected element of a [`QueueError::Full`].
    #[must_use]
    pub fn into_rejected(self) -> Option<T> {
        match self {
            Self::Full { rejected, .. } => Some(rejected),
            Self::Empty => None,
        }
    }
}
