//! # adtlab-queue
//!
//! First-in first-out queues.
//!
//! This crate provides:
//! - [`BoundedQueue`]: a fixed-capacity ring buffer that never reallocates
//! - [`UnboundedQueue`]: a growable queue with the same FIFO contract
//!
//! Both report misuse through [`QueueError`] and leave the queue untouched
//! when an operation fails.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bounded;
pub mod error;
pub mod unbounded;

#[cfg(test)]
mod proptests;

pub use bounded::{BoundedQueue, IntQueue, QueueState};
pub use error::QueueError;
pub use unbounded::UnboundedQueue;
