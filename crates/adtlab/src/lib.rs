//! # adtlab
//!
//! Abstract data types with explicit representation invariants.
//!
//! Every type in this workspace checks its invariant after each mutation
//! in debug builds and reports misuse through typed errors rather than
//! silently clamping input.
//!
//! ## Contents
//!
//! - **Polynomials**: sparse and dense single-variable integer polynomials
//!   in canonical form, with checked and panicking arithmetic
//! - **Queues**: a fixed-capacity ring buffer and a growable FIFO
//!
//! ## Quick Start
//!
//! ```rust
//! use adtlab::prelude::*;
//!
//! let p = SparsePoly::from_constant_degree(2, 0)?;
//! let q = SparsePoly::from_constant_degree(3, 1)?;
//! assert_eq!((&p * &q).coefficient(1)?, 6);
//!
//! let mut queue = IntQueue::new(2);
//! queue.enqueue(1).unwrap();
//! assert_eq!(queue.dequeue(), Ok(1));
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use adtlab_poly as poly;
pub use adtlab_queue as queue;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use adtlab_poly::{DensePoly, PolyError, SparsePoly, Term};
    pub use adtlab_queue::{BoundedQueue, IntQueue, QueueError, QueueState, UnboundedQueue};
}
