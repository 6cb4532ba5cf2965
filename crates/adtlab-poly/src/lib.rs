//! # adtlab-poly
//!
//! Single-variable polynomials with `i64` coefficients.
//!
//! This crate provides:
//! - Sparse polynomials stored as canonical (coefficient, degree) term lists
//! - Dense polynomials stored as trimmed coefficient vectors
//! - Lossless conversion between the two representations
//!
//! ## Canonical Form
//!
//! Every constructor and every arithmetic operation returns a value in
//! canonical form, so structural equality is mathematical equality:
//! - Sparse: terms sorted by ascending degree, distinct degrees, no zero
//!   coefficients except the single term of the zero polynomial
//! - Dense: no trailing zero coefficients except the zero polynomial `[0]`
//!
//! ## Overflow
//!
//! `checked_*` operations report degree and coefficient overflow as
//! [`PolyError`]. The plain operations and the `std::ops` impls panic instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::should_implement_trait)]

#[macro_use]
mod macros;

pub mod dense;
pub mod error;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::PolyError;
pub use sparse::SparsePoly;
pub use term::Term;
