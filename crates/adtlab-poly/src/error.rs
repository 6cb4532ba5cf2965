//! Errors raised by polynomial construction, queries and arithmetic.

use thiserror::Error;

/// Errors that can occur when building or combining polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A term was requested with a negative degree.
    #[error("negative exponent {0}")]
    NegativeExponent(i64),

    /// A polynomial was requested from an empty term collection.
    #[error("a polynomial needs at least one term")]
    InvalidPolynomial,

    /// A coefficient was queried outside `[0, degree]`.
    #[error("degree {degree} is outside 0..={max}")]
    DegreeOutOfRange {
        /// The requested degree.
        degree: i64,
        /// The degree of the polynomial.
        max: u32,
    },

    /// A degree does not fit the degree type.
    #[error("degree overflow")]
    DegreeOverflow,

    /// Coefficient arithmetic overflowed `i64`.
    #[error("coefficient overflow")]
    CoefficientOverflow,
}

impl PolyError {
    /// Validates a caller-supplied degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] for negative input and
    /// [`PolyError::DegreeOverflow`] when it does not fit in a `u32`.
    pub fn check_degree(degree: i64) -> Result<u32, Self> {
        if degree < 0 {
            return Err(Self::NegativeExponent(degree));
        }
        u32::try_from(degree).map_err(|_| Self::DegreeOverflow)
    }
}
