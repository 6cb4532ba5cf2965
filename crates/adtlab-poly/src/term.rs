//! Single polynomial terms.
//!
//! A term is the pair `(coefficient, degree)` standing for `c·x^d`.

use std::fmt;

use crate::error::PolyError;

/// A single term `coeff·x^degree`.
///
/// Terms with a zero coefficient are the zero term regardless of degree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Term {
    coeff: i64,
    degree: u32,
}

impl Term {
    /// The zero term `0·x^0`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates the term `coeff·x^degree`.
    #[must_use]
    pub const fn new(coeff: i64, degree: u32) -> Self {
        Self { coeff, degree }
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coeff(&self) -> i64 {
        self.coeff
    }

    /// Returns the degree.
    #[must_use]
    pub const fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.coeff == 0
    }

    /// Negates the coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] for `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self, PolyError> {
        let coeff = self.coeff.checked_neg().ok_or(PolyError::CoefficientOverflow)?;
        Ok(Self::new(coeff, self.degree))
    }

    /// Evaluates the term at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if the value does not fit.
    pub fn checked_eval(&self, x: i64) -> Result<i64, PolyError> {
        x.checked_pow(self.degree)
            .and_then(|p| p.checked_mul(self.coeff))
            .ok_or(PolyError::CoefficientOverflow)
    }

    /// Writes the power of `x` part: empty, `x`, or `x^d`.
    pub(crate) fn fmt_power(degree: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match degree {
            0 => Ok(()),
            1 => write!(f, "x"),
            d => write!(f, "x^{d}"),
        }
    }

    /// Writes `|coeff|·x^degree` without its sign, eliding a unit coefficient.
    pub(crate) fn fmt_magnitude(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.coeff.unsigned_abs();
        if magnitude != 1 || self.degree == 0 {
            write!(f, "{magnitude}")?;
        }
        Self::fmt_power(self.degree, f)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff < 0 {
            write!(f, "-")?;
        }
        self.fmt_magnitude(f)
    }
}

impl From<(i64, u32)> for Term {
    fn from((coeff, degree): (i64, u32)) -> Self {
        Self::new(coeff, degree)
    }
}
