//! Dense univariate polynomials.
//!
//! This module stores every coefficient up to the degree, which suits
//! polynomials with few missing powers. Results agree with
//! [`SparsePoly`] under the `From` conversions at the bottom of the file.

use std::fmt;

use num_traits::{One, Zero};

use crate::error::PolyError;
use crate::sparse::SparsePoly;
use crate::term::Term;

/// A dense univariate polynomial with `i64` coefficients.
///
/// Coefficients are stored in ascending degree order, with no trailing
/// zeros except for the zero polynomial `[0]`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DensePoly {
    /// Coefficients in ascending degree order.
    coeffs: Vec<i64>,
}

/// Largest coefficient vector whose degree still fits in a `u32`.
const MAX_LEN: u64 = u32::MAX as u64 + 1;

impl DensePoly {
    /// Creates a new polynomial from coefficients in ascending degree order.
    ///
    /// Trailing zeros are trimmed; an empty vector is the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOverflow`] if the degree would not fit
    /// in a `u32`.
    pub fn new(coeffs: Vec<i64>) -> Result<Self, PolyError> {
        if coeffs.len() as u64 > MAX_LEN {
            return Err(PolyError::DegreeOverflow);
        }
        Ok(Self::trimmed(coeffs))
    }

    /// Normalize: remove trailing zeros.
    fn trimmed(mut coeffs: Vec<i64>) -> Self {
        while coeffs.len() > 1 && coeffs.last() == Some(&0) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(0);
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// Creates the monomial `coeff·x^degree`.
    ///
    /// Allocates `degree + 1` coefficients, so a large degree costs memory
    /// even though only one of them is nonzero. Use [`SparsePoly`] for
    /// high-degree monomials.
    ///
    /// # Panics
    ///
    /// Panics, or aborts the process, if the `degree + 1` coefficients
    /// cannot be allocated.
    #[must_use]
    pub fn monomial(coeff: i64, degree: u32) -> Self {
        if coeff == 0 {
            return Self::zero();
        }
        let n = degree as usize;
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = coeff;
        Self { coeffs }
    }

    /// Creates the monomial `coeff·x^degree` from an unchecked degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] if `degree < 0` and
    /// [`PolyError::DegreeOverflow`] if it exceeds `u32::MAX`.
    ///
    /// # Panics
    ///
    /// Same allocation failure as [`DensePoly::monomial`].
    pub fn from_constant_degree(coeff: i64, degree: i64) -> Result<Self, PolyError> {
        let degree = PolyError::check_degree(degree)?;
        Ok(Self::monomial(coeff, degree))
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn degree(&self) -> u32 {
        // `new` rejects vectors longer than `MAX_LEN`
        (self.coeffs.len() - 1) as u32
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0
    }

    /// Returns the coefficient of `x^degree`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOutOfRange`] if `degree` is negative or
    /// greater than [`Self::degree`].
    pub fn coefficient(&self, degree: i64) -> Result<i64, PolyError> {
        usize::try_from(degree)
            .ok()
            .and_then(|i| self.coeffs.get(i).copied())
            .ok_or(PolyError::DegreeOutOfRange {
                degree,
                max: self.degree(),
            })
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Iterates over the non-zero terms in ascending degree order.
    ///
    /// The zero polynomial yields its single zero term.
    pub fn iter_terms(&self) -> impl Iterator<Item = Term> + '_ {
        let zero = self.is_zero().then_some(Term::ZERO);
        zero.into_iter().chain(
            self.degrees()
                .map(|d| Term::new(self.coeffs[d as usize], d)),
        )
    }

    /// Iterates over the degrees that carry a non-zero coefficient.
    #[allow(clippy::cast_possible_truncation)]
    pub fn degrees(&self) -> impl Iterator<Item = u32> + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0)
            .map(|(i, _)| i as u32)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if an intermediate value
    /// does not fit.
    pub fn eval(&self, x: i64) -> Result<i64, PolyError> {
        self.coeffs.iter().rev().try_fold(0i64, |acc, c| {
            acc.checked_mul(x)
                .and_then(|v| v.checked_add(*c))
                .ok_or(PolyError::CoefficientOverflow)
        })
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if a coefficient sum overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PolyError> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).copied().unwrap_or(0);
            let b = other.coeffs.get(i).copied().unwrap_or(0);
            result.push(a.checked_add(b).ok_or(PolyError::CoefficientOverflow)?);
        }

        Ok(Self::trimmed(result))
    }

    /// Negates every coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if a coefficient is `i64::MIN`.
    pub fn checked_minus(&self) -> Result<Self, PolyError> {
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| c.checked_neg().ok_or(PolyError::CoefficientOverflow))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { coeffs })
    }

    /// Subtracts two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] on coefficient overflow.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PolyError> {
        self.checked_add(&other.checked_minus()?)
    }

    /// Schoolbook multiplication: O(n²).
    ///
    /// Each coefficient is summed in `i128`, so only a final coefficient
    /// outside `i64` is an overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOverflow`] or
    /// [`PolyError::CoefficientOverflow`] if the product does not fit.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolyError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let degree = self
            .degree()
            .checked_add(other.degree())
            .ok_or(PolyError::DegreeOverflow)?;
        let mut result = vec![0i128; degree as usize + 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                let product = i128::from(*a) * i128::from(*b);
                result[i + j] = result[i + j]
                    .checked_add(product)
                    .ok_or(PolyError::CoefficientOverflow)?;
            }
        }

        let coeffs = result
            .into_iter()
            .map(|c| i64::try_from(c).map_err(|_| PolyError::CoefficientOverflow))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::trimmed(coeffs))
    }

    /// Adds two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient overflows; see [`Self::checked_add`].
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.checked_add(other)
            .unwrap_or_else(|e| panic!("polynomial addition failed: {e}"))
    }

    /// Subtracts two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient overflows; see [`Self::checked_sub`].
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.checked_sub(other)
            .unwrap_or_else(|e| panic!("polynomial subtraction failed: {e}"))
    }

    /// Multiplies two polynomials.
    ///
    /// # Panics
    ///
    /// Panics on degree or coefficient overflow; see [`Self::checked_mul`].
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.checked_mul(other)
            .unwrap_or_else(|e| panic!("polynomial multiplication failed: {e}"))
    }

    /// Negates a polynomial.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient is `i64::MIN`.
    #[must_use]
    pub fn minus(&self) -> Self {
        self.checked_minus()
            .unwrap_or_else(|e| panic!("polynomial negation failed: {e}"))
    }
}

impl Default for DensePoly {
    fn default() -> Self {
        Self::zero()
    }
}

forward_binop!(DensePoly, Add, add);
forward_binop!(DensePoly, Sub, sub);
forward_binop!(DensePoly, Mul, mul);
forward_neg!(DensePoly);

impl Zero for DensePoly {
    fn zero() -> Self {
        DensePoly::zero()
    }

    fn is_zero(&self) -> bool {
        DensePoly::is_zero(self)
    }
}

impl One for DensePoly {
    fn one() -> Self {
        DensePoly::one()
    }
}

/// Expands a sparse polynomial into its dense form.
///
/// # Panics
///
/// Allocates `degree + 1` coefficients, however few terms the input has,
/// and panics or aborts if that allocation fails.
impl From<&SparsePoly> for DensePoly {
    fn from(poly: &SparsePoly) -> Self {
        let mut coeffs = vec![0i64; poly.degree() as usize + 1];
        for term in poly.terms() {
            coeffs[term.degree() as usize] = term.coeff();
        }
        Self { coeffs }
    }
}

impl From<&DensePoly> for SparsePoly {
    fn from(poly: &DensePoly) -> Self {
        SparsePoly::from_canonical(poly.iter_terms().collect())
    }
}

impl fmt::Display for DensePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&SparsePoly::from(self), f)
    }
}
