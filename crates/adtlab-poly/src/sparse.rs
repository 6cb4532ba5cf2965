//! Sparse univariate polynomials.
//!
//! This module provides a term-list representation that only stores
//! non-zero coefficients, so `x^1000 + 1` costs two terms.

use std::fmt;

use num_traits::{One, Zero};
use tracing::trace;

use crate::error::PolyError;
use crate::term::Term;

/// A sparse univariate polynomial with `i64` coefficients.
///
/// Terms are stored sorted by ascending degree. The representation is
/// always canonical:
/// - the term list is never empty
/// - degrees are strictly increasing
/// - no coefficient is zero, except the single term `0·x^0` of the zero
///   polynomial
///
/// Instances are immutable; every operation returns a new polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SparsePoly {
    /// Terms in ascending degree order.
    terms: Vec<Term>,
}

impl SparsePoly {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: vec![Term::ZERO],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::monomial(1, 0)
    }

    /// Creates the monomial `coeff·x^degree`.
    ///
    /// A zero coefficient yields the zero polynomial, whatever the degree.
    #[must_use]
    pub fn monomial(coeff: i64, degree: u32) -> Self {
        if coeff == 0 {
            return Self::zero();
        }
        Self {
            terms: vec![Term::new(coeff, degree)],
        }
    }

    /// Creates the monomial `coeff·x^degree` from an unchecked degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] if `degree < 0` and
    /// [`PolyError::DegreeOverflow`] if it exceeds `u32::MAX`.
    pub fn from_constant_degree(coeff: i64, degree: i64) -> Result<Self, PolyError> {
        let degree = PolyError::check_degree(degree)?;
        Ok(Self::monomial(coeff, degree))
    }

    /// Creates a polynomial from an arbitrary term collection.
    ///
    /// The terms are normalized: like degrees are combined and zero
    /// coefficients dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidPolynomial`] if `terms` is empty and
    /// [`PolyError::CoefficientOverflow`] if combining like terms overflows.
    pub fn from_terms<I>(terms: I) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = Term>,
    {
        let terms: Vec<Term> = terms.into_iter().collect();
        if terms.is_empty() {
            return Err(PolyError::InvalidPolynomial);
        }
        Self::normalized(terms)
    }

    /// Wraps terms that are already canonical.
    pub(crate) fn from_canonical(terms: Vec<Term>) -> Self {
        let poly = Self { terms };
        debug_assert!(poly.rep_ok(), "non-canonical polynomial: {poly:?}");
        poly
    }

    /// Sorts terms, combines like terms and restores the zero term if
    /// everything cancelled.
    fn normalized(terms: Vec<Term>) -> Result<Self, PolyError> {
        Self::from_wide(
            terms
                .into_iter()
                .map(|t| (t.degree(), i128::from(t.coeff())))
                .collect(),
        )
    }

    /// Normalizes `(degree, coefficient)` pairs whose coefficients are
    /// summed in `i128`, so only a combined coefficient that does not fit
    /// in `i64` is rejected, whatever the order of the input.
    fn from_wide(mut terms: Vec<(u32, i128)>) -> Result<Self, PolyError> {
        terms.sort_unstable_by_key(|(degree, _)| *degree);

        let mut sums: Vec<(u32, i128)> = Vec::with_capacity(terms.len());
        for (degree, coeff) in terms {
            match sums.last_mut() {
                Some((last, sum)) if *last == degree => {
                    *sum = sum.checked_add(coeff).ok_or(PolyError::CoefficientOverflow)?;
                }
                _ => sums.push((degree, coeff)),
            }
        }

        let mut combined = Vec::with_capacity(sums.len());
        for (degree, sum) in sums {
            if sum != 0 {
                let coeff = i64::try_from(sum).map_err(|_| PolyError::CoefficientOverflow)?;
                combined.push(Term::new(coeff, degree));
            }
        }

        if combined.is_empty() {
            trace!("terms cancelled to the zero polynomial");
            combined.push(Term::ZERO);
        }

        Ok(Self::from_canonical(combined))
    }

    /// Checks the canonical-form invariant.
    fn rep_ok(&self) -> bool {
        match self.terms.as_slice() {
            [] => false,
            [only] => !only.is_zero() || only.degree() == 0,
            terms => {
                terms.iter().all(|t| !t.is_zero())
                    && terms.windows(2).all(|w| w[0].degree() < w[1].degree())
            }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_zero()
    }

    /// Returns the degree of the polynomial (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.last().map_or(0, Term::degree)
    }

    /// Returns the coefficient of `x^degree`, or 0 if no such term is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOutOfRange`] if `degree` is negative or
    /// greater than [`Self::degree`].
    pub fn coefficient(&self, degree: i64) -> Result<i64, PolyError> {
        let max = self.degree();
        let d = u32::try_from(degree)
            .ok()
            .filter(|d| *d <= max)
            .ok_or(PolyError::DegreeOutOfRange { degree, max })?;

        Ok(self
            .terms
            .binary_search_by_key(&d, Term::degree)
            .map_or(0, |i| self.terms[i].coeff()))
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false: even the zero polynomial stores one term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in ascending degree order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterates over the terms in ascending degree order.
    pub fn iter_terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms.iter().copied()
    }

    /// Iterates over the degrees that carry a non-zero coefficient.
    ///
    /// Yields nothing for the zero polynomial.
    pub fn degrees(&self) -> impl Iterator<Item = u32> + '_ {
        self.terms
            .iter()
            .filter(|t| !t.is_zero())
            .map(Term::degree)
    }

    /// Returns the term of highest degree.
    #[must_use]
    pub fn leading_term(&self) -> Term {
        self.terms.last().copied().unwrap_or(Term::ZERO)
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if the value does not fit.
    pub fn eval(&self, x: i64) -> Result<i64, PolyError> {
        self.terms.iter().try_fold(0i64, |acc, t| {
            acc.checked_add(t.checked_eval(x)?)
                .ok_or(PolyError::CoefficientOverflow)
        })
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if a coefficient sum overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PolyError> {
        let mut terms = Vec::with_capacity(self.len() + other.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        Self::normalized(terms)
    }

    /// Negates every coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if a coefficient is `i64::MIN`.
    pub fn checked_minus(&self) -> Result<Self, PolyError> {
        let terms = self
            .terms
            .iter()
            .map(Term::checked_neg)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms })
    }

    /// Subtracts `other` from `self`, as `self + (-other)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] on coefficient overflow.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PolyError> {
        self.checked_add(&other.checked_minus()?)
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// Every pairwise term product is accumulated and like degrees are
    /// summed, which is the same as adding the products one at a time.
    /// Products are summed in `i128`; only a final coefficient outside
    /// `i64` is an overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOverflow`] or
    /// [`PolyError::CoefficientOverflow`] if a product does not fit.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolyError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for t1 in &self.terms {
            for t2 in &other.terms {
                let degree = t1
                    .degree()
                    .checked_add(t2.degree())
                    .ok_or(PolyError::DegreeOverflow)?;
                let coeff = i128::from(t1.coeff()) * i128::from(t2.coeff());
                terms.push((degree, coeff));
            }
        }

        Self::from_wide(terms)
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

    /// Returns the additive inverse.
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

impl Default for SparsePoly {
    fn default() -> Self {
        Self::zero()
    }
}

forward_binop!(SparsePoly, Add, add);
forward_binop!(SparsePoly, Sub, sub);
forward_binop!(SparsePoly, Mul, mul);
forward_neg!(SparsePoly);

impl Zero for SparsePoly {
    fn zero() -> Self {
        SparsePoly::zero()
    }

    fn is_zero(&self) -> bool {
        SparsePoly::is_zero(self)
    }
}

impl One for SparsePoly {
    fn one() -> Self {
        SparsePoly::one()
    }
}

impl From<Term> for SparsePoly {
    fn from(term: Term) -> Self {
        Self::monomial(term.coeff(), term.degree())
    }
}

impl fmt::Display for SparsePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().rev().enumerate() {
            match (i, term.coeff() < 0) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            term.fmt_magnitude(f)?;
        }
        Ok(())
    }
}
