//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use crate::sparse::SparsePoly;
    use crate::term::Term;

    // Strategy for generating small terms (degree 0-7)
    fn small_term() -> impl Strategy<Value = Term> {
        (-50i64..50i64, 0u32..8u32).prop_map(|(c, d)| Term::new(c, d))
    }

    // Strategy for generating small sparse polynomials, possibly with
    // repeated degrees and zero coefficients before normalization
    fn small_poly() -> impl Strategy<Value = SparsePoly> {
        proptest::collection::vec(small_term(), 1..=6)
            .prop_map(|terms| SparsePoly::from_terms(terms).unwrap())
    }

    fn small_dense() -> impl Strategy<Value = DensePoly> {
        proptest::collection::vec(-50i64..50i64, 1..=6).prop_map(|c| DensePoly::new(c).unwrap())
    }

    fn nonzero_poly() -> impl Strategy<Value = SparsePoly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn is_canonical(p: &SparsePoly) -> bool {
        let terms = p.terms();
        if terms == [Term::ZERO] {
            return true;
        }
        !terms.is_empty()
            && terms.iter().all(|t| !t.is_zero())
            && terms.windows(2).all(|w| w[0].degree() < w[1].degree())
    }

    proptest! {
        // Canonical form

        #[test]
        fn cancellation_yields_zero(c in -1000i64..1000i64, d in 0i64..20i64) {
            let p = SparsePoly::from_constant_degree(c, d).unwrap();
            let q = SparsePoly::from_constant_degree(-c, d).unwrap();
            let sum = p.add(&q);
            prop_assert_eq!(&sum, &SparsePoly::zero());
            prop_assert_eq!(sum.terms(), &[Term::ZERO]);
        }

        #[test]
        fn operations_preserve_canonical_form(a in small_poly(), b in small_poly()) {
            prop_assert!(is_canonical(&a));
            prop_assert!(is_canonical(&a.add(&b)));
            prop_assert!(is_canonical(&a.sub(&b)));
            prop_assert!(is_canonical(&a.mul(&b)));
            prop_assert!(is_canonical(&a.minus()));
        }

        #[test]
        fn construction_degree(c in -100i64..100i64, d in 0i64..1000i64) {
            let p = SparsePoly::from_constant_degree(c, d).unwrap();
            let expected = if c == 0 { 0 } else { u32::try_from(d).unwrap() };
            prop_assert_eq!(p.degree(), expected);
        }

        #[test]
        fn negative_degree_rejected(c in any::<i64>(), d in i64::MIN..0i64) {
            prop_assert!(SparsePoly::from_constant_degree(c, d).is_err());
            prop_assert!(DensePoly::from_constant_degree(c, d).is_err());
        }

        #[test]
        fn coefficient_sums_like_terms(terms in proptest::collection::vec(small_term(), 1..=8)) {
            let p = SparsePoly::from_terms(terms.clone()).unwrap();
            for d in 0..=p.degree() {
                let expected: i64 = terms
                    .iter()
                    .filter(|t| t.degree() == d)
                    .map(Term::coeff)
                    .sum();
                prop_assert_eq!(p.coefficient(i64::from(d)), Ok(expected));
            }
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = SparsePoly::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = SparsePoly::one();
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = SparsePoly::zero();
            prop_assert!(a.mul(&zero).is_zero());
            prop_assert!(zero.mul(&a).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.minus()).is_zero());
        }

        #[test]
        fn poly_double_negation(a in small_poly()) {
            prop_assert_eq!(a.minus().minus(), a);
        }

        #[test]
        fn poly_sub_is_add_minus(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.sub(&b), a.add(&b.minus()));
            prop_assert_eq!(&a - &b, a.sub(&b));
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // Z has no zero divisors, so deg(a * b) = deg(a) + deg(b)
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(sum.degree() <= a.degree().max(b.degree()));
        }

        // Equality is coefficient-wise

        #[test]
        fn equality_matches_coefficients(a in small_poly(), b in small_poly()) {
            let same = a.degree() == b.degree()
                && (0..=i64::from(a.degree())).all(|d| a.coefficient(d) == b.coefficient(d));
            prop_assert_eq!(a == b, same);
        }

        // Evaluation property

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -3i64..=3i64) {
            let sum = a.add(&b);
            prop_assert_eq!(sum.eval(x).unwrap(), a.eval(x).unwrap() + b.eval(x).unwrap());
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -3i64..=3i64) {
            let product = a.mul(&b);
            prop_assert_eq!(product.eval(x).unwrap(), a.eval(x).unwrap() * b.eval(x).unwrap());
        }

        // Dense vs sparse equivalence

        #[test]
        fn dense_matches_sparse(a in small_dense(), b in small_dense()) {
            let sa = SparsePoly::from(&a);
            let sb = SparsePoly::from(&b);

            prop_assert_eq!(SparsePoly::from(&a.add(&b)), sa.add(&sb));
            prop_assert_eq!(SparsePoly::from(&a.sub(&b)), sa.sub(&sb));
            prop_assert_eq!(SparsePoly::from(&a.mul(&b)), sa.mul(&sb));
            prop_assert_eq!(SparsePoly::from(&a.minus()), sa.minus());
        }

        #[test]
        fn dense_round_trip(a in small_poly()) {
            let d = DensePoly::from(&a);
            prop_assert_eq!(d.degree(), a.degree());
            prop_assert_eq!(SparsePoly::from(&d), a.clone());
            prop_assert_eq!(d.to_string(), a.to_string());
        }
    }
}
