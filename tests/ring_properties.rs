use proptest::prelude::*;

use num_hurwitz::rounding::round_to_nearest;
use num_hurwitz::{GaussianInt, HurwitzInt};
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};

fn arb_gaussian() -> impl Strategy<Value = GaussianInt<i64>> {
    (-10_000i64..10_000, -10_000i64..10_000).prop_map(|(re, im)| GaussianInt::new(re, im))
}

// doubled components 2x + h share the parity h
fn arb_hurwitz() -> impl Strategy<Value = HurwitzInt<i64>> {
    (
        any::<bool>(),
        -1_000i64..1_000,
        -1_000i64..1_000,
        -1_000i64..1_000,
        -1_000i64..1_000,
    )
        .prop_map(|(half, r, i, j, k)| {
            let h = half as i64;
            HurwitzInt::from_doubled(2 * r + h, 2 * i + h, 2 * j + h, 2 * k + h)
                .expect("components share parity")
        })
}

// ===== Rounding =====

proptest! {
    #[test]
    fn rounding_is_within_bias(n in -1_000_000i64..1_000_000, d in 1i64..10_000) {
        let f = Ratio::new(n, d);
        let error = (Ratio::from(round_to_nearest(f)) - f).abs();
        prop_assert!(error <= Ratio::new(51, 100));
    }
}

// ===== Gaussian integers =====

proptest! {
    #[test]
    fn gaussian_norm_is_multiplicative(a in arb_gaussian(), b in arb_gaussian()) {
        prop_assert_eq!((a * b).norm(), a.norm() * b.norm());
    }
}

proptest! {
    #[test]
    fn gaussian_conj_properties(a in arb_gaussian(), b in arb_gaussian()) {
        prop_assert_eq!(a.conj().conj(), a);
        prop_assert_eq!(a * a.conj(), GaussianInt::from(a.norm()));
        prop_assert_eq!((a * b).conj(), a.conj() * b.conj());
    }
}

proptest! {
    #[test]
    fn gaussian_ring_axioms(a in arb_gaussian(), b in arb_gaussian(), c in arb_gaussian()) {
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a - a, GaussianInt::zero());
        prop_assert_eq!(a * GaussianInt::one(), a);
    }
}

proptest! {
    #[test]
    fn gaussian_division_reduces_norm(a in arb_gaussian(), b in arb_gaussian()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(q * b + r, a);
        prop_assert!(r.norm() < b.norm());
    }
}

proptest! {
    #[test]
    fn gaussian_gcd_divides_both(a in arb_gaussian(), b in arb_gaussian()) {
        prop_assume!(!a.is_zero() || !b.is_zero());
        let g = a.gcd(&b);
        prop_assert!((a % g).is_zero());
        prop_assert!((b % g).is_zero());
        prop_assert_eq!(b.gcd(&a).norm(), g.norm());
    }
}

// ===== Hurwitz quaternions =====

proptest! {
    #[test]
    fn hurwitz_norm_is_multiplicative(a in arb_hurwitz(), b in arb_hurwitz()) {
        prop_assert_eq!((a * b).norm(), a.norm() * b.norm());
    }
}

proptest! {
    #[test]
    fn hurwitz_conj_properties(a in arb_hurwitz(), b in arb_hurwitz()) {
        prop_assert_eq!(a.conj().conj(), a);
        prop_assert_eq!(a * a.conj(), HurwitzInt::from(a.norm()));
        prop_assert_eq!(a.conj() * a, HurwitzInt::from(a.norm()));
        prop_assert_eq!((a * b).conj(), b.conj() * a.conj());
    }
}

proptest! {
    #[test]
    fn hurwitz_ring_axioms(a in arb_hurwitz(), b in arb_hurwitz(), c in arb_hurwitz()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!((a + b) * c, a * c + b * c);
        prop_assert_eq!(a * HurwitzInt::one(), a);
        prop_assert_eq!(HurwitzInt::one() * a, a);
    }
}

proptest! {
    #[test]
    fn hurwitz_division_reduces_norm(a in arb_hurwitz(), b in arb_hurwitz()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(q * b + r, a);
        prop_assert!(r.norm() < b.norm());
    }
}

proptest! {
    #[test]
    fn hurwitz_gcrd_right_divides_both(a in arb_hurwitz(), b in arb_hurwitz()) {
        prop_assume!(!a.is_zero() || !b.is_zero());
        let d = a.gcrd(&b);
        prop_assert!((a % d).is_zero());
        prop_assert!((b % d).is_zero());
    }
}

proptest! {
    #[test]
    fn hurwitz_units_divide_everything(a in arb_hurwitz()) {
        for u in HurwitzInt::<i64>::units() {
            prop_assert!((a % u).is_zero());
            prop_assert_eq!((a * u).norm(), a.norm());
        }
    }
}
