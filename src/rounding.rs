//! Rounding of exact rationals to the nearest integer.

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::Signed;

/// The bias `49/100` (numerator, denominator) added to non-negative values and subtracted from
/// negative values before truncating toward zero.
pub const ROUNDING_BIAS: (u8, u8) = (49, 100);

/// Round a rational number to the nearest integer, consuming it.
///
/// The value is moved away from zero by [ROUNDING_BIAS] and then truncated toward zero, so an
/// exact half rounds toward zero (`2.5 -> 2`, `-2.5 -> -2`) and only values at least `0.51`
/// past an integer round away from it. Euclidean division in this crate depends on this exact
/// behavior.
pub fn round_to_nearest<T>(f: Ratio<T>) -> T
where
    T: Integer + Signed + Clone + From<u8>,
{
    let bias = Ratio::new_raw(T::from(ROUNDING_BIAS.0), T::from(ROUNDING_BIAS.1));
    let biased = if f.is_negative() { f - bias } else { f + bias };
    biased.to_integer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn round(n: i64, d: i64) -> i64 {
        round_to_nearest(Ratio::new(n, d))
    }

    #[test]
    fn integers_are_fixed_points() {
        assert_eq!(round(0, 1), 0);
        assert_eq!(round(7, 1), 7);
        assert_eq!(round(-7, 1), -7);
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(round(11, 5), 2); // 2.2
        assert_eq!(round(13, 5), 3); // 2.6
        assert_eq!(round(-4, 5), -1); // -0.8
        assert_eq!(round(-1, 5), 0); // -0.2
        assert_eq!(round(49, 100), 0);
        assert_eq!(round(-49, 100), 0);
    }

    #[test]
    fn halves_round_toward_zero() {
        assert_eq!(round(1, 2), 0);
        assert_eq!(round(5, 2), 2);
        assert_eq!(round(-5, 2), -2);
        assert_eq!(round(50, 100), 0);
        assert_eq!(round(509, 1000), 0);
        assert_eq!(round(51, 100), 1);
        assert_eq!(round(-51, 100), -1);
    }

    #[test]
    fn big_rationals() {
        let two = BigInt::from(2);
        let big = two.pow(4000u32);
        let f = Ratio::new(&big * 3 + 1, BigInt::from(3));
        assert_eq!(round_to_nearest(f), big.clone());
        let f = Ratio::new(-(&big * 3u32) - 2u32, BigInt::from(3));
        assert_eq!(round_to_nearest(f), -big - 1);
    }
}
