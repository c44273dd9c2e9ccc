use core::cmp::Ordering;
use num_integer::Integer;
use num_traits::{NumRef, Signed, Zero};

/// A helper trait to define valid scalar types for [GaussianInt][crate::GaussianInt]
/// and [HurwitzInt][crate::HurwitzInt]
pub trait RingBase: Integer + NumRef + Clone + Signed + From<u8> {}
impl<T: Integer + NumRef + Clone + Signed + From<u8>> RingBase for T {}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) | Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// A ring with a Euclidean division measured by a norm.
///
/// For non-commutative rings the division is a right division, i.e. `a = q * b + r`.
pub trait Euclidean: Sized + Clone + Zero {
    type Norm: Ord;

    fn norm(&self) -> Self::Norm;

    /// Return `(quotient, remainder)` with `norm(remainder) < norm(rhs)`.
    ///
    /// # Panics
    /// if `rhs` is zero
    fn div_rem(&self, rhs: &Self) -> (Self, Self);

    #[inline]
    fn cmp_norm(&self, other: &Self) -> Ordering {
        self.norm().cmp(&other.norm())
    }
}

/// Greatest common (right) divisor by the Euclidean algorithm, descending on the norm.
///
/// The result is not normalized to a canonical associate. `euclid(a, 0) == a`.
pub fn euclid<R: Euclidean>(a: &R, b: &R) -> R {
    let (mut larger, mut smaller) = if a.cmp_norm(b) == Ordering::Less {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    };

    let mut steps = 0usize;
    while !smaller.is_zero() {
        let (_, rem) = larger.div_rem(&smaller);
        steps += 1;
        tracing::trace!(step = steps, "euclidean step");
        larger = core::mem::replace(&mut smaller, rem);
    }

    tracing::debug!(steps, "euclidean algorithm finished");
    larger
}
