//! Implementation of Gaussian integers

use crate::error::{Result, RingError};
use crate::rounding::round_to_nearest;
use crate::traits::{euclid, Euclidean, RingBase};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, RefNum, Signed, Zero};
use std::fmt;

/// A Gaussian integer represented as `re + im*i`, where `re` and `im` are integers.
///
/// Gaussian integers form a Euclidean domain under the norm `re² + im²`, see
/// [GaussianInt::div_rem] and [GaussianInt::gcd].
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianInt<T> {
    re: T,
    im: T,
}

impl<T> GaussianInt<T> {
    /// Create a Gaussian integer `re + im*i`
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        GaussianInt { re, im }
    }

    /// Real part
    #[inline]
    pub const fn re(&self) -> &T {
        &self.re
    }

    /// Imaginary part
    #[inline]
    pub const fn im(&self) -> &T {
        &self.im
    }

    /// Get return-only references to the components `(re, im)`
    #[inline]
    pub const fn parts(&self) -> (&T, &T) {
        (&self.re, &self.im)
    }

    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.re, self.im)
    }

    /// Overwrite both components
    #[inline]
    pub fn set_parts(&mut self, re: T, im: T) {
        self.re = re;
        self.im = im;
    }
}

impl<T: Clone> GaussianInt<T> {
    /// Overwrite `self` with the value of `other`, reusing the existing allocations
    #[inline]
    pub fn set(&mut self, other: &Self) {
        self.re.clone_from(&other.re);
        self.im.clone_from(&other.im);
    }
}

impl<T: Integer + Signed> GaussianInt<T> {
    /// The imaginary unit `i`
    #[inline]
    pub fn i() -> Self {
        GaussianInt::new(T::zero(), T::one())
    }

    /// Determine if the number is a positive rational integer, i.e. `re > 0` and `im = 0`.
    ///
    /// Note this is not a unit test, use [GaussianInt::is_unit] for that.
    #[inline]
    pub fn is_positive_real(&self) -> bool {
        self.re.is_positive() && self.im.is_zero()
    }
}

impl<T: RingBase> GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Return the conjugate `re - im*i`
    #[inline]
    pub fn conj(self) -> Self {
        GaussianInt {
            re: self.re,
            im: -self.im,
        }
    }

    /// `.conj()` with reference
    #[inline]
    pub fn conj_ref(&self) -> Self {
        self.clone().conj()
    }

    /// Product `self * rhs` by reference
    #[inline]
    pub fn mul_ref(&self, rhs: &Self) -> Self {
        GaussianInt::new(
            &self.re * &rhs.re - &self.im * &rhs.im,
            &self.re * &rhs.im + &self.im * &rhs.re,
        )
    }

    /// Get the norm `re² + im²`, which is also `self * self.conj()`
    #[inline]
    pub fn norm(&self) -> T {
        &self.re * &self.re + &self.im * &self.im
    }

    /// Compare the norms of two Gaussian integers
    #[inline]
    pub fn cmp_norm(&self, other: &Self) -> Ordering {
        self.norm().cmp(&other.norm())
    }

    /// Determine if the number is one of the units `±1, ±i`
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    /// Euclidean division, returning `(quotient, remainder)` such that
    /// `self = quotient * rhs + remainder` and `remainder.norm() < rhs.norm()`.
    ///
    /// The quotient is `self * rhs.conj() / rhs.norm()` with both components rounded by
    /// [round_to_nearest].
    pub fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(RingError::DivisionByZero);
        }

        let numer = self.mul_ref(&rhs.conj_ref());
        let denom = rhs.norm();
        let quotient = GaussianInt::new(
            round_to_nearest(Ratio::new(numer.re, denom.clone())),
            round_to_nearest(Ratio::new(numer.im, denom)),
        );
        let remainder = self.clone() - quotient.mul_ref(rhs);
        debug_assert!(remainder.cmp_norm(rhs) == Ordering::Less);
        Ok((quotient, remainder))
    }

    /// Same as [GaussianInt::try_div_rem]
    ///
    /// # Panics
    /// if `rhs` is zero
    #[inline]
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        match self.try_div_rem(rhs) {
            Ok(qr) => qr,
            Err(e) => panic!("{}", e),
        }
    }

    /// Greatest common divisor by the Euclidean algorithm.
    ///
    /// The result is unique only up to a unit factor (`±1, ±i`) and is not normalized.
    /// `gcd(a, 0)` is `a`.
    #[inline]
    pub fn gcd(&self, other: &Self) -> Self {
        euclid(self, other)
    }
}

impl<T: Integer> From<T> for GaussianInt<T> {
    /// Create a `GaussianInt` representation of a rational integer
    #[inline]
    fn from(t: T) -> Self {
        GaussianInt::new(t, T::zero())
    }
}

impl<T> From<(T, T)> for GaussianInt<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        GaussianInt::new(re, im)
    }
}

impl<T> Into<(T, T)> for GaussianInt<T> {
    #[inline]
    fn into(self) -> (T, T) {
        (self.re, self.im)
    }
}

impl<T: Integer + Signed + fmt::Display> fmt::Display for GaussianInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_zero() {
            return write!(f, "{}", self.re);
        }

        if !self.re.is_zero() {
            write!(f, "{}", self.re)?;
            if self.im.is_positive() {
                write!(f, "+")?;
            }
        }
        if self.im.is_one() {
            write!(f, "i")
        } else if self.im == -T::one() {
            write!(f, "-i")
        } else {
            write!(f, "{}i", self.im)
        }
    }
}

impl<'a, T: RingBase> Add<&'a GaussianInt<T>> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn add(self, rhs: &'a GaussianInt<T>) -> GaussianInt<T> {
        GaussianInt::new(self.re + &rhs.re, self.im + &rhs.im)
    }
}

impl<'a, T: RingBase> Sub<&'a GaussianInt<T>> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn sub(self, rhs: &'a GaussianInt<T>) -> GaussianInt<T> {
        GaussianInt::new(self.re - &rhs.re, self.im - &rhs.im)
    }
}

impl<'a, T: RingBase> Mul<&'a GaussianInt<T>> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn mul(self, rhs: &'a GaussianInt<T>) -> GaussianInt<T> {
        self.mul_ref(rhs)
    }
}

impl<'a, T: RingBase> Div<&'a GaussianInt<T>> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    /// Euclidean quotient, see [GaussianInt::div_rem]
    #[inline]
    fn div(self, rhs: &'a GaussianInt<T>) -> GaussianInt<T> {
        self.div_rem(rhs).0
    }
}

impl<'a, T: RingBase> Rem<&'a GaussianInt<T>> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    /// Euclidean remainder, see [GaussianInt::div_rem]
    #[inline]
    fn rem(self, rhs: &'a GaussianInt<T>) -> GaussianInt<T> {
        self.div_rem(rhs).1
    }
}

forward_binop!(impl Add, add for GaussianInt);
forward_binop!(impl Sub, sub for GaussianInt);
forward_binop!(impl Mul, mul for GaussianInt);
forward_binop!(impl Div, div for GaussianInt);
forward_binop!(impl Rem, rem for GaussianInt);
forward_assign!(impl AddAssign, add_assign, Add::add for GaussianInt);
forward_assign!(impl SubAssign, sub_assign, Sub::sub for GaussianInt);
forward_assign!(impl MulAssign, mul_assign, Mul::mul for GaussianInt);

impl<T: RingBase> Mul<T> for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = GaussianInt<T>;
    #[inline]
    fn mul(self, rhs: T) -> GaussianInt<T> {
        GaussianInt::new(self.re * &rhs, self.im * rhs)
    }
}

impl<T: RingBase> Neg for GaussianInt<T> {
    type Output = GaussianInt<T>;
    #[inline]
    fn neg(self) -> GaussianInt<T> {
        GaussianInt::new(-self.re, -self.im)
    }
}

impl<T: RingBase> Zero for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn zero() -> Self {
        GaussianInt::new(T::zero(), T::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: RingBase> One for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn one() -> Self {
        GaussianInt::new(T::one(), T::zero())
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }
}

impl<T: RingBase> Euclidean for GaussianInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Norm = T;

    #[inline]
    fn norm(&self) -> T {
        Self::norm(self)
    }

    #[inline]
    fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        Self::div_rem(self, rhs)
    }
}

#[cfg(feature = "num-complex")]
mod complex {
    use super::*;
    use num_complex::{Complex, Complex64};
    use num_traits::ToPrimitive;

    impl<T> From<Complex<T>> for GaussianInt<T> {
        #[inline]
        fn from(c: Complex<T>) -> Self {
            GaussianInt::new(c.re, c.im)
        }
    }

    impl<T> From<GaussianInt<T>> for Complex<T> {
        #[inline]
        fn from(g: GaussianInt<T>) -> Self {
            Complex::new(g.re, g.im)
        }
    }

    impl<T: ToPrimitive> GaussianInt<T> {
        pub fn to_complex64(&self) -> Option<Complex64> {
            Some(Complex64::new(self.re.to_f64()?, self.im.to_f64()?))
        }
    }
}
