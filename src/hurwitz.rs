//! Implementation of Hurwitz quaternions (Hurwitz integers)
//!
//! A Hurwitz quaternion is `a + bi + cj + dk` where `a, b, c, d` are either all integers or
//! all half-integers. Internally each component is stored doubled, so that the half-integers
//! can be represented with integer types. The invariant of the doubled representation is that
//! all four stored components have the same parity.

use crate::error::{Result, RingError};
use crate::gaussian::GaussianInt;
use crate::rounding::round_to_nearest;
use crate::traits::{euclid, Approximation, Euclidean, RingBase};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, RefNum, Signed, Zero};
use std::fmt;

/// How the components passed to a constructor are scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Components are the integer coordinates themselves
    Plain,
    /// Components are twice the (possibly half-integer) coordinates
    Doubled,
}

/// A Hurwitz quaternion `(r + i*i + j*j + k*k) / 2` stored by its doubled components.
///
/// Multiplication is the (non-commutative) Hamilton product, and the Euclidean division
/// [HurwitzInt::div_rem] is a right division.
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "[T; 4]",
        into = "[T; 4]",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: num_integer::Integer + serde::Deserialize<'de>"
        )
    )
)]
pub struct HurwitzInt<T> {
    // every component is twice the scalar value
    r: T,
    i: T,
    j: T,
    k: T,
}

impl<T> HurwitzInt<T> {
    #[inline]
    pub(crate) const fn new_raw(r: T, i: T, j: T, k: T) -> Self {
        HurwitzInt { r, i, j, k }
    }

    /// Get return-only references to the doubled components `(2a, 2b, 2c, 2d)`
    #[inline]
    pub const fn doubled_parts(&self) -> (&T, &T, &T, &T) {
        (&self.r, &self.i, &self.j, &self.k)
    }

    #[inline]
    pub fn into_doubled_parts(self) -> (T, T, T, T) {
        (self.r, self.i, self.j, self.k)
    }
}

impl<T: Clone> HurwitzInt<T> {
    /// Overwrite `self` with the value of `other`, reusing the existing allocations
    #[inline]
    pub fn set(&mut self, other: &Self) {
        self.r.clone_from(&other.r);
        self.i.clone_from(&other.i);
        self.j.clone_from(&other.j);
        self.k.clone_from(&other.k);
    }
}

impl<T: Integer> HurwitzInt<T> {
    /// Create a quaternion from its doubled components.
    ///
    /// Returns [RingError::MixedParity] if the components are not all even or all odd.
    pub fn from_doubled(r: T, i: T, j: T, k: T) -> Result<Self> {
        let q = HurwitzInt::new_raw(r, i, j, k);
        if q.is_hurwitz() {
            Ok(q)
        } else {
            Err(RingError::MixedParity)
        }
    }

    #[inline]
    fn is_hurwitz(&self) -> bool {
        let odd = self.r.is_odd();
        self.i.is_odd() == odd && self.j.is_odd() == odd && self.k.is_odd() == odd
    }

    /// Determine if all the coordinates are integers
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.r.is_even()
    }

    /// Determine if all the coordinates are half-integers
    #[inline]
    pub fn is_half_integral(&self) -> bool {
        self.r.is_odd()
    }
}

impl<T: RingBase> HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn two() -> T {
        T::one() + T::one()
    }

    /// Create the quaternion `r + i*i + j*j + k*k` with integer coordinates
    #[inline]
    pub fn new(r: T, i: T, j: T, k: T) -> Self {
        let two = Self::two();
        HurwitzInt::new_raw(r * &two, i * &two, j * &two, k * two)
    }

    /// Create a quaternion from components in the given [Encoding]
    #[inline]
    pub fn from_parts(r: T, i: T, j: T, k: T, encoding: Encoding) -> Result<Self> {
        match encoding {
            Encoding::Plain => Ok(Self::new(r, i, j, k)),
            Encoding::Doubled => Self::from_doubled(r, i, j, k),
        }
    }

    /// Overwrite all components. `self` is left untouched if an error is returned.
    #[inline]
    pub fn set_parts(&mut self, r: T, i: T, j: T, k: T, encoding: Encoding) -> Result<()> {
        *self = Self::from_parts(r, i, j, k, encoding)?;
        Ok(())
    }

    /// All 24 units of the Hurwitz order: `±1, ±i, ±j, ±k` and `(±1 ± i ± j ± k) / 2`
    pub fn units() -> Vec<Self> {
        let two = Self::two();
        let mut units = Vec::with_capacity(24);
        for axis in 0..4 {
            for value in [two.clone(), -two.clone()].iter() {
                let mut parts = [T::zero(), T::zero(), T::zero(), T::zero()];
                parts[axis] = value.clone();
                let [r, i, j, k] = parts;
                units.push(HurwitzInt::new_raw(r, i, j, k));
            }
        }
        for signs in 0..16u8 {
            let part = |bit: u8| {
                if signs & (1 << bit) == 0 {
                    T::one()
                } else {
                    -T::one()
                }
            };
            units.push(HurwitzInt::new_raw(part(0), part(1), part(2), part(3)));
        }
        units
    }

    /// Hamilton product `self * rhs` by reference, with `i*j = k`, `j*k = i`, `k*i = j`
    pub fn mul_ref(&self, rhs: &Self) -> Self {
        let (a, b) = (self, rhs);

        // products of doubled components are scaled by four
        let r = &a.r * &b.r - &a.i * &b.i - &a.j * &b.j - &a.k * &b.k;
        let i = &a.r * &b.i + &a.i * &b.r + &a.j * &b.k - &a.k * &b.j;
        let j = &a.r * &b.j - &a.i * &b.k + &a.j * &b.r + &a.k * &b.i;
        let k = &a.r * &b.k + &a.i * &b.j - &a.j * &b.i + &a.k * &b.r;
        debug_assert!(r.is_even() && i.is_even() && j.is_even() && k.is_even());

        let two = Self::two();
        let product = HurwitzInt::new_raw(r / &two, i / &two, j / &two, k / two);
        debug_assert!(product.is_hurwitz());
        product
    }

    /// Return the conjugate `a - bi - cj - dk`
    #[inline]
    pub fn conj(self) -> Self {
        HurwitzInt {
            r: self.r,
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }

    /// `.conj()` with reference
    #[inline]
    pub fn conj_ref(&self) -> Self {
        self.clone().conj()
    }

    /// Get the norm `a² + b² + c² + d²`, which is also `self * self.conj()`
    #[inline]
    pub fn norm(&self) -> T {
        let four = Self::two() * Self::two();
        (&self.r * &self.r + &self.i * &self.i + &self.j * &self.j + &self.k * &self.k) / four
    }

    /// Compare the norms of two quaternions
    #[inline]
    pub fn cmp_norm(&self, other: &Self) -> Ordering {
        self.norm().cmp(&other.norm())
    }

    /// Determine if the quaternion is one of the 24 units
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    /// Get the coordinates `(a, b, c, d)` as rationals
    pub fn val(&self) -> (Ratio<T>, Ratio<T>, Ratio<T>, Ratio<T>) {
        let two = Self::two();
        (
            Ratio::new(self.r.clone(), two.clone()),
            Ratio::new(self.i.clone(), two.clone()),
            Ratio::new(self.j.clone(), two.clone()),
            Ratio::new(self.k.clone(), two),
        )
    }

    /// Get the coordinates `(a, b, c, d)` rounded to integers by [round_to_nearest].
    ///
    /// The result is exact if the quaternion has integer coordinates.
    pub fn val_int(&self) -> Approximation<(T, T, T, T)> {
        let (r, i, j, k) = self.val();
        let rounded = (
            round_to_nearest(r),
            round_to_nearest(i),
            round_to_nearest(j),
            round_to_nearest(k),
        );
        if self.is_integral() {
            Approximation::Exact(rounded)
        } else {
            Approximation::Approximated(rounded)
        }
    }

    /// Euclidean right division, returning `(quotient, remainder)` such that
    /// `self = quotient * rhs + remainder` and `remainder.norm() < rhs.norm()`.
    ///
    /// The exact quotient `self * rhs.conj() / rhs.norm()` is rounded both to the nearest
    /// quaternion with integer coordinates and to the nearest one with half-integer
    /// coordinates (each coordinate by [round_to_nearest]), and the candidate leaving the
    /// smaller remainder is returned. The integral candidate wins ties.
    pub fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(RingError::DivisionByZero);
        }

        let two = Self::two();
        let numer = self.mul_ref(&rhs.conj_ref());
        let norm = rhs.norm();
        // the doubled numerator over 2*norm is the exact coordinate
        let denom = &norm * &two;

        let round_int = |c: &T| round_to_nearest(Ratio::new(c.clone(), denom.clone())) * &two;
        let integral = HurwitzInt::new_raw(
            round_int(&numer.r),
            round_int(&numer.i),
            round_int(&numer.j),
            round_int(&numer.k),
        );

        // x rounded to a half-integer is round(x - 1/2) + 1/2
        let round_half =
            |c: &T| round_to_nearest(Ratio::new(c - &norm, denom.clone())) * &two + T::one();
        let half_integral = HurwitzInt::new_raw(
            round_half(&numer.r),
            round_half(&numer.i),
            round_half(&numer.j),
            round_half(&numer.k),
        );

        let int_rem = self.clone() - integral.mul_ref(rhs);
        let half_rem = self.clone() - half_integral.mul_ref(rhs);
        let result = if half_rem.cmp_norm(&int_rem) == Ordering::Less {
            tracing::trace!("half-integral quotient is nearer");
            (half_integral, half_rem)
        } else {
            (integral, int_rem)
        };
        debug_assert!(result.1.cmp_norm(rhs) == Ordering::Less);
        Ok(result)
    }

    /// Same as [HurwitzInt::try_div_rem]
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

    /// Greatest common right-divisor by the Euclidean algorithm.
    ///
    /// The result `d` satisfies `self = x * d` and `other = y * d` for Hurwitz quaternions
    /// `x, y`. It is unique only up to left multiplication by a unit and is not normalized.
    /// `gcrd(a, 0)` is `a`.
    #[inline]
    pub fn gcrd(&self, other: &Self) -> Self {
        euclid(self, other)
    }
}

impl<T: RingBase> From<T> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Create a `HurwitzInt` representation of a rational integer
    #[inline]
    fn from(t: T) -> Self {
        Self::new(t, T::zero(), T::zero(), T::zero())
    }
}

impl<T: RingBase> From<GaussianInt<T>> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Embed `a + bi` as the quaternion `a + bi + 0j + 0k`
    #[inline]
    fn from(g: GaussianInt<T>) -> Self {
        let (re, im) = g.into_parts();
        Self::new(re, im, T::zero(), T::zero())
    }
}

impl<T: Integer> TryFrom<[T; 4]> for HurwitzInt<T> {
    type Error = RingError;

    /// Create a quaternion from its doubled components
    #[inline]
    fn try_from(parts: [T; 4]) -> Result<Self> {
        let [r, i, j, k] = parts;
        HurwitzInt::from_doubled(r, i, j, k)
    }
}

impl<T> Into<[T; 4]> for HurwitzInt<T> {
    /// Get the doubled components
    #[inline]
    fn into(self) -> [T; 4] {
        [self.r, self.i, self.j, self.k]
    }
}

// Write one coordinate given by its doubled value. Unit coefficients of the imaginary
// parts are omitted and halves are written with a `.5` suffix.
fn fmt_component<T: Integer + Signed + fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    doubled: &T,
    unit: &str,
    leading: bool,
) -> fmt::Result {
    let sign = if doubled.is_negative() {
        "-"
    } else if leading {
        ""
    } else {
        "+"
    };
    let (whole, half) = doubled.abs().div_rem(&(T::one() + T::one()));
    match (half.is_zero(), whole.is_one() && !unit.is_empty()) {
        (true, true) => write!(f, "{}{}", sign, unit),
        (true, false) => write!(f, "{}{}{}", sign, whole, unit),
        (false, _) => write!(f, "{}{}.5{}", sign, whole, unit),
    }
}

/// Formats as `a+bi+cj+dk`, e.g. `1+i+j+k`, `1.5+1.5i+1.5j+1.5k` or `0.5-0.5i-0.5j+0.5k`.
///
/// Zero coordinates are skipped and unit coefficients elided. Every formatted value has
/// all-integer or all-half-integer coordinates, since the constructors reject doubled
/// components of mixed parity. A mixed output such as `-0.5i-0.5j+0.5k` (doubled
/// `(0, -1, -1, 1)`) is never produced for a value built through the public API.
impl<T: Integer + Signed + fmt::Display> fmt::Display for HurwitzInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut leading = true;
        let parts = [(&self.r, ""), (&self.i, "i"), (&self.j, "j"), (&self.k, "k")];
        for &(value, unit) in parts.iter() {
            if value.is_zero() {
                continue;
            }
            fmt_component(f, value, unit, leading)?;
            leading = false;
        }

        if leading {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl<'a, T: RingBase> Add<&'a HurwitzInt<T>> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = HurwitzInt<T>;
    #[inline]
    fn add(self, rhs: &'a HurwitzInt<T>) -> HurwitzInt<T> {
        HurwitzInt::new_raw(
            self.r + &rhs.r,
            self.i + &rhs.i,
            self.j + &rhs.j,
            self.k + &rhs.k,
        )
    }
}

impl<'a, T: RingBase> Sub<&'a HurwitzInt<T>> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = HurwitzInt<T>;
    #[inline]
    fn sub(self, rhs: &'a HurwitzInt<T>) -> HurwitzInt<T> {
        HurwitzInt::new_raw(
            self.r - &rhs.r,
            self.i - &rhs.i,
            self.j - &rhs.j,
            self.k - &rhs.k,
        )
    }
}

impl<'a, T: RingBase> Mul<&'a HurwitzInt<T>> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = HurwitzInt<T>;
    /// Hamilton product, see [HurwitzInt::mul_ref]
    #[inline]
    fn mul(self, rhs: &'a HurwitzInt<T>) -> HurwitzInt<T> {
        self.mul_ref(rhs)
    }
}

impl<'a, T: RingBase> Div<&'a HurwitzInt<T>> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = HurwitzInt<T>;
    /// Euclidean right quotient, see [HurwitzInt::div_rem]
    #[inline]
    fn div(self, rhs: &'a HurwitzInt<T>) -> HurwitzInt<T> {
        self.div_rem(rhs).0
    }
}

impl<'a, T: RingBase> Rem<&'a HurwitzInt<T>> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = HurwitzInt<T>;
    /// Euclidean right remainder, see [HurwitzInt::div_rem]
    #[inline]
    fn rem(self, rhs: &'a HurwitzInt<T>) -> HurwitzInt<T> {
        self.div_rem(rhs).1
    }
}

forward_binop!(impl Add, add for HurwitzInt);
forward_binop!(impl Sub, sub for HurwitzInt);
forward_binop!(impl Mul, mul for HurwitzInt);
forward_binop!(impl Div, div for HurwitzInt);
forward_binop!(impl Rem, rem for HurwitzInt);
forward_assign!(impl AddAssign, add_assign, Add::add for HurwitzInt);
forward_assign!(impl SubAssign, sub_assign, Sub::sub for HurwitzInt);
forward_assign!(impl MulAssign, mul_assign, Mul::mul for HurwitzInt);

impl<T: RingBase> Mul<T> for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = HurwitzInt<T>;
    #[inline]
    fn mul(self, rhs: T) -> HurwitzInt<T> {
        HurwitzInt::new_raw(self.r * &rhs, self.i * &rhs, self.j * &rhs, self.k * rhs)
    }
}

impl<T: RingBase> Neg for HurwitzInt<T> {
    type Output = HurwitzInt<T>;
    #[inline]
    fn neg(self) -> HurwitzInt<T> {
        HurwitzInt::new_raw(-self.r, -self.i, -self.j, -self.k)
    }
}

impl<T: RingBase> Zero for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn zero() -> Self {
        HurwitzInt::new_raw(T::zero(), T::zero(), T::zero(), T::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.r.is_zero() && self.i.is_zero() && self.j.is_zero() && self.k.is_zero()
    }
}

impl<T: RingBase> One for HurwitzInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn one() -> Self {
        HurwitzInt::new_raw(Self::two(), T::zero(), T::zero(), T::zero())
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.r == Self::two() && self.i.is_zero() && self.j.is_zero() && self.k.is_zero()
    }
}

impl<T: RingBase> Euclidean for HurwitzInt<T>
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
