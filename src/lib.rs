//! Euclidean arithmetic on Gaussian integers and Hurwitz quaternions.
//!
//! [GaussianInt] is the commutative ring `Z[i]`, and [HurwitzInt] is the order of quaternions
//! whose coordinates are all integers or all half-integers. Both are generic over the integer
//! type, with [BigGaussianInt] and [BigHurwitzInt] as the arbitrary precision instances. Both
//! support Euclidean division by rounding the exact quotient with [rounding::round_to_nearest],
//! and the greatest common (right) divisor by the Euclidean algorithm.

#[macro_use]
mod macros;

pub mod error;
mod gaussian;
mod hurwitz;
pub mod rounding;
pub mod traits;

pub use error::RingError;
pub use gaussian::GaussianInt;
pub use hurwitz::{Encoding, HurwitzInt};
pub use traits::{Approximation, Euclidean};

/// Gaussian integer with arbitrary precision components
pub type BigGaussianInt = GaussianInt<num_bigint::BigInt>;

/// Hurwitz quaternion with arbitrary precision components
pub type BigHurwitzInt = HurwitzInt<num_bigint::BigInt>;
