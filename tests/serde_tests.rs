#![cfg(feature = "serde")]

use num_bigint::BigInt;
use num_hurwitz::{BigGaussianInt, BigHurwitzInt, GaussianInt, HurwitzInt};

#[test]
fn gaussian_roundtrip() {
    let g = GaussianInt::new(7i64, -3);
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(json, r#"{"re":7,"im":-3}"#);
    assert_eq!(serde_json::from_str::<GaussianInt<i64>>(&json).unwrap(), g);

    let big = BigGaussianInt::new(BigInt::from(1) << 200usize, BigInt::from(-1));
    let json = serde_json::to_string(&big).unwrap();
    assert_eq!(serde_json::from_str::<BigGaussianInt>(&json).unwrap(), big);
}

#[test]
fn hurwitz_serializes_doubled_components() {
    let h = HurwitzInt::new(1i64, 1, 1, 1);
    assert_eq!(serde_json::to_string(&h).unwrap(), "[2,2,2,2]");

    let half: HurwitzInt<i64> = serde_json::from_str("[1,-1,3,5]").unwrap();
    assert!(half.is_half_integral());
    assert_eq!(half, HurwitzInt::from_doubled(1, -1, 3, 5).unwrap());

    let big = BigHurwitzInt::from(BigInt::from(-5) << 300usize);
    let json = serde_json::to_string(&big).unwrap();
    assert_eq!(serde_json::from_str::<BigHurwitzInt>(&json).unwrap(), big);
}

#[test]
fn hurwitz_rejects_mixed_parity() {
    let err = serde_json::from_str::<HurwitzInt<i64>>("[1,2,3,4]").unwrap_err();
    assert!(err.to_string().contains("all even or all odd"));
    assert!(serde_json::from_str::<HurwitzInt<i64>>("[1,1,1]").is_err());
}
