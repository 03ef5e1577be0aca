#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use sm2::weierstrass::{FixedPointCombMultiplier, Multiplier, num_bigint::BigInt};
//!
//! let g = sm2::generator();
//! let k = BigInt::from(0x1234_5678u32);
//!
//! let p = FixedPointCombMultiplier.multiply(&g, &k)?;
//! assert_eq!(p, g.multiply(&k));
//! assert!(p.is_valid());
//! # Ok::<(), sm2::weierstrass::Error>(())
//! ```

pub use weierstrass;

use hex_literal::hex;
use std::sync::LazyLock;
use weierstrass::{
    CoordinateSystem, Curve, FieldElement, Point, num_bigint::BigUint, num_traits::One,
};

/// Curve points with SM2 field coordinates.
pub type ProjectivePoint = Point<FieldElement>;

/// Size of an encoded field element in bytes.
pub const FIELD_BYTES: usize = 32;

/// Field modulus `p`.
pub const MODULUS: [u8; FIELD_BYTES] =
    hex!("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF");

/// Curve coefficient `a = p - 3`.
pub const EQUATION_A: [u8; FIELD_BYTES] =
    hex!("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC");

/// Curve coefficient `b`.
pub const EQUATION_B: [u8; FIELD_BYTES] =
    hex!("28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93");

/// Order `n` of the base point.
pub const ORDER: [u8; FIELD_BYTES] =
    hex!("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123");

/// Affine coordinates of the base point.
///
/// ```text
/// Gₓ = 0x32C4AE2C 1F198119 5F990446 6A39C994 8FE30BBF F2660BE1 715A4589 334C74C7
/// Gᵧ = 0xBC3736A2 F4F6779C 59BDCEE3 6B692153 D0A9877C C62A4740 02DF32E5 2139F0A0
/// ```
pub const GENERATOR: ([u8; FIELD_BYTES], [u8; FIELD_BYTES]) = (
    hex!("32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7"),
    hex!("BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0"),
);

static CURVE: LazyLock<Curve<FieldElement>> = LazyLock::new(|| {
    Curve::from_params(
        BigUint::from_bytes_be(&MODULUS),
        BigUint::from_bytes_be(&EQUATION_A),
        BigUint::from_bytes_be(&EQUATION_B),
        Some(BigUint::from_bytes_be(&ORDER)),
        Some(BigUint::one()),
    )
    .expect("SM2 curve parameters are valid")
    .with_coordinates(CoordinateSystem::JacobianModified)
});

static BASE_POINT: LazyLock<ProjectivePoint> = LazyLock::new(|| {
    let (x, y) = GENERATOR;
    CURVE
        .create_point_from_integers(BigUint::from_bytes_be(&x), BigUint::from_bytes_be(&y))
        .expect("SM2 base point is on the curve")
});

/// The SM2 curve, using modified Jacobian coordinates.
pub fn curve() -> Curve<FieldElement> {
    CURVE.clone()
}

/// The SM2 base point `G`.
///
/// Every call returns a handle to the same point, so precomputation cached on it is shared.
pub fn generator() -> ProjectivePoint {
    BASE_POINT.clone()
}
