#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use weierstrass::{
//!     CoordinateSystem, Curve, FixedPointCombMultiplier, Multiplier,
//!     num_bigint::{BigInt, BigUint},
//! };
//!
//! // y² = x³ + 4x + 20 over GF(1063)
//! let curve = Curve::from_params(
//!     BigUint::from(1063u32),
//!     BigUint::from(4u32),
//!     BigUint::from(20u32),
//!     None,
//!     None,
//! )?
//! .with_coordinates(CoordinateSystem::Jacobian);
//!
//! let g = curve.create_point_from_integers(BigUint::from(1u32), BigUint::from(5u32))?;
//! let p = FixedPointCombMultiplier.multiply(&g, &BigInt::from(6))?;
//! assert_eq!(p, g.multiply(&BigInt::from(6)));
//! assert_eq!(
//!     p.to_encoded_point(false),
//!     [0x04, 0x01, 0x54, 0x03, 0xa5]
//! );
//! # Ok::<(), weierstrass::Error>(())
//! ```

mod affine;
mod coordinates;
mod curve;
mod error;
pub mod multiplier;
mod point;
mod point_arithmetic;
mod sec1;

pub use crate::{
    affine::AffinePoint,
    coordinates::CoordinateSystem,
    curve::Curve,
    error::{Error, Result},
    multiplier::{DoubleAndAddMultiplier, FixedPointCombMultiplier, Multiplier},
    point::Point,
};
pub use primefield::{self, Field, FieldElement, Modulus, num_bigint, num_traits};
