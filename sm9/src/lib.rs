#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use sm9::weierstrass::num_bigint::BigInt;
//!
//! let (p1, p2) = (sm9::p1(), sm9::p2());
//! let k = BigInt::from(3);
//!
//! let g = sm9::pairing(&p1, &p2);
//! assert_eq!(sm9::pairing(&p1.multiply(&k), &p2), g.pow(k.magnitude()));
//! ```

mod fields;
mod pairing;
mod params;
mod twist;

pub use crate::{
    fields::{Fp2, Fp4, Fp12},
    pairing::{Gt, Pairing},
    params::{BN_PARAMETER, EQUATION_B, FIELD_BYTES, MODULUS, ORDER, P1, P2, Sm9Params},
    twist::{TwistPoint, twist_curve},
};
pub use primefield;
pub use weierstrass;

use num_bigint::BigInt;
use weierstrass::{FieldElement, Point};

/// Generator `P1` of `G1`.
pub fn p1() -> Point<FieldElement> {
    Pairing::standard().params().p1().clone()
}

/// Generator `P2` of `G2`.
pub fn p2() -> Point<Fp2> {
    Pairing::standard().params().p2().clone()
}

/// Compute `e(P, Q)` on the SM9 curve; see [`Pairing::pairing`].
pub fn pairing(p: &Point<FieldElement>, q: &Point<Fp2>) -> Gt {
    Pairing::standard().pairing(p, q)
}

/// Check `e(kP, Q) = e(P, Q)^k = e(P, kQ)` on the SM9 curve.
pub fn verify_bilinearity(p: &Point<FieldElement>, q: &Point<Fp2>, k: &BigInt) -> bool {
    Pairing::standard().verify_bilinearity(p, q, k)
}
