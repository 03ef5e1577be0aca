//! The sextic twist `E': y² = x³ + b·u` over `Fp2`, carrying `G2`.

use crate::Fp2;
use num_bigint::BigUint;
use num_traits::One;
use weierstrass::{CoordinateSystem, Curve, Error, FieldElement, Point, Result};

/// Build the twist of `y² = x³ + b` by `u`, in homogeneous coordinates.
pub fn twist_curve(b: &FieldElement, order: BigUint, cofactor: BigUint) -> Result<Curve<Fp2>> {
    let modulus = b.modulus();
    let b = Fp2::u(modulus).mul_base(b);

    Ok(Curve::new(Fp2::zero(modulus), b, Some(order), Some(cofactor))?
        .with_coordinates(CoordinateSystem::Homogeneous))
}

/// Operations specific to points of the twist.
pub trait TwistPoint: Sized {
    /// The `p`-power Frobenius endomorphism, transported to the twist:
    /// `(x̄·u^(-(p-1)/3), ȳ·u^(-(p-1)/2))`.
    fn frobenius(&self) -> Self;

    /// The `p²`-power Frobenius endomorphism, transported to the twist:
    /// `(x·u^(-(p²-1)/3), y·u^(-(p²-1)/2))`.
    fn frobenius_squared(&self) -> Self;

    /// Encode as `x ‖ y`, each coordinate as `c1 ‖ c0`. The identity encodes as all zeros.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode the encoding produced by [`TwistPoint::to_bytes`], validating the point.
    fn from_bytes(curve: &Curve<Fp2>, bytes: &[u8]) -> Result<Self>;
}

impl TwistPoint for Point<Fp2> {
    fn frobenius(&self) -> Self {
        let affine = self.to_affine();
        let Some((x, y)) = affine.coordinates() else {
            return self.curve().infinity();
        };

        twisted_frobenius(self.curve(), x.conjugate(), y.conjugate(), 1)
    }

    fn frobenius_squared(&self) -> Self {
        let affine = self.to_affine();
        let Some((x, y)) = affine.coordinates() else {
            return self.curve().infinity();
        };

        // x and y are fixed by the p²-power map on Fp2
        twisted_frobenius(self.curve(), x.clone(), y.clone(), 2)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let affine = self.to_affine();
        match affine.coordinates() {
            Some((x, y)) => {
                let mut out = x.to_bytes();
                out.extend_from_slice(&y.to_bytes());
                out
            }
            None => {
                let len = self.curve().a().modulus().byte_len();
                vec![0; 4 * len]
            }
        }
    }

    fn from_bytes(curve: &Curve<Fp2>, bytes: &[u8]) -> Result<Self> {
        let modulus = curve.a().modulus();
        let len = 4 * modulus.byte_len();
        if bytes.len() != len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: bytes.len(),
            });
        }

        if bytes.iter().all(|&b| b == 0) {
            return Ok(curve.infinity());
        }

        let (x, y) = bytes.split_at(len / 2);
        curve.create_point(Fp2::from_bytes(modulus, x)?, Fp2::from_bytes(modulus, y)?)
    }
}

/// Scale `(x, y)` by `u^(-(p^k - 1)/3)` and `u^(-(p^k - 1)/2)`.
fn twisted_frobenius(curve: &Curve<Fp2>, x: Fp2, y: Fp2, k: u32) -> Point<Fp2> {
    let modulus = curve.a().modulus();
    let e = modulus.value().pow(k) - BigUint::one();

    let x = x.multiply(&Fp2::u_pow_neg(modulus, &(&e / 3u32)));
    let y = y.multiply(&Fp2::u_pow_neg(modulus, &(&e >> 1u32)));

    // the image of a point of E' under an endomorphism of E' stays on E'
    curve.create_point_unchecked(x, y)
}
