//! SM9 BN curve parameters.

use crate::{
    Fp2,
    twist::{self, TwistPoint},
};
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::sync::LazyLock;
use weierstrass::{CoordinateSystem, Curve, Error, FieldElement, Modulus, Point, Result};

/// Size of an encoded field element in bytes.
pub const FIELD_BYTES: usize = 32;

/// Field modulus `p = 36t⁴ + 36t³ + 24t² + 6t + 1`.
pub const MODULUS: [u8; FIELD_BYTES] =
    hex!("B640000002A3A6F1D603AB4FF58EC74521F2934B1A7AEEDBE56F9B27E351457D");

/// Group order `n = 36t⁴ + 36t³ + 18t² + 6t + 1`.
pub const ORDER: [u8; FIELD_BYTES] =
    hex!("B640000002A3A6F1D603AB4FF58EC74449F2934B18EA8BEEE56EE19CD69ECF25");

/// BN curve parameter `t`.
pub const BN_PARAMETER: [u8; 8] = hex!("600000000058F98A");

/// Coefficient `b` of `E: y² = x³ + b`; the twist uses `b·u`.
pub const EQUATION_B: u64 = 5;

/// Generator `P1` of `G1`, encoded as `x ‖ y`.
pub const P1: [u8; 2 * FIELD_BYTES] = hex!(
    "93DE051D62BF718FF5ED0704487D01D6E1E4086909DC3280E8C4E4817C66DDDD"
    "21FE8DDA4F21E607631065125C395BBC1C1C00CBFA6024350C464CD70A3EA616"
);

/// Generator `P2` of `G2`, encoded as `x ‖ y` with the `u` coefficient of each first.
pub const P2: [u8; 4 * FIELD_BYTES] = hex!(
    "85AEF3D078640C98597B6027B441A01FF1DD2C190F5E93C454806C11D8806141"
    "3722755292130B08D2AAB97FD34EC120EE265948D19C17ABF9B7213BAF82D65B"
    "17509B092E845C1266BA0D262CBEE6ED0736A96FA347C8BD856DC76B84EBEB96"
    "A7CF28D519BE3DA65F3170153D278FF247EFBA98A71A08116215BBA5C999A7C7"
);

static STANDARD: LazyLock<Sm9Params> = LazyLock::new(|| {
    Sm9Params::new(
        BigUint::from_bytes_be(&MODULUS),
        BigUint::from_bytes_be(&ORDER),
        BigUint::from_bytes_be(&BN_PARAMETER),
        BigUint::from(EQUATION_B),
        &P1,
        &P2,
    )
    .expect("SM9 curve parameters are valid")
});

/// Parameters of a BN curve `E: y² = x³ + b` over `Fp` together with its sextic twist
/// `E': y² = x³ + b·u` over `Fp2`.
///
/// `G1` lives on `E` with Jacobian coordinates, `G2` on `E'` with homogeneous coordinates.
#[derive(Clone, Debug)]
pub struct Sm9Params {
    order: BigUint,
    t: BigUint,
    curve: Curve<FieldElement>,
    twist: Curve<Fp2>,
    p1: Point<FieldElement>,
    p2: Point<Fp2>,
}

impl Sm9Params {
    /// Assemble BN curve parameters.
    ///
    /// `p1` is encoded as `x ‖ y` and `p2` in the format of [`TwistPoint::to_bytes`]. Both
    /// generators are checked to lie in their order `order` subgroups.
    pub fn new(
        p: BigUint,
        order: BigUint,
        t: BigUint,
        b: BigUint,
        p1: &[u8],
        p2: &[u8],
    ) -> Result<Self> {
        let modulus = Modulus::new(p.clone())?;

        // u² = -2 needs -2 to be a non-residue
        if modulus.element_from_u64(2).negate().sqrt().is_some() {
            return Err(Error::Field(primefield::Error::InvalidModulus));
        }

        let curve = Curve::from_params(
            p.clone(),
            BigUint::zero(),
            b,
            Some(order.clone()),
            Some(BigUint::one()),
        )?
        .with_coordinates(CoordinateSystem::Jacobian);

        // #E'(Fp2) = n(2p - n)
        let cofactor = (p << 1u32) - &order;
        let twist = twist::twist_curve(curve.b(), order.clone(), cofactor)?;

        let len = modulus.byte_len();
        if p1.len() != 2 * len {
            return Err(Error::InvalidLength {
                expected: 2 * len,
                actual: p1.len(),
            });
        }

        let (x, y) = p1.split_at(len);
        let p1 = curve.create_point(
            modulus.element_from_bytes(x)?,
            modulus.element_from_bytes(y)?,
        )?;

        // cofactor one skips the subgroup check in `create_point`
        if !p1.multiply(&BigInt::from(order.clone())).is_infinity() {
            return Err(Error::InvalidPoint);
        }

        let p2 = Point::<Fp2>::from_bytes(&twist, p2)?;
        if p2.is_infinity() {
            return Err(Error::InvalidPoint);
        }

        Ok(Self {
            order,
            t,
            curve,
            twist,
            p1,
            p2,
        })
    }

    /// The SM9 parameters of GM/T 0044-2016.
    ///
    /// All calls share the generators, so precomputation cached on them is reused.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Modulus of the base field.
    pub fn modulus(&self) -> &Modulus {
        self.curve.modulus()
    }

    /// Order `n` of `G1`, `G2` and `Gt`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// BN curve parameter `t`.
    pub fn t(&self) -> &BigUint {
        &self.t
    }

    /// The curve `E` over `Fp` carrying `G1`.
    pub fn curve(&self) -> &Curve<FieldElement> {
        &self.curve
    }

    /// The twist `E'` over `Fp2` carrying `G2`.
    pub fn twist(&self) -> &Curve<Fp2> {
        &self.twist
    }

    /// Generator of `G1`.
    pub fn p1(&self) -> &Point<FieldElement> {
        &self.p1
    }

    /// Generator of `G2`.
    pub fn p2(&self) -> &Point<Fp2> {
        &self.p2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bn_polynomials() {
        let params = Sm9Params::standard();
        let t = params.t();
        let t2 = t * t;
        let t3 = &t2 * t;
        let t4 = &t3 * t;

        let p = &t4 * 36u32 + &t3 * 36u32 + &t2 * 24u32 + t * 6u32 + 1u32;
        let n = &t4 * 36u32 + &t3 * 36u32 + &t2 * 18u32 + t * 6u32 + 1u32;
        assert_eq!(&p, params.modulus().value());
        assert_eq!(&n, params.order());
    }

    #[test]
    fn generators() {
        let params = Sm9Params::standard();
        assert!(params.p1().is_valid());
        assert!(params.p2().is_valid());
        assert_eq!(params.twist().coordinate_system(), CoordinateSystem::Homogeneous);
        assert_eq!(params.p2().to_bytes(), P2);
    }

    #[test]
    fn rejects_off_curve_generator() {
        let mut p1 = P1;
        p1[63] ^= 1;

        let err = Sm9Params::new(
            BigUint::from_bytes_be(&MODULUS),
            BigUint::from_bytes_be(&ORDER),
            BigUint::from_bytes_be(&BN_PARAMETER),
            BigUint::from(EQUATION_B),
            &p1,
            &P2,
        )
        .unwrap_err();
        assert_eq!(err, Error::InvalidPoint);
    }

    #[test]
    fn rejects_short_generator() {
        let err = Sm9Params::new(
            BigUint::from_bytes_be(&MODULUS),
            BigUint::from_bytes_be(&ORDER),
            BigUint::from_bytes_be(&BN_PARAMETER),
            BigUint::from(EQUATION_B),
            &P1[1..],
            &P2,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                expected: 64,
                actual: 63
            }
        );
    }
}
