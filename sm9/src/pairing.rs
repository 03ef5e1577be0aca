//! R-ate pairing on the SM9 BN curve.
//!
//! The Miller loop runs over `6t + 2` with the running point `T` kept in homogeneous coordinates
//! on the twist, so line evaluations need no inversions. Line values are only determined up to a
//! factor in `Fp2`, which the final exponentiation removes.

use crate::{Fp2, Fp12, Sm9Params, twist::TwistPoint};
use log::trace;
use num_bigint::{BigInt, BigUint, Sign};
use primefield::Result;
use std::sync::LazyLock;
use weierstrass::{FieldElement, Point};

/// Element of the pairing target group, the order `n` subgroup of `Fp12*`.
pub type Gt = Fp12;

static STANDARD: LazyLock<Pairing> = LazyLock::new(|| Pairing::new(Sm9Params::standard()));

/// Pairing engine `e: E(Fp) × E'(Fp2) → Gt` for a BN curve.
#[derive(Clone, Debug)]
pub struct Pairing {
    params: Sm9Params,
    loop_parameter: BigUint,
}

impl Pairing {
    /// Engine for the curve described by `params`.
    pub fn new(params: Sm9Params) -> Self {
        let loop_parameter = params.t() * 6u32 + 2u32;
        Self {
            params,
            loop_parameter,
        }
    }

    /// Engine for the SM9 curve of GM/T 0044-2016, shared by all callers.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Curve parameters.
    pub fn params(&self) -> &Sm9Params {
        &self.params
    }

    /// Compute `e(P, Q)`.
    ///
    /// Either argument being the identity gives one.
    ///
    /// # Panics
    ///
    /// If `P` is not a point of [`Sm9Params::curve`] or `Q` a point of [`Sm9Params::twist`].
    pub fn pairing(&self, p: &Point<FieldElement>, q: &Point<Fp2>) -> Gt {
        if p.is_infinity() || q.is_infinity() {
            return Gt::one(self.params.modulus());
        }

        let f = self.miller_loop(p, q);
        let Ok(e) = self.final_exponentiation(&f) else {
            // every line value has a nonzero `v` coefficient, since G1 and E' have no 2-torsion
            unreachable!("Miller loop output is zero");
        };
        e
    }

    /// The Miller loop of the R-ate pairing, before the final exponentiation.
    ///
    /// # Panics
    ///
    /// If `P` is not a point of [`Sm9Params::curve`] or `Q` a point of [`Sm9Params::twist`].
    pub fn miller_loop(&self, p: &Point<FieldElement>, q: &Point<Fp2>) -> Fp12 {
        let one = Fp12::one(self.params.modulus());

        assert!(p.curve() == self.params.curve(), "P is not a point of the SM9 curve");
        let Ok(q) = self.params.twist().import_point(q) else {
            panic!("Q is not a point of the SM9 twist");
        };

        let p = p.to_affine();
        let (Some((xp, yp)), Some((xq, yq))) = (p.coordinates(), affine(&q)) else {
            return one;
        };
        let eval = LineEvaluation { xp, yp };

        let bits = self.loop_parameter.bits();
        trace!("miller loop over {bits} bits");

        let mut f = one;
        let mut t = q.clone();

        for i in (0..bits - 1).rev() {
            f = f.square().multiply(&eval.tangent(&t));
            t = t.twice();

            if self.loop_parameter.bit(i) {
                f = f.multiply(&eval.chord(&t, &xq, &yq));
                t = t.add(&q);
            }
        }

        trace!("miller loop: R-ate correction");

        // T = (6t + 2)Q, then add π(Q) and -π²(Q)
        for r in [q.frobenius(), q.frobenius_squared().negate()] {
            let Some((xr, yr)) = affine(&r) else {
                continue;
            };

            f = f.multiply(&eval.chord(&t, &xr, &yr));
            t = t.add(&r);
        }

        f
    }

    /// Raise a Miller loop output to the power `(p¹² - 1)/n`.
    ///
    /// Fails with [`primefield::Error::NotInvertible`] for a zero input.
    pub fn final_exponentiation(&self, f: &Fp12) -> Result<Gt> {
        let f_inv = f.invert()?;

        trace!("final exponentiation: easy part");

        // f^((p⁶ - 1)(p² + 1)) lands in the cyclotomic subgroup, where p⁶ inverts
        let f = f.frobenius_map(6).multiply(&f_inv);
        let f = f.frobenius_map(2).multiply(&f);

        trace!("final exponentiation: hard part");

        // (p⁴ - p² + 1)/n = λ0 + λ1·p + λ2·p² + λ3·p³ with
        //   λ0 = -(36t³ + 30t² + 18t + 2)
        //   λ1 = -(36t³ + 18t² + 12t - 1)
        //   λ2 = 6t² + 1
        //   λ3 = 1
        let t = self.params.t();
        let a = f.pow(t);
        let b = a.pow(t);
        let c = b.pow(t);

        let c36 = c.pow(&BigUint::from(36u32));
        let b6 = b.pow(&BigUint::from(6u32));
        let a6 = a.pow(&BigUint::from(6u32));

        // b³⁰ = (b⁶)⁵, a¹⁸ = (a⁶)³, b¹⁸ = (b⁶)³, a¹² = (a⁶)²
        let y0 = c36
            .multiply(&b6.pow(&BigUint::from(5u32)))
            .multiply(&a6.pow(&BigUint::from(3u32)))
            .multiply(&f.square())
            .frobenius_map(6);
        let y1 = c36
            .multiply(&b6.pow(&BigUint::from(3u32)))
            .multiply(&a6.square())
            .frobenius_map(6)
            .multiply(&f);
        let y2 = b6.multiply(&f);

        Ok(y0
            .multiply(&y1.frobenius())
            .multiply(&y2.frobenius_map(2))
            .multiply(&f.frobenius_map(3)))
    }

    /// Check `e(kP, Q) = e(P, Q)^k = e(P, kQ)`.
    pub fn verify_bilinearity(
        &self,
        p: &Point<FieldElement>,
        q: &Point<Fp2>,
        k: &BigInt,
    ) -> bool {
        let e = self.pairing(p, q);
        let ek = e.pow(k.magnitude());

        let ek = match k.sign() {
            Sign::Minus => match ek.invert() {
                Ok(inv) => inv,
                Err(_) => return false,
            },
            _ => ek,
        };

        self.pairing(&p.multiply(k), q) == ek && self.pairing(p, &q.multiply(k)) == ek
    }
}

/// Affine coordinates of a twist point, `None` for the identity.
fn affine(point: &Point<Fp2>) -> Option<(Fp2, Fp2)> {
    let affine = point.to_affine();
    affine.coordinates().map(|(x, y)| (x.clone(), y.clone()))
}

/// Line functions through points of the twist, evaluated at a fixed `P = (xP, yP)`.
///
/// Each line is returned as the sparse value `c0 + c1·v + c2·w²`.
struct LineEvaluation<'a> {
    xp: &'a FieldElement,
    yp: &'a FieldElement,
}

impl LineEvaluation<'_> {
    /// Tangent at `T = (X, Y, Z)`:
    /// `(3X³ - 2Y²Z) + 2yP·YZ²·v - 3xP·X²Z·w²`.
    fn tangent(&self, t: &Point<Fp2>) -> Fp12 {
        let Some((x, y, z)) = homogeneous(t) else {
            return Fp12::one(self.xp.modulus());
        };

        let x2 = x.square();
        let x3 = x2.multiply(x);
        let y2z = y.square().multiply(z);

        let c0 = x3.double().add(&x3).subtract(&y2z.double());
        let c1 = y.multiply(&z.square()).mul_base(&self.yp.double());
        let c2 = x2.multiply(z).mul_base(&self.xp.double().add(self.xp)).negate();

        Fp12::sparse_line(c0, c1, c2)
    }

    /// Chord through `T = (X, Y, Z)` and the affine `R = (xR, yR)`, with `D = xR·Z - X` and
    /// `N = yR·Z - Y`: `(N·xR - yR·D) + yP·D·v - xP·N·w²`.
    fn chord(&self, t: &Point<Fp2>, xr: &Fp2, yr: &Fp2) -> Fp12 {
        let Some((x, y, z)) = homogeneous(t) else {
            return Fp12::one(self.xp.modulus());
        };

        let d = xr.multiply(z).subtract(x);
        let n = yr.multiply(z).subtract(y);

        if d.is_zero() {
            // T = R needs the tangent; for T = -R the line is vertical, which lies in Fp6 and
            // vanishes in the final exponentiation
            return if n.is_zero() {
                self.tangent(t)
            } else {
                Fp12::one(self.xp.modulus())
            };
        }

        let c0 = n.multiply(xr).subtract(&yr.multiply(&d));
        let c1 = d.mul_base(self.yp);
        let c2 = n.mul_base(self.xp).negate();

        Fp12::sparse_line(c0, c1, c2)
    }
}

/// Raw homogeneous coordinates of `T`, `None` for the identity.
fn homogeneous(t: &Point<Fp2>) -> Option<(&Fp2, &Fp2, &Fp2)> {
    if t.is_infinity() {
        return None;
    }

    Some((t.raw_x()?, t.raw_y()?, t.raw_z_coords().first()?))
}
