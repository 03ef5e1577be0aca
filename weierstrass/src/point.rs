//! Curve points.

use crate::{
    AffinePoint, CoordinateSystem, Curve,
    curve::has_trivial_cofactor,
    multiplier::{PrecompSlot, double_and_add},
    point_arithmetic::{self, jacobian_modified_w},
};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use primefield::Field;

/// Point on a short Weierstrass curve.
///
/// The meaning of the coordinates depends on the curve's [`CoordinateSystem`]. Points are
/// immutable: arithmetic always returns a new point.
///
/// Equality and hashing compare the normalized coordinates, so the same point expressed with
/// different `Z` values compares equal.
///
/// # Panics
///
/// Arithmetic between points of different curves is a programming error and panics.
pub struct Point<F: Field> {
    curve: Curve<F>,
    x: Option<F>,
    y: Option<F>,
    zs: Vec<F>,
    precomp: PrecompSlot<F>,
}

impl<F: Field> Point<F> {
    pub(crate) fn from_parts(curve: Curve<F>, x: Option<F>, y: Option<F>, zs: Vec<F>) -> Self {
        debug_assert_eq!(zs.len(), curve.coordinate_system().aux_len());
        Self {
            curve,
            x,
            y,
            zs,
            precomp: PrecompSlot::default(),
        }
    }

    /// New point on the same curve.
    pub(crate) fn with_coordinates(&self, x: F, y: F, zs: Vec<F>) -> Self {
        Self::from_parts(self.curve.clone(), Some(x), Some(y), zs)
    }

    pub(crate) fn precomp(&self) -> &PrecompSlot<F> {
        &self.precomp
    }

    #[inline]
    fn assert_same_curve(&self, other: &Self) {
        assert!(
            self.curve == other.curve
                && self.curve.coordinate_system() == other.curve.coordinate_system(),
            "points belong to different curves"
        );
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &Curve<F> {
        &self.curve
    }

    /// Raw `X` coordinate, `None` for the identity.
    pub fn raw_x(&self) -> Option<&F> {
        self.x.as_ref()
    }

    /// Raw `Y` coordinate, `None` for the identity.
    pub fn raw_y(&self) -> Option<&F> {
        self.y.as_ref()
    }

    /// Auxiliary coordinates: `[]` (affine), `[Z]` (homogeneous, Jacobian) or `[Z, W]`
    /// (modified Jacobian).
    pub fn raw_z_coords(&self) -> &[F] {
        &self.zs
    }

    /// Is this point the point at infinity?
    pub fn is_infinity(&self) -> bool {
        self.x.is_none() || self.y.is_none() || self.zs.first().is_some_and(F::is_zero)
    }

    /// Is this point in normalized form, i.e. does `Z = 1` (or is it the identity)?
    pub fn is_normalized(&self) -> bool {
        match self.curve.coordinate_system() {
            CoordinateSystem::Affine => true,
            _ => self.is_infinity() || self.zs.first().is_some_and(F::is_one),
        }
    }

    /// Normalize this point so its coordinates are the affine ones.
    ///
    /// Returns a clone (sharing any precomputation) if the point is already normalized.
    pub fn normalize(&self) -> Self {
        if self.is_normalized() {
            return self.clone();
        }

        match self.zs[0].invert() {
            Ok(zinv) => self.normalize_with(&zinv),
            Err(_) => self.curve.infinity(),
        }
    }

    /// Normalize given the inverse of `Z`.
    pub(crate) fn normalize_with(&self, zinv: &F) -> Self {
        let (Some(x), Some(y)) = (&self.x, &self.y) else {
            return self.curve.infinity();
        };

        let (x, y) = match self.curve.coordinate_system() {
            CoordinateSystem::Affine => return self.clone(),
            CoordinateSystem::Homogeneous => (x.multiply(zinv), y.multiply(zinv)),
            CoordinateSystem::Jacobian | CoordinateSystem::JacobianModified => {
                let zinv2 = zinv.square();
                let zinv3 = zinv2.multiply(zinv);
                (x.multiply(&zinv2), y.multiply(&zinv3))
            }
        };

        self.curve.create_point_unchecked(x, y)
    }

    /// Affine `x` coordinate, `None` for the identity.
    pub fn affine_x(&self) -> Option<F> {
        self.to_affine().coordinates().map(|(x, _)| x.clone())
    }

    /// Affine `y` coordinate, `None` for the identity.
    pub fn affine_y(&self) -> Option<F> {
        self.to_affine().coordinates().map(|(_, y)| y.clone())
    }

    /// Detach this point from its curve as an [`AffinePoint`].
    pub fn to_affine(&self) -> AffinePoint<F> {
        let normalized = self.normalize();
        match (normalized.is_infinity(), normalized.x, normalized.y) {
            (false, Some(x), Some(y)) => AffinePoint::new(x, y),
            _ => AffinePoint::identity(),
        }
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) if !self.is_infinity() => {
                self.with_coordinates(x.clone(), y.negate(), self.zs.clone())
            }
            _ => self.curve.infinity(),
        }
    }

    /// Returns `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        self.assert_same_curve(rhs);

        if self.is_infinity() {
            return rhs.clone();
        }
        if rhs.is_infinity() {
            return self.clone();
        }

        point_arithmetic::add(self, rhs)
    }

    /// Returns `self - rhs`.
    pub fn subtract(&self, rhs: &Self) -> Self {
        if rhs.is_infinity() {
            self.assert_same_curve(rhs);
            return self.clone();
        }

        self.add(&rhs.negate())
    }

    /// Returns `2 * self`.
    pub fn twice(&self) -> Self {
        if self.is_infinity() {
            return self.clone();
        }

        point_arithmetic::double(self)
    }

    /// Returns `2 * self + rhs`.
    pub fn twice_plus(&self, rhs: &Self) -> Self {
        self.twice().add(rhs)
    }

    /// Returns `3 * self`.
    pub fn three_times(&self) -> Self {
        self.twice_plus(self)
    }

    /// Returns `2^e * self`.
    pub fn times_pow2(&self, e: u32) -> Self {
        let mut p = self.clone();
        for _ in 0..e {
            if p.is_infinity() {
                break;
            }
            p = p.twice();
        }
        p
    }

    /// Returns `k * self` using double-and-add.
    pub fn multiply(&self, k: &BigInt) -> Self {
        if k.is_zero() || self.is_infinity() {
            return self.curve.infinity();
        }

        let positive = double_and_add::multiply_positive(self, k.magnitude());

        match k.sign() {
            Sign::Minus => positive.negate(),
            _ => positive,
        }
    }

    /// Does this point satisfy the curve equation, adjusted for its coordinate system?
    pub fn satisfies_curve_equation(&self) -> bool {
        let (Some(x), Some(y)) = (&self.x, &self.y) else {
            return true;
        };

        if self.is_infinity() {
            return true;
        }

        let a = self.curve.a();
        let b = self.curve.b();
        if !x.same_field(a) || !y.same_field(a) || !self.zs.iter().all(|z| z.same_field(a)) {
            return false;
        }

        let x3 = x.square().multiply(x);

        match self.curve.coordinate_system() {
            CoordinateSystem::Affine => {
                y.square() == x3.add(&a.multiply(x)).add(b)
            }
            CoordinateSystem::Homogeneous => {
                // Y²Z = X³ + aXZ² + bZ³
                let z = &self.zs[0];
                let z2 = z.square();
                let z3 = z2.multiply(z);
                let rhs = x3.add(&a.multiply(x).multiply(&z2)).add(&b.multiply(&z3));
                y.square().multiply(z) == rhs
            }
            coordinates @ (CoordinateSystem::Jacobian | CoordinateSystem::JacobianModified) => {
                // Y² = X³ + aXZ⁴ + bZ⁶
                let z = &self.zs[0];
                let z2 = z.square();
                let z4 = z2.square();
                let z6 = z4.multiply(&z2);
                let rhs = x3.add(&a.multiply(x).multiply(&z4)).add(&b.multiply(&z6));

                let w_ok = coordinates != CoordinateSystem::JacobianModified
                    || self.zs[1] == jacobian_modified_w(a, z);

                w_ok && y.square() == rhs
            }
        }
    }

    /// Is this point in the subgroup of the curve's order?
    ///
    /// Always true when the curve has no order, or a cofactor of one.
    pub fn satisfies_order(&self) -> bool {
        if has_trivial_cofactor(&self.curve) {
            return true;
        }

        match self.curve.order() {
            Some(n) if !self.is_infinity() => {
                double_and_add::multiply_positive(self, n).is_infinity()
            }
            _ => true,
        }
    }

    /// Is this point on the curve and in the subgroup of interest?
    pub fn is_valid(&self) -> bool {
        self.is_infinity() || (self.satisfies_curve_equation() && self.satisfies_order())
    }
}

impl<F: Field> Clone for Point<F> {
    fn clone(&self) -> Self {
        Self {
            curve: self.curve.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
            zs: self.zs.clone(),
            precomp: self.precomp.clone(),
        }
    }
}

impl<F: Field> PartialEq for Point<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.curve != other.curve {
            return false;
        }

        let (i1, i2) = (self.is_infinity(), other.is_infinity());
        if i1 || i2 {
            return i1 && i2;
        }

        let (p1, p2) = (self.normalize(), other.normalize());
        p1.x == p2.x && p1.y == p2.y
    }
}

impl<F: Field> Eq for Point<F> {}

impl<F: Field> Hash for Point<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        if normalized.is_infinity() {
            0u8.hash(state);
        } else {
            1u8.hash(state);
            normalized.x.hash(state);
            normalized.y.hash(state);
        }
    }
}

impl<F: Field> fmt::Debug for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            return write!(f, "Point(INFINITY)");
        }

        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("zs", &self.zs)
            .finish()
    }
}

impl<F: Field> Add<&Point<F>> for &Point<F> {
    type Output = Point<F>;

    fn add(self, rhs: &Point<F>) -> Point<F> {
        Point::add(self, rhs)
    }
}

impl<F: Field> Sub<&Point<F>> for &Point<F> {
    type Output = Point<F>;

    fn sub(self, rhs: &Point<F>) -> Point<F> {
        Point::subtract(self, rhs)
    }
}

impl<F: Field> Neg for &Point<F> {
    type Output = Point<F>;

    fn neg(self) -> Point<F> {
        Point::negate(self)
    }
}

impl<F: Field> Mul<&BigInt> for &Point<F> {
    type Output = Point<F>;

    fn mul(self, k: &BigInt) -> Point<F> {
        Point::multiply(self, k)
    }
}
