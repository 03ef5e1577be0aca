//! Curve parameters and point factory.

use crate::{AffinePoint, CoordinateSystem, Error, Point, Result, point_arithmetic::times_small};
use core::fmt;
use num_bigint::BigUint;
use num_traits::One;
use primefield::{Field, FieldElement, Modulus};
use std::sync::Arc;

/// Short Weierstrass curve `y² = x³ + ax + b` over the field `F`.
///
/// A curve is a cheaply cloned handle; every point holds one. Two curves are equal when their
/// coefficients are equal, regardless of the coordinate system they are configured with.
pub struct Curve<F: Field> {
    inner: Arc<CurveParams<F>>,
}

struct CurveParams<F> {
    a: F,
    b: F,
    order: Option<BigUint>,
    cofactor: Option<BigUint>,
    coordinates: CoordinateSystem,
}

impl<F: Field> Curve<F> {
    /// Create a curve from its coefficients and, if known, the order of the subgroup of interest
    /// and its cofactor.
    ///
    /// Points use [`CoordinateSystem::default`]; see [`Curve::with_coordinates`].
    pub fn new(a: F, b: F, order: Option<BigUint>, cofactor: Option<BigUint>) -> Result<Self> {
        if !a.same_field(&b) {
            return Err(Error::CurveMismatch);
        }

        // 4a³ + 27b²
        let discriminant = times_small(&a.square().multiply(&a), 4)
            .add(&times_small(&b.square(), 27));

        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        Ok(Self {
            inner: Arc::new(CurveParams {
                a,
                b,
                order,
                cofactor,
                coordinates: CoordinateSystem::default(),
            }),
        })
    }

    /// The same curve, with its points represented in `coordinates`.
    pub fn with_coordinates(&self, coordinates: CoordinateSystem) -> Self {
        Self {
            inner: Arc::new(CurveParams {
                a: self.inner.a.clone(),
                b: self.inner.b.clone(),
                order: self.inner.order.clone(),
                cofactor: self.inner.cofactor.clone(),
                coordinates,
            }),
        }
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &F {
        &self.inner.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &F {
        &self.inner.b
    }

    /// Order of the subgroup of interest, if known.
    pub fn order(&self) -> Option<&BigUint> {
        self.inner.order.as_ref()
    }

    /// Cofactor of the subgroup of interest, if known.
    pub fn cofactor(&self) -> Option<&BigUint> {
        self.inner.cofactor.as_ref()
    }

    /// Coordinate system used by points of this curve.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.inner.coordinates
    }

    /// Bit length of the field characteristic.
    pub fn field_bits(&self) -> u64 {
        self.inner.a.field_bits()
    }

    /// The point at infinity.
    pub fn infinity(&self) -> Point<F> {
        let zs = self.coordinate_system().identity_zs(self.a());
        Point::from_parts(self.clone(), None, None, zs)
    }

    /// Create a point from affine coordinates, checking that it lies on the curve and, when the
    /// curve has a cofactor, in the subgroup of interest.
    pub fn create_point(&self, x: F, y: F) -> Result<Point<F>> {
        if !x.same_field(self.a()) || !y.same_field(self.a()) {
            return Err(Error::CurveMismatch);
        }

        let point = self.create_point_unchecked(x, y);

        if point.is_valid() {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Create a point from affine coordinates without validating them.
    ///
    /// The caller must know that `(x, y)` is on the curve, e.g. because it is the image of a
    /// valid point under an endomorphism. Arithmetic on points that are not gives meaningless
    /// results.
    pub fn create_point_unchecked(&self, x: F, y: F) -> Point<F> {
        let zs = self.coordinate_system().normalized_zs(self.a());
        Point::from_parts(self.clone(), Some(x), Some(y), zs)
    }

    /// Attach a detached affine point to this curve, validating it.
    pub fn import_affine(&self, point: &AffinePoint<F>) -> Result<Point<F>> {
        match point.coordinates() {
            None => Ok(self.infinity()),
            Some((x, y)) => self.create_point(x.clone(), y.clone()),
        }
    }

    /// Re-express a point of an equal curve in this curve's coordinate system.
    pub fn import_point(&self, point: &Point<F>) -> Result<Point<F>> {
        if point.curve() != self {
            return Err(Error::CurveMismatch);
        }

        if point.curve().coordinate_system() == self.coordinate_system() {
            return Ok(Point::from_parts(
                self.clone(),
                point.raw_x().cloned(),
                point.raw_y().cloned(),
                point.raw_z_coords().to_vec(),
            ));
        }

        let point = point.normalize();
        match (point.raw_x(), point.raw_y()) {
            (Some(x), Some(y)) if !point.is_infinity() => {
                Ok(self.create_point_unchecked(x.clone(), y.clone()))
            }
            _ => Ok(self.infinity()),
        }
    }

    /// Normalize a slice of points using a single field inversion.
    ///
    /// # Panics
    ///
    /// If any of the points belongs to a different curve.
    pub fn normalize_all(&self, points: &mut [Point<F>]) {
        for point in points.iter() {
            assert!(point.curve() == self, "point belongs to a different curve");
        }

        let pending: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_normalized())
            .map(|(i, _)| i)
            .collect();

        if pending.is_empty() {
            return;
        }

        // Montgomery's trick: invert the product of all Z, then peel off one Z at a time.
        let zs: Vec<F> = pending
            .iter()
            .map(|&i| points[i].raw_z_coords()[0].clone())
            .collect();

        let mut prefix = Vec::with_capacity(zs.len());
        let mut acc = zs[0].clone();
        prefix.push(acc.clone());
        for z in &zs[1..] {
            acc = acc.multiply(z);
            prefix.push(acc.clone());
        }

        let Ok(mut inv) = acc.invert() else {
            for &i in &pending {
                points[i] = points[i].normalize();
            }
            return;
        };

        for j in (0..pending.len()).rev() {
            let zinv = if j == 0 {
                inv.clone()
            } else {
                let zinv = inv.multiply(&prefix[j - 1]);
                inv = inv.multiply(&zs[j]);
                zinv
            };

            let i = pending[j];
            points[i] = points[i].normalize_with(&zinv);
        }
    }
}

impl Curve<FieldElement> {
    /// Create a curve over `GF(p)` from integer parameters.
    ///
    /// The coefficients are reduced modulo `p`.
    pub fn from_params(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        order: Option<BigUint>,
        cofactor: Option<BigUint>,
    ) -> Result<Self> {
        let modulus = Modulus::new(p)?;
        Self::new(modulus.element(a), modulus.element(b), order, cofactor)
    }

    /// Modulus of the base field.
    pub fn modulus(&self) -> &Modulus {
        self.a().modulus()
    }

    /// Length in bytes of an encoded field element.
    pub fn field_len(&self) -> usize {
        self.modulus().byte_len()
    }

    /// Create a point from integer affine coordinates; see [`Curve::create_point`].
    ///
    /// Coordinates which are not reduced modulo `p` are rejected.
    pub fn create_point_from_integers(&self, x: BigUint, y: BigUint) -> Result<Point<FieldElement>> {
        let p = self.modulus().value();
        if &x >= p || &y >= p {
            return Err(Error::Field(primefield::Error::NotInField));
        }

        self.create_point(self.modulus().element(x), self.modulus().element(y))
    }
}

impl<F: Field> Clone for Curve<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: Field> PartialEq for Curve<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.a == other.inner.a && self.inner.b == other.inner.b)
    }
}

impl<F: Field> Eq for Curve<F> {}

impl<F: Field> fmt::Debug for Curve<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("a", &self.inner.a)
            .field("b", &self.inner.b)
            .field("order", &self.inner.order)
            .field("cofactor", &self.inner.cofactor)
            .field("coordinates", &self.inner.coordinates)
            .finish()
    }
}

/// Is the cofactor known to be one, i.e. is every point on the curve in the subgroup?
pub(crate) fn has_trivial_cofactor<F: Field>(curve: &Curve<F>) -> bool {
    curve.cofactor().is_some_and(BigUint::is_one)
}
