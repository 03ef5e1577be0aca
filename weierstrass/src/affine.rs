//! Affine points detached from a curve.

use primefield::Field;

/// Point in affine coordinates which does not reference a curve.
///
/// Detached points compare by coordinates only. Attach one to a curve with
/// [`Curve::import_affine`][`crate::Curve::import_affine`], which validates it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AffinePoint<F: Field> {
    coordinates: Option<(F, F)>,
}

impl<F: Field> AffinePoint<F> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self { coordinates: None }
    }

    /// Detached point with the given coordinates. No validation is performed.
    pub fn new(x: F, y: F) -> Self {
        Self {
            coordinates: Some((x, y)),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.coordinates.is_none()
    }

    /// `x` coordinate, `None` for the identity.
    pub fn x(&self) -> Option<&F> {
        self.coordinates.as_ref().map(|(x, _)| x)
    }

    /// `y` coordinate, `None` for the identity.
    pub fn y(&self) -> Option<&F> {
        self.coordinates.as_ref().map(|(_, y)| y)
    }

    /// Both coordinates, `None` for the identity.
    pub fn coordinates(&self) -> Option<(&F, &F)> {
        self.coordinates.as_ref().map(|(x, y)| (x, y))
    }
}

impl<F: Field> Default for AffinePoint<F> {
    fn default() -> Self {
        Self::identity()
    }
}
