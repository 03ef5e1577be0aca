//! Coordinate systems.

use primefield::Field;

/// Internal representation used for the points of a curve.
///
/// The coordinate system is a property of the curve: every point of a curve uses the same one.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CoordinateSystem {
    /// Affine `(x, y)`.
    Affine,

    /// Homogeneous projective `(X, Y, Z)` representing `(X/Z, Y/Z)`.
    Homogeneous,

    /// Jacobian `(X, Y, Z)` representing `(X/Z², Y/Z³)`.
    Jacobian,

    /// Jacobian `(X, Y, Z)` which also carries `W = aZ⁴` for faster doubling.
    #[default]
    JacobianModified,
}

impl CoordinateSystem {
    /// Number of auxiliary coordinates carried next to `X` and `Y`.
    pub fn aux_len(self) -> usize {
        match self {
            Self::Affine => 0,
            Self::Homogeneous | Self::Jacobian => 1,
            Self::JacobianModified => 2,
        }
    }

    /// Auxiliary coordinates of a normalized point, i.e. `Z = 1`.
    pub(crate) fn normalized_zs<F: Field>(self, a: &F) -> Vec<F> {
        match self {
            Self::Affine => Vec::new(),
            Self::Homogeneous | Self::Jacobian => vec![a.one()],
            Self::JacobianModified => vec![a.one(), a.clone()],
        }
    }

    /// Auxiliary coordinates of the identity, i.e. `Z = 0`.
    pub(crate) fn identity_zs<F: Field>(self, a: &F) -> Vec<F> {
        vec![a.zero(); self.aux_len()]
    }
}
