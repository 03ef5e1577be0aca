//! Double-and-add scalar multiplication.

use super::Multiplier;
use crate::{Point, Result};
use num_bigint::BigUint;
use primefield::Field;

/// Left-to-right binary double-and-add.
///
/// Runs in time dependent on the scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleAndAddMultiplier;

impl<F: Field> Multiplier<F> for DoubleAndAddMultiplier {
    fn multiply_positive(&self, point: &Point<F>, k: &BigUint) -> Result<Point<F>> {
        Ok(multiply_positive(point, k))
    }
}

/// Compute `k * point` for `k >= 0`.
pub(crate) fn multiply_positive<F: Field>(point: &Point<F>, k: &BigUint) -> Point<F> {
    let mut acc = point.curve().infinity();

    for i in (0..k.bits()).rev() {
        acc = acc.twice();
        if k.bit(i) {
            acc = acc.add(point);
        }
    }

    acc
}
