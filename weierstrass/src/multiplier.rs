//! Scalar multiplication strategies.

mod comb;
pub(crate) mod double_and_add;
mod lookup_table;

pub use self::{
    comb::{CombPrecomputation, FixedPointCombMultiplier},
    double_and_add::DoubleAndAddMultiplier,
    lookup_table::LookupTable,
};

pub(crate) use self::comb::PrecompSlot;

use crate::{Point, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use primefield::Field;

/// Scalar multiplication `k * P`.
pub trait Multiplier<F: Field> {
    /// Compute `k * point` for a positive `k` and a point which is not the identity.
    fn multiply_positive(&self, point: &Point<F>, k: &BigUint) -> Result<Point<F>>;

    /// Compute `k * point`.
    ///
    /// A zero scalar or the identity yield the identity; a negative scalar multiplies by `|k|`
    /// and negates the result.
    fn multiply(&self, point: &Point<F>, k: &BigInt) -> Result<Point<F>> {
        if k.is_zero() || point.is_infinity() {
            return Ok(point.curve().infinity());
        }

        let positive = self.multiply_positive(point, k.magnitude())?;

        Ok(match k.sign() {
            Sign::Minus => positive.negate(),
            _ => positive,
        })
    }
}
