//! Fixed-point comb scalar multiplication.

use super::{LookupTable, Multiplier};
use crate::{Curve, Error, Point, Result};
use num_bigint::BigUint;
use primefield::Field;
use std::sync::{Arc, PoisonError, RwLock};

/// Slot on a point holding its comb precomputation, shared between clones of the point.
pub(crate) type PrecompSlot<F> = Arc<RwLock<Option<Arc<CombPrecomputation<F>>>>>;

/// Precomputed data for multiplying a fixed point with [`FixedPointCombMultiplier`].
pub struct CombPrecomputation<F: Field> {
    table: LookupTable<F>,
    offset: Point<F>,
    width: usize,
}

impl<F: Field> CombPrecomputation<F> {
    /// Lookup table of the `2^width` combinations of `P·2^(i·d)`, each plus `P`.
    pub fn lookup_table(&self) -> &LookupTable<F> {
        &self.table
    }

    /// Correction added after the comb loop: `P - P·2^d`.
    pub fn offset(&self) -> &Point<F> {
        &self.offset
    }

    /// Number of scalar bits consumed per table lookup.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Fixed-base comb multiplier.
///
/// The first multiplication of a point builds a table of `2^w` precomputed points and caches it
/// on the point; later multiplications of the same point (or its clones) reuse it. Each column
/// of the comb costs one doubling, one addition and one constant-time table scan.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPointCombMultiplier;

impl FixedPointCombMultiplier {
    /// Number of scalar bits the comb covers on `curve`: the bit length of the order, or of the
    /// field characteristic plus one when the order is unknown.
    pub fn comb_size<F: Field>(curve: &Curve<F>) -> u64 {
        match curve.order() {
            Some(order) => order.bits(),
            None => curve.field_bits() + 1,
        }
    }

    /// Window width used for a comb covering `size` bits.
    pub fn width_for(size: u64) -> usize {
        if size >= 250 { 6 } else { 5 }
    }

    /// Return the comb precomputation for `point`, building and caching it if needed.
    pub fn precompute<F: Field>(&self, point: &Point<F>) -> Arc<CombPrecomputation<F>> {
        let size = Self::comb_size(point.curve());
        let min_width = Self::width_for(size);
        let slot = point.precomp();

        {
            let cached = slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = cached.as_ref().filter(|p| p.width >= min_width) {
                return Arc::clone(existing);
            }
        }

        let computed = Arc::new(build(point, size, min_width));

        let mut cached = slot.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = cached.as_ref().filter(|p| p.width >= min_width) {
            return Arc::clone(existing);
        }

        *cached = Some(Arc::clone(&computed));
        computed
    }
}

impl<F: Field> Multiplier<F> for FixedPointCombMultiplier {
    fn multiply_positive(&self, point: &Point<F>, k: &BigUint) -> Result<Point<F>> {
        let size = Self::comb_size(point.curve());

        if k.bits() > size {
            return Err(Error::ScalarTooLarge {
                bits: k.bits(),
                max: size,
            });
        }

        let precomp = self.precompute(point);
        let width = precomp.width;
        let d = comb_columns(size, width);
        let full_comb_bits = d * width as u64;

        let mut words = k.to_u32_digits();
        words.resize(full_comb_bits.div_ceil(32) as usize, 0);

        let top = full_comb_bits - 1;
        let mut acc = point.curve().infinity();

        for i in 0..d {
            let mut index = 0usize;
            let mut j = top - i;

            loop {
                let bit = (words[(j >> 5) as usize] >> (j & 31)) & 1;
                index = (index << 1) | bit as usize;

                if j < d {
                    break;
                }
                j -= d;
            }

            acc = acc.twice_plus(&precomp.table.lookup(index));
        }

        Ok(acc.add(&precomp.offset))
    }
}

/// `d = ceil(size / width)`: the number of columns, i.e. the stride between bits sharing a
/// lookup.
fn comb_columns(size: u64, width: usize) -> u64 {
    size.div_ceil(width as u64)
}

fn build<F: Field>(point: &Point<F>, size: u64, width: usize) -> CombPrecomputation<F> {
    let curve = point.curve();
    let d = comb_columns(size, width);
    let n = 1usize << width;

    // pow2[i] = P·2^(i·d), followed by the offset P - P·2^d
    let mut pow2 = Vec::with_capacity(width + 1);
    pow2.push(point.clone());
    for i in 1..width {
        let next = pow2[i - 1].times_pow2(d as u32);
        pow2.push(next);
    }
    let offset = pow2[0].subtract(&pow2[1]);
    pow2.push(offset);
    curve.normalize_all(&mut pow2);

    let mut entries = vec![curve.infinity(); n];
    entries[0] = pow2[0].clone();

    for bit in (0..width).rev() {
        let step = 1usize << bit;
        for i in (step..n).step_by(step << 1) {
            entries[i] = entries[i - step].add(&pow2[bit]);
        }
    }
    curve.normalize_all(&mut entries);

    log::debug!("built comb table: size={size} width={width} d={d} entries={n}");

    CombPrecomputation {
        table: LookupTable::new(curve, &entries),
        offset: pow2[width].clone(),
        width,
    }
}
