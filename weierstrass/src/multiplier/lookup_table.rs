//! Lookup tables of precomputed points.

use crate::{Curve, Point};
use primefield::Field;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Table of normalized points, stored as fixed-width words so that an entry can be selected
/// by scanning the whole table.
///
/// Each entry is laid out as `[identity flag, x words.., y words..]`.
pub struct LookupTable<F: Field> {
    curve: Curve<F>,
    words: Vec<u32>,
    entry_len: usize,
    len: usize,
}

impl<F: Field> LookupTable<F> {
    /// Build a table from points of `curve`.
    ///
    /// # Panics
    ///
    /// If a point belongs to a different curve.
    pub fn new(curve: &Curve<F>, points: &[Point<F>]) -> Self {
        let coord_len = curve.a().word_len();
        let entry_len = 1 + 2 * coord_len;
        let mut words = Vec::with_capacity(points.len() * entry_len);

        for point in points {
            assert!(point.curve() == curve, "point belongs to a different curve");
            let point = point.normalize();

            match (point.is_infinity(), point.raw_x(), point.raw_y()) {
                (false, Some(x), Some(y)) => {
                    words.push(0);
                    words.extend(x.to_words());
                    words.extend(y.to_words());
                }
                _ => {
                    words.push(1);
                    words.extend(core::iter::repeat_n(0, 2 * coord_len));
                }
            }
        }

        Self {
            curve: curve.clone(),
            words,
            entry_len,
            len: points.len(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns entry `index`, reading every entry of the table so that the memory access pattern
    /// does not depend on `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn lookup(&self, index: usize) -> Point<F> {
        assert!(index < self.len, "lookup table index out of range");

        let mut selected = vec![0u32; self.entry_len];
        let index = index as u64;

        for (i, entry) in self.words.chunks_exact(self.entry_len).enumerate() {
            let choice = (i as u64).ct_eq(&index);
            for (dst, src) in selected.iter_mut().zip(entry) {
                dst.conditional_assign(src, choice);
            }
        }

        self.decode(&selected)
    }

    /// Returns entry `index` by indexing directly.
    ///
    /// Not hardened: the memory access pattern depends on `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn lookup_var(&self, index: usize) -> Point<F> {
        assert!(index < self.len, "lookup table index out of range");
        let start = index * self.entry_len;
        self.decode(&self.words[start..start + self.entry_len])
    }

    fn decode(&self, entry: &[u32]) -> Point<F> {
        if entry[0] == 1 {
            return self.curve.infinity();
        }

        let coord_len = (self.entry_len - 1) / 2;
        let a = self.curve.a();
        let x = a.from_words(&entry[1..1 + coord_len]);
        let y = a.from_words(&entry[1 + coord_len..]);
        self.curve.create_point_unchecked(x, y)
    }
}
