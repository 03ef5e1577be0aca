//! Field arithmetic shared by prime fields and their extensions.

use crate::Result;
use core::{fmt::Debug, hash::Hash};

/// Arithmetic over the elements of a finite field.
///
/// The field is determined at runtime by each element (e.g. by its modulus), so constants are
/// produced relative to an existing element rather than as associated constants.
///
/// Binary operations panic if the operands belong to different fields.
pub trait Field: Clone + Debug + Eq + Hash + Send + Sync + Sized + 'static {
    /// The additive identity of the field `self` belongs to.
    fn zero(&self) -> Self;

    /// The multiplicative identity of the field `self` belongs to.
    fn one(&self) -> Self;

    /// Is this element zero?
    fn is_zero(&self) -> bool;

    /// Is this element one?
    fn is_one(&self) -> bool;

    /// Do `self` and `other` belong to the same field?
    fn same_field(&self, other: &Self) -> bool;

    /// Add elements.
    fn add(&self, rhs: &Self) -> Self;

    /// Subtract elements.
    fn subtract(&self, rhs: &Self) -> Self;

    /// Multiply elements.
    fn multiply(&self, rhs: &Self) -> Self;

    /// Negate element.
    fn negate(&self) -> Self;

    /// Compute the multiplicative inverse.
    fn invert(&self) -> Result<Self>;

    /// Divide by `rhs`.
    fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.invert()?))
    }

    /// Square element.
    fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Double element.
    fn double(&self) -> Self {
        self.add(self)
    }

    /// Compute `self * b - x * y`.
    fn multiply_minus_product(&self, b: &Self, x: &Self, y: &Self) -> Self {
        self.multiply(b).subtract(&x.multiply(y))
    }

    /// Compute `self * b + x * y`.
    fn multiply_plus_product(&self, b: &Self, x: &Self, y: &Self) -> Self {
        self.multiply(b).add(&x.multiply(y))
    }

    /// Compute `self² - x * y`.
    fn square_minus_product(&self, x: &Self, y: &Self) -> Self {
        self.square().subtract(&x.multiply(y))
    }

    /// Compute `self² + x * y`.
    fn square_plus_product(&self, x: &Self, y: &Self) -> Self {
        self.square().add(&x.multiply(y))
    }

    /// Bit length of the field's characteristic.
    fn field_bits(&self) -> u64;

    /// Number of 32-bit words produced by [`Field::to_words`].
    fn word_len(&self) -> usize;

    /// Serialize as exactly [`Field::word_len`] 32-bit words.
    fn to_words(&self) -> Vec<u32>;

    /// Deserialize words produced by [`Field::to_words`] into an element of the field `self`
    /// belongs to.
    fn from_words(&self, words: &[u32]) -> Self;
}
