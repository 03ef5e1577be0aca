//! Prime field elements.

pub(crate) mod sqrt;

use crate::{Error, Field, Modulus, Result};
use core::{
    fmt,
    hash::{Hash, Hasher},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Element of the prime field `GF(p)`.
///
/// The value is always kept in canonical form, i.e. in `[0, p)`.
///
/// # Panics
///
/// Arithmetic between elements of different fields is a programming error and panics.
#[derive(Clone)]
pub struct FieldElement {
    modulus: Modulus,
    value: BigUint,
}

impl FieldElement {
    /// Create a field element, reducing `value` modulo the modulus.
    pub fn new(modulus: &Modulus, value: BigUint) -> Self {
        modulus.element(value)
    }

    pub(crate) fn from_canonical(modulus: Modulus, value: BigUint) -> Self {
        debug_assert!(&value < modulus.value());
        Self { modulus, value }
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            modulus: self.modulus.clone(),
            value,
        }
    }

    #[inline]
    fn p(&self) -> &BigUint {
        self.modulus.value()
    }

    #[inline]
    fn assert_same_field(&self, rhs: &Self) {
        assert!(
            self.modulus == rhs.modulus,
            "field elements have different moduli"
        );
    }

    /// The modulus of the field this element belongs to.
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Canonical integer value of this element.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Is this element one?
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Is the canonical value of this element odd?
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        let mut sum = &self.value + &rhs.value;

        if &sum >= self.p() {
            sum -= self.p();
        }

        self.with_value(sum)
    }

    /// Subtract elements.
    pub fn subtract(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);

        if self.value >= rhs.value {
            self.with_value(&self.value - &rhs.value)
        } else {
            self.with_value(self.p() - (&rhs.value - &self.value))
        }
    }

    /// Multiply elements.
    pub fn multiply(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        self.with_value((&self.value * &rhs.value) % self.p())
    }

    /// Divide by `rhs`, returning an error if `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.invert()?))
    }

    /// Negate element.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            self.with_value(self.p() - &self.value)
        }
    }

    /// Compute modular square.
    pub fn square(&self) -> Self {
        self.with_value((&self.value * &self.value) % self.p())
    }

    /// Double element (add it to itself).
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Compute `self^exp`.
    pub fn pow(&self, exp: &BigUint) -> Self {
        self.with_value(self.value.modpow(exp, self.p()))
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// Computed as `self^(p - 2)` in variable time.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NotInvertible);
        }

        let exp = self.p() - 2u32;
        Ok(self.pow(&exp))
    }

    /// Compute `self * b - x * y`.
    pub fn multiply_minus_product(&self, b: &Self, x: &Self, y: &Self) -> Self {
        self.assert_same_field(b);
        self.assert_same_field(x);
        self.assert_same_field(y);

        let ab = &self.value * &b.value;
        let xy = &x.value * &y.value;
        let p = self.p();

        // Lift into [0, p²) before subtracting so the difference stays non-negative.
        self.with_value(((ab + p * p) - xy) % p)
    }

    /// Compute `self * b + x * y`.
    pub fn multiply_plus_product(&self, b: &Self, x: &Self, y: &Self) -> Self {
        self.assert_same_field(b);
        self.assert_same_field(x);
        self.assert_same_field(y);
        self.with_value((&self.value * &b.value + &x.value * &y.value) % self.p())
    }

    /// Compute `self² - x * y`.
    pub fn square_minus_product(&self, x: &Self, y: &Self) -> Self {
        self.multiply_minus_product(self, x, y)
    }

    /// Compute `self² + x * y`.
    pub fn square_plus_product(&self, x: &Self, y: &Self) -> Self {
        self.multiply_plus_product(self, x, y)
    }

    /// Serialize as [`Modulus::byte_len`] big endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.modulus.byte_len();
        let raw = self.value.to_bytes_be();
        let mut out = vec![0u8; len];
        out[len - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Serialize as [`Modulus::word_len`] little endian 32-bit words.
    pub fn to_words(&self) -> Vec<u32> {
        let mut words = self.value.to_u32_digits();
        words.resize(self.modulus.word_len(), 0);
        words
    }
}

impl Field for FieldElement {
    fn zero(&self) -> Self {
        self.modulus.zero()
    }

    fn one(&self) -> Self {
        self.modulus.one()
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    fn is_one(&self) -> bool {
        FieldElement::is_one(self)
    }

    fn same_field(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }

    fn add(&self, rhs: &Self) -> Self {
        FieldElement::add(self, rhs)
    }

    fn subtract(&self, rhs: &Self) -> Self {
        FieldElement::subtract(self, rhs)
    }

    fn multiply(&self, rhs: &Self) -> Self {
        FieldElement::multiply(self, rhs)
    }

    fn negate(&self) -> Self {
        FieldElement::negate(self)
    }

    fn invert(&self) -> Result<Self> {
        FieldElement::invert(self)
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        FieldElement::divide(self, rhs)
    }

    fn square(&self) -> Self {
        FieldElement::square(self)
    }

    fn double(&self) -> Self {
        FieldElement::double(self)
    }

    fn multiply_minus_product(&self, b: &Self, x: &Self, y: &Self) -> Self {
        FieldElement::multiply_minus_product(self, b, x, y)
    }

    fn multiply_plus_product(&self, b: &Self, x: &Self, y: &Self) -> Self {
        FieldElement::multiply_plus_product(self, b, x, y)
    }

    fn square_minus_product(&self, x: &Self, y: &Self) -> Self {
        FieldElement::square_minus_product(self, x, y)
    }

    fn square_plus_product(&self, x: &Self, y: &Self) -> Self {
        FieldElement::square_plus_product(self, x, y)
    }

    fn field_bits(&self) -> u64 {
        self.modulus.bits()
    }

    fn word_len(&self) -> usize {
        self.modulus.word_len()
    }

    fn to_words(&self) -> Vec<u32> {
        FieldElement::to_words(self)
    }

    fn from_words(&self, words: &[u32]) -> Self {
        self.modulus.element_from_words(words)
    }
}

crate::impl_field_ops!(FieldElement);

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.value == other.value
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.modulus.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{self:X})")
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:X}")
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
