//! Field moduli.

use crate::{Error, FieldElement, Result, element::sqrt::Algorithm};
use core::{
    fmt,
    hash::{Hash, Hasher},
};
use num_bigint::BigUint;
use std::sync::Arc;

/// Prime modulus of a field, together with the constants derived from it.
///
/// Cloning is cheap: the modulus is reference counted and shared by every element of its field.
#[derive(Clone)]
pub struct Modulus {
    inner: Arc<Inner>,
}

struct Inner {
    p: BigUint,
    bits: u64,
    byte_len: usize,
    word_len: usize,
    sqrt: Algorithm,
}

impl Modulus {
    /// Create a new modulus from an odd prime `p > 2`.
    ///
    /// Primality is not checked, but an even `p` or `p <= 2` is rejected.
    pub fn new(p: BigUint) -> Result<Self> {
        if p <= BigUint::from(2u8) || !p.bit(0) {
            return Err(Error::InvalidModulus);
        }

        let bits = p.bits();
        let sqrt = Algorithm::for_modulus(&p)?;

        Ok(Self {
            inner: Arc::new(Inner {
                byte_len: bits.div_ceil(8) as usize,
                word_len: bits.div_ceil(32) as usize,
                bits,
                sqrt,
                p,
            }),
        })
    }

    /// Create a new modulus from its big endian encoding.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// The prime `p`.
    pub fn value(&self) -> &BigUint {
        &self.inner.p
    }

    /// Bit length of `p`.
    pub fn bits(&self) -> u64 {
        self.inner.bits
    }

    /// Length in bytes of an encoded field element.
    pub fn byte_len(&self) -> usize {
        self.inner.byte_len
    }

    /// Number of 32-bit words needed to hold a field element.
    pub fn word_len(&self) -> usize {
        self.inner.word_len
    }

    /// The additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_canonical(self.clone(), BigUint::default())
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement::from_canonical(self.clone(), BigUint::from(1u8))
    }

    /// Create a field element from an integer, reducing it modulo `p`.
    pub fn element(&self, value: BigUint) -> FieldElement {
        let value = if value < self.inner.p {
            value
        } else {
            value % &self.inner.p
        };

        FieldElement::from_canonical(self.clone(), value)
    }

    /// Create a field element from a small integer.
    pub fn element_from_u64(&self, n: u64) -> FieldElement {
        self.element(BigUint::from(n))
    }

    /// Decode a field element from exactly [`Modulus::byte_len`] big endian bytes.
    ///
    /// Values which are not less than `p` are rejected rather than reduced.
    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        if bytes.len() != self.byte_len() {
            return Err(Error::InvalidLength {
                expected: self.byte_len(),
                actual: bytes.len(),
            });
        }

        let value = BigUint::from_bytes_be(bytes);

        if value >= self.inner.p {
            return Err(Error::NotInField);
        }

        Ok(FieldElement::from_canonical(self.clone(), value))
    }

    /// Create a field element from little endian 32-bit words, reducing it modulo `p`.
    pub fn element_from_words(&self, words: &[u32]) -> FieldElement {
        self.element(BigUint::from_slice(words))
    }

    pub(crate) fn sqrt_algorithm(&self) -> &Algorithm {
        &self.inner.sqrt
    }
}

impl PartialEq for Modulus {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.p == other.inner.p
    }
}

impl Eq for Modulus {}

impl Hash for Modulus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.p.hash(state);
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus(0x{:X})", self.inner.p)
    }
}
