//! Quadratic extension `Fp2 = Fp[u] / (u² + 2)`.

use super::{beta_pow, characteristic_power, pow_by_squaring};
use core::fmt;
use num_bigint::BigUint;
use num_traits::One;
use primefield::{Error, Field, FieldElement, Modulus, Result};

/// Element `c0 + c1·u` of the quadratic extension, where `u² = -2`.
///
/// # Panics
///
/// Arithmetic between elements over different prime fields panics.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fp2 {
    c0: FieldElement,
    c1: FieldElement,
}

impl Fp2 {
    /// Create `c0 + c1·u`, checking that both coefficients belong to the same prime field.
    pub fn new(c0: FieldElement, c1: FieldElement) -> Result<Self> {
        if c0.modulus() != c1.modulus() {
            return Err(Error::ModulusMismatch);
        }

        Ok(Self { c0, c1 })
    }

    /// Embed a prime field element.
    pub fn from_base(c0: FieldElement) -> Self {
        let c1 = c0.modulus().zero();
        Self { c0, c1 }
    }

    /// The additive identity over `modulus`.
    pub fn zero(modulus: &Modulus) -> Self {
        Self::from_base(modulus.zero())
    }

    /// The multiplicative identity over `modulus`.
    pub fn one(modulus: &Modulus) -> Self {
        Self::from_base(modulus.one())
    }

    /// The generator `u`.
    pub fn u(modulus: &Modulus) -> Self {
        Self {
            c0: modulus.zero(),
            c1: modulus.one(),
        }
    }

    /// `u^e`, for any exponent.
    pub(crate) fn u_pow(modulus: &Modulus, e: &BigUint) -> Self {
        // u^2k = β^k and u^(2k + 1) = β^k·u
        let half = e >> 1u32;

        if e.bit(0) {
            Self {
                c0: modulus.zero(),
                c1: beta_pow(modulus, &half),
            }
        } else {
            Self::from_base(beta_pow(modulus, &half))
        }
    }

    /// `u^-e`, for any exponent.
    pub(crate) fn u_pow_neg(modulus: &Modulus, e: &BigUint) -> Self {
        // u^(2(p - 1)) = 1
        let order = (modulus.value() - BigUint::one()) << 1u32;
        let e = e % &order;
        Self::u_pow(modulus, &((&order - e) % &order))
    }

    /// Coefficient of `1`.
    pub fn c0(&self) -> &FieldElement {
        &self.c0
    }

    /// Coefficient of `u`.
    pub fn c1(&self) -> &FieldElement {
        &self.c1
    }

    /// Modulus of the underlying prime field.
    pub fn modulus(&self) -> &Modulus {
        self.c0.modulus()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// Is this element one?
    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Subtract elements.
    pub fn subtract(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.subtract(&rhs.c0),
            c1: self.c1.subtract(&rhs.c1),
        }
    }

    /// Negate element.
    pub fn negate(&self) -> Self {
        Self {
            c0: self.c0.negate(),
            c1: self.c1.negate(),
        }
    }

    /// Double element.
    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Multiply elements.
    pub fn multiply(&self, rhs: &Self) -> Self {
        // (a0 + a1·u)(b0 + b1·u) = (a0·b0 - 2·a1·b1) + (a0·b1 + a1·b0)·u
        Self {
            c0: self
                .c0
                .multiply_minus_product(&rhs.c0, &self.c1.double(), &rhs.c1),
            c1: self.c0.multiply_plus_product(&rhs.c1, &self.c1, &rhs.c0),
        }
    }

    /// Square element.
    pub fn square(&self) -> Self {
        Self {
            c0: self.c0.square_minus_product(&self.c1.double(), &self.c1),
            c1: self.c0.multiply(&self.c1).double(),
        }
    }

    /// Multiply by the generator `u`.
    pub fn mul_by_u(&self) -> Self {
        Self {
            c0: self.c1.double().negate(),
            c1: self.c0.clone(),
        }
    }

    /// Multiply by an element of the prime field.
    pub fn mul_base(&self, rhs: &FieldElement) -> Self {
        Self {
            c0: self.c0.multiply(rhs),
            c1: self.c1.multiply(rhs),
        }
    }

    /// `c0 - c1·u`, which is also the image under the Frobenius map.
    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0.clone(),
            c1: self.c1.negate(),
        }
    }

    /// Compute the multiplicative inverse via the norm `c0² + 2·c1²`.
    pub fn invert(&self) -> Result<Self> {
        let norm = self.c0.square_plus_product(&self.c1.double(), &self.c1);
        let norm_inv = norm.invert()?;

        Ok(Self {
            c0: self.c0.multiply(&norm_inv),
            c1: self.c1.multiply(&norm_inv).negate(),
        })
    }

    /// Divide by `rhs`.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.invert()?))
    }

    /// Compute `self^exp`.
    pub fn pow(&self, exp: &BigUint) -> Self {
        pow_by_squaring(
            self,
            Self::one(self.modulus()),
            exp,
            Self::square,
            Self::multiply,
        )
    }

    /// Compute `self^p`.
    pub fn frobenius(&self) -> Self {
        self.frobenius_map(1)
    }

    /// Compute `self^(p^k)`.
    pub fn frobenius_map(&self, k: u32) -> Self {
        // (c1·u)^q = c1·u·β^((q - 1)/2)
        let q = characteristic_power(self.modulus(), k);
        let exp = (q - BigUint::one()) >> 1u32;

        Self {
            c0: self.c0.clone(),
            c1: self.c1.multiply(&beta_pow(self.modulus(), &exp)),
        }
    }

    /// Serialize as `c1 ‖ c0`, each a fixed-length big endian integer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c1.to_bytes();
        out.extend_from_slice(&self.c0.to_bytes());
        out
    }

    /// Deserialize the encoding produced by [`Fp2::to_bytes`].
    pub fn from_bytes(modulus: &Modulus, bytes: &[u8]) -> Result<Self> {
        let len = modulus.byte_len();
        if bytes.len() != 2 * len {
            return Err(Error::InvalidLength {
                expected: 2 * len,
                actual: bytes.len(),
            });
        }

        let (hi, lo) = bytes.split_at(len);
        Ok(Self {
            c0: modulus.element_from_bytes(lo)?,
            c1: modulus.element_from_bytes(hi)?,
        })
    }
}

impl Field for Fp2 {
    fn zero(&self) -> Self {
        Fp2::zero(self.modulus())
    }

    fn one(&self) -> Self {
        Fp2::one(self.modulus())
    }

    fn is_zero(&self) -> bool {
        Fp2::is_zero(self)
    }

    fn is_one(&self) -> bool {
        Fp2::is_one(self)
    }

    fn same_field(&self, other: &Self) -> bool {
        self.modulus() == other.modulus()
    }

    fn add(&self, rhs: &Self) -> Self {
        Fp2::add(self, rhs)
    }

    fn subtract(&self, rhs: &Self) -> Self {
        Fp2::subtract(self, rhs)
    }

    fn multiply(&self, rhs: &Self) -> Self {
        Fp2::multiply(self, rhs)
    }

    fn negate(&self) -> Self {
        Fp2::negate(self)
    }

    fn invert(&self) -> Result<Self> {
        Fp2::invert(self)
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn double(&self) -> Self {
        Fp2::double(self)
    }

    fn field_bits(&self) -> u64 {
        self.modulus().bits()
    }

    fn word_len(&self) -> usize {
        2 * self.modulus().word_len()
    }

    fn to_words(&self) -> Vec<u32> {
        let mut words = self.c0.to_words();
        words.extend(self.c1.to_words());
        words
    }

    fn from_words(&self, words: &[u32]) -> Self {
        let (lo, hi) = words.split_at(self.modulus().word_len());
        Self {
            c0: self.modulus().element_from_words(lo),
            c1: self.modulus().element_from_words(hi),
        }
    }
}

primefield::impl_field_ops!(Fp2);

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2(0x{:X} + 0x{:X}·u)", self.c0, self.c1)
    }
}

impl fmt::LowerHex for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}{:x}", self.c1, self.c0)
    }
}

impl fmt::UpperHex for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}{:X}", self.c1, self.c0)
    }
}

#[cfg(test)]
mod tests {
    use super::Fp2;
    use num_bigint::BigUint;
    use primefield::{Error, Modulus};

    // 1063 ≡ 7 mod 8, so -2 is a non-residue
    fn m() -> Modulus {
        Modulus::new(BigUint::from(1063u32)).unwrap()
    }

    fn fp2(m: &Modulus, c0: u64, c1: u64) -> Fp2 {
        Fp2::new(m.element_from_u64(c0), m.element_from_u64(c1)).unwrap()
    }

    #[test]
    fn u_squared_is_minus_two() {
        let m = m();
        let u = Fp2::u(&m);
        assert_eq!(u.square(), Fp2::from_base(m.element_from_u64(1061)));
        assert_eq!(u.multiply(&u), u.square());
        assert_eq!(Fp2::one(&m).mul_by_u(), u);
    }

    #[test]
    fn u_powers() {
        let m = m();
        let u = Fp2::u(&m);

        for e in [0u32, 1, 2, 3, 7, 530, 1061, 2124, 2125, 5000] {
            let e = BigUint::from(e);
            assert_eq!(Fp2::u_pow(&m, &e), u.pow(&e), "e={e}");
            assert!(Fp2::u_pow(&m, &e).multiply(&Fp2::u_pow_neg(&m, &e)).is_one());
        }
    }

    #[test]
    fn inverse() {
        let m = m();
        let a = fp2(&m, 17, 1000);
        assert!(a.multiply(&a.invert().unwrap()).is_one());
        assert_eq!(Fp2::zero(&m).invert().unwrap_err(), Error::NotInvertible);
    }

    #[test]
    fn frobenius_is_conjugation() {
        let m = m();
        let a = fp2(&m, 123, 456);
        assert_eq!(a.frobenius(), a.conjugate());
        assert_eq!(a.frobenius(), a.pow(&BigUint::from(1063u32)));
        assert_eq!(a.frobenius_map(2), a);
    }

    #[test]
    fn mismatched_moduli() {
        let m = m();
        let other = Modulus::new(BigUint::from(1051u32)).unwrap();
        assert_eq!(
            Fp2::new(m.one(), other.one()).unwrap_err(),
            Error::ModulusMismatch
        );
    }

    #[test]
    fn bytes_put_u_coefficient_first() {
        let m = m();
        let a = fp2(&m, 0x0102, 0x0304);
        assert_eq!(a.to_bytes(), [0x03, 0x04, 0x01, 0x02]);
        assert_eq!(Fp2::from_bytes(&m, &a.to_bytes()).unwrap(), a);
        assert_eq!(format!("{a:x}"), "03040102");
    }
}
