//! Dodecic extension `Fp12 = Fp4[w] / (w³ - v)`, the pairing target field.

use super::{Fp2, Fp4, characteristic_power, pow_by_squaring};
use core::fmt;
use num_bigint::BigUint;
use primefield::{Error, Modulus, Result};

/// Element `c0 + c1·w + c2·w²` of the dodecic extension, where `w³ = v`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fp12 {
    c0: Fp4,
    c1: Fp4,
    c2: Fp4,
}

impl Fp12 {
    /// Create `c0 + c1·w + c2·w²`, checking that all coefficients share a prime field.
    pub fn new(c0: Fp4, c1: Fp4, c2: Fp4) -> Result<Self> {
        if c0.modulus() != c1.modulus() || c0.modulus() != c2.modulus() {
            return Err(Error::ModulusMismatch);
        }

        Ok(Self { c0, c1, c2 })
    }

    /// Embed an element of the quartic extension.
    pub fn from_fp4(c0: Fp4) -> Self {
        let zero = Fp4::zero(c0.modulus());
        Self {
            c0,
            c1: zero.clone(),
            c2: zero,
        }
    }

    /// Assemble the sparse value `a + b·v + c·w²` produced by evaluating a line function,
    /// checking that all coefficients share a prime field.
    pub fn from_sparse_line(a: Fp2, b: Fp2, c: Fp2) -> Result<Self> {
        if a.modulus() != b.modulus() || a.modulus() != c.modulus() {
            return Err(Error::ModulusMismatch);
        }

        Ok(Self::sparse_line(a, b, c))
    }

    /// `a + b·v + c·w²`, panicking if the coefficients belong to different prime fields.
    pub(crate) fn sparse_line(a: Fp2, b: Fp2, c: Fp2) -> Self {
        assert!(a.modulus() == c.modulus(), "coefficients of different prime fields");
        let modulus = a.modulus().clone();

        Self {
            c0: Fp4::from_coefficients(a, b),
            c1: Fp4::zero(&modulus),
            c2: Fp4::from_fp2(c),
        }
    }

    /// The additive identity over `modulus`.
    pub fn zero(modulus: &Modulus) -> Self {
        Self::from_fp4(Fp4::zero(modulus))
    }

    /// The multiplicative identity over `modulus`.
    pub fn one(modulus: &Modulus) -> Self {
        Self::from_fp4(Fp4::one(modulus))
    }

    /// Coefficient of `1`.
    pub fn c0(&self) -> &Fp4 {
        &self.c0
    }

    /// Coefficient of `w`.
    pub fn c1(&self) -> &Fp4 {
        &self.c1
    }

    /// Coefficient of `w²`.
    pub fn c2(&self) -> &Fp4 {
        &self.c2
    }

    /// Modulus of the underlying prime field.
    pub fn modulus(&self) -> &Modulus {
        self.c0.modulus()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    /// Is this element one?
    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
            c2: self.c2.add(&rhs.c2),
        }
    }

    /// Subtract elements.
    pub fn subtract(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.subtract(&rhs.c0),
            c1: self.c1.subtract(&rhs.c1),
            c2: self.c2.subtract(&rhs.c2),
        }
    }

    /// Negate element.
    pub fn negate(&self) -> Self {
        Self {
            c0: self.c0.negate(),
            c1: self.c1.negate(),
            c2: self.c2.negate(),
        }
    }

    /// Double element.
    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
            c2: self.c2.double(),
        }
    }

    /// Multiply elements.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        let (b0, b1, b2) = (&rhs.c0, &rhs.c1, &rhs.c2);

        // w³ = v folds the w³ and w⁴ terms back into c0 and c1
        let c0 = a0
            .multiply(b0)
            .add(&a1.multiply(b2).add(&a2.multiply(b1)).mul_by_v());
        let c1 = a0
            .multiply(b1)
            .add(&a1.multiply(b0))
            .add(&a2.multiply(b2).mul_by_v());
        let c2 = a0.multiply(b2).add(&a1.multiply(b1)).add(&a2.multiply(b0));

        Self { c0, c1, c2 }
    }

    /// Square element.
    pub fn square(&self) -> Self {
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);

        Self {
            c0: a0.square().add(&a1.multiply(a2).double().mul_by_v()),
            c1: a0.multiply(a1).double().add(&a2.square().mul_by_v()),
            c2: a1.square().add(&a0.multiply(a2).double()),
        }
    }

    /// Compute the multiplicative inverse, reducing to a single inversion in [`Fp4`].
    pub fn invert(&self) -> Result<Self> {
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);

        let c0 = a0.square().subtract(&a1.multiply(a2).mul_by_v());
        let c1 = a2.square().mul_by_v().subtract(&a0.multiply(a1));
        let c2 = a1.square().subtract(&a0.multiply(a2));

        let t = a0
            .multiply(&c0)
            .add(&a2.multiply(&c1).add(&a1.multiply(&c2)).mul_by_v());
        let t_inv = t.invert()?;

        Ok(Self {
            c0: c0.multiply(&t_inv),
            c1: c1.multiply(&t_inv),
            c2: c2.multiply(&t_inv),
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
        let modulus = self.modulus();
        let q = characteristic_power(modulus, k);
        let mut out = [
            Fp4::zero(modulus),
            Fp4::zero(modulus),
            Fp4::zero(modulus),
        ];

        // (c_j·w^j)^q = c_j^q·v^m·w^r where j·q = 3m + r
        for (j, c) in [&self.c0, &self.c1, &self.c2].into_iter().enumerate() {
            let jq = &q * (j as u32);
            let r = (&jq % 3u32).to_u32_digits().first().copied().unwrap_or(0);
            let m = (jq - r) / 3u32;

            let term = c.frobenius_map(k).multiply(&Fp4::v_pow(modulus, &m));
            out[r as usize] = out[r as usize].add(&term);
        }

        let [c0, c1, c2] = out;
        Self { c0, c1, c2 }
    }

    /// Serialize the twelve prime field coefficients, highest power first.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c2.to_bytes();
        out.extend_from_slice(&self.c1.to_bytes());
        out.extend_from_slice(&self.c0.to_bytes());
        out
    }

    /// Deserialize the encoding produced by [`Fp12::to_bytes`].
    pub fn from_bytes(modulus: &Modulus, bytes: &[u8]) -> Result<Self> {
        let len = 12 * modulus.byte_len();
        if bytes.len() != len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: bytes.len(),
            });
        }

        let third = len / 3;
        Ok(Self {
            c2: Fp4::from_bytes(modulus, &bytes[..third])?,
            c1: Fp4::from_bytes(modulus, &bytes[third..2 * third])?,
            c0: Fp4::from_bytes(modulus, &bytes[2 * third..])?,
        })
    }
}

primefield::impl_field_ops!(Fp12);

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fp12")
            .field("c0", &self.c0)
            .field("c1", &self.c1)
            .field("c2", &self.c2)
            .finish()
    }
}

impl fmt::LowerHex for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}{:x}{:x}", self.c2, self.c1, self.c0)
    }
}

impl fmt::UpperHex for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}{:X}{:X}", self.c2, self.c1, self.c0)
    }
}
