//! Quartic extension `Fp4 = Fp2[v] / (v² - u)`.

use super::{Fp2, characteristic_power, pow_by_squaring};
use core::fmt;
use num_bigint::BigUint;
use num_traits::One;
use primefield::{Error, Modulus, Result};

/// Element `c0 + c1·v` of the quartic extension, where `v² = u`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fp4 {
    c0: Fp2,
    c1: Fp2,
}

impl Fp4 {
    /// Create `c0 + c1·v`, checking that both coefficients share a prime field.
    pub fn new(c0: Fp2, c1: Fp2) -> Result<Self> {
        if c0.modulus() != c1.modulus() {
            return Err(Error::ModulusMismatch);
        }

        Ok(Self { c0, c1 })
    }

    /// `c0 + c1·v`, panicking if the coefficients belong to different prime fields.
    pub(crate) fn from_coefficients(c0: Fp2, c1: Fp2) -> Self {
        assert!(c0.modulus() == c1.modulus(), "coefficients of different prime fields");
        Self { c0, c1 }
    }

    /// Embed an element of the quadratic extension.
    pub fn from_fp2(c0: Fp2) -> Self {
        let c1 = Fp2::zero(c0.modulus());
        Self { c0, c1 }
    }

    /// The additive identity over `modulus`.
    pub fn zero(modulus: &Modulus) -> Self {
        Self::from_fp2(Fp2::zero(modulus))
    }

    /// The multiplicative identity over `modulus`.
    pub fn one(modulus: &Modulus) -> Self {
        Self::from_fp2(Fp2::one(modulus))
    }

    /// `v^e`, for any exponent.
    pub(crate) fn v_pow(modulus: &Modulus, e: &BigUint) -> Self {
        // v^(4(p - 1)) = 1, v^2k = u^k and v^(2k + 1) = u^k·v
        let order = (modulus.value() - BigUint::one()) << 2u32;
        let e = e % order;
        let half = &e >> 1u32;

        if e.bit(0) {
            Self {
                c0: Fp2::zero(modulus),
                c1: Fp2::u_pow(modulus, &half),
            }
        } else {
            Self::from_fp2(Fp2::u_pow(modulus, &half))
        }
    }

    /// Coefficient of `1`.
    pub fn c0(&self) -> &Fp2 {
        &self.c0
    }

    /// Coefficient of `v`.
    pub fn c1(&self) -> &Fp2 {
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

    /// Multiply elements (Karatsuba).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let t0 = self.c0.multiply(&rhs.c0);
        let t1 = self.c1.multiply(&rhs.c1);
        let cross = self
            .c0
            .add(&self.c1)
            .multiply(&rhs.c0.add(&rhs.c1))
            .subtract(&t0)
            .subtract(&t1);

        Self {
            c0: t0.add(&t1.mul_by_u()),
            c1: cross,
        }
    }

    /// Square element.
    pub fn square(&self) -> Self {
        let t0 = self.c0.square();
        let t1 = self.c1.square();

        Self {
            c0: t0.add(&t1.mul_by_u()),
            c1: self.c0.multiply(&self.c1).double(),
        }
    }

    /// Multiply by the generator `v`.
    pub fn mul_by_v(&self) -> Self {
        Self {
            c0: self.c1.mul_by_u(),
            c1: self.c0.clone(),
        }
    }

    /// Multiply by an element of the quadratic extension.
    pub fn mul_fp2(&self, rhs: &Fp2) -> Self {
        Self {
            c0: self.c0.multiply(rhs),
            c1: self.c1.multiply(rhs),
        }
    }

    /// Compute the multiplicative inverse as `(c0 - c1·v) / (c0² - u·c1²)`.
    pub fn invert(&self) -> Result<Self> {
        let norm = self.c0.square().subtract(&self.c1.square().mul_by_u());
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
        let q = characteristic_power(self.modulus(), k);
        let c1 = Self::from_fp2(self.c1.frobenius_map(k))
            .multiply(&Self::v_pow(self.modulus(), &q));

        Self::from_fp2(self.c0.frobenius_map(k)).add(&c1)
    }

    /// Serialize as `c1 ‖ c0`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c1.to_bytes();
        out.extend_from_slice(&self.c0.to_bytes());
        out
    }

    /// Deserialize the encoding produced by [`Fp4::to_bytes`].
    pub fn from_bytes(modulus: &Modulus, bytes: &[u8]) -> Result<Self> {
        let len = 4 * modulus.byte_len();
        if bytes.len() != len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: bytes.len(),
            });
        }

        let (hi, lo) = bytes.split_at(len / 2);
        Ok(Self {
            c0: Fp2::from_bytes(modulus, lo)?,
            c1: Fp2::from_bytes(modulus, hi)?,
        })
    }
}

primefield::impl_field_ops!(Fp4);

impl fmt::Debug for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fp4")
            .field("c0", &self.c0)
            .field("c1", &self.c1)
            .finish()
    }
}

impl fmt::LowerHex for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}{:x}", self.c1, self.c0)
    }
}

impl fmt::UpperHex for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}{:X}", self.c1, self.c0)
    }
}

#[cfg(test)]
mod tests {
    use super::Fp4;
    use crate::Fp2;
    use num_bigint::BigUint;
    use primefield::Modulus;

    // 181 ≡ 5 mod 8, so u is not a square in Fp2
    fn m() -> Modulus {
        Modulus::new(BigUint::from(181u32)).unwrap()
    }

    fn fp4(m: &Modulus, c: [u64; 4]) -> Fp4 {
        let fp2 = |a, b| Fp2::new(m.element_from_u64(a), m.element_from_u64(b)).unwrap();
        Fp4::new(fp2(c[0], c[1]), fp2(c[2], c[3])).unwrap()
    }

    #[test]
    fn v_squared_is_u() {
        let m = m();
        let v = Fp4::one(&m).mul_by_v();
        assert_eq!(v, fp4(&m, [0, 0, 1, 0]));
        assert_eq!(v.square(), Fp4::from_fp2(Fp2::u(&m)));
    }

    #[test]
    fn multiply_matches_schoolbook() {
        let m = m();
        let a = fp4(&m, [1, 2, 3, 4]);
        let b = fp4(&m, [100, 99, 5, 17]);

        let c0 = a.c0().multiply(b.c0()).add(&a.c1().multiply(b.c1()).mul_by_u());
        let c1 = a.c0().multiply(b.c1()).add(&a.c1().multiply(b.c0()));
        assert_eq!(a.multiply(&b), Fp4::new(c0, c1).unwrap());
        assert_eq!(a.square(), a.multiply(&a));
    }

    #[test]
    fn inverse() {
        let m = m();
        let a = fp4(&m, [7, 0, 3, 180]);
        assert!(a.multiply(&a.invert().unwrap()).is_one());
        assert!(Fp4::zero(&m).invert().is_err());
    }

    #[test]
    fn frobenius_matches_pow() {
        let m = m();
        let a = fp4(&m, [11, 22, 33, 44]);
        let p = BigUint::from(181u32);

        assert_eq!(a.frobenius(), a.pow(&p));
        assert_eq!(a.frobenius_map(2), a.frobenius().frobenius());
        assert_eq!(a.frobenius_map(4), a);
    }

    #[test]
    fn hex_formatting() {
        let a = fp4(&m(), [1, 0xb5 - 1, 0x0c, 0xad]);
        assert_eq!(format!("{a:x}"), "ad0cb401");
        assert_eq!(format!("{a:X}"), "AD0CB401");
    }
}
