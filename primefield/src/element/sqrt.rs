//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::{Error, FieldElement, Result};
use num_bigint::BigUint;

/// Upper bound on the candidates tried when searching for a quadratic non-residue.
const NON_RESIDUE_SEARCH_LIMIT: u32 = 1 << 16;

/// Square root algorithms, together with the exponents they need.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Algorithm {
    /// Atkin's algorithm for `q ≡ 5 (mod 8)`.
    Atkin {
        /// `(q - 5) / 8`
        exp: BigUint,
        /// `2^((q - 5) / 8)`
        t: BigUint,
    },

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks {
        /// `(q + 1) / 4`
        exp: BigUint,
    },

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks {
        /// `s` such that `q - 1 = 2^s * t` with `t` odd.
        s: u64,
        /// `t`
        t: BigUint,
        /// A primitive `2^s`-th root of unity: `z^t` for a non-residue `z`.
        root_of_unity: BigUint,
    },
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    pub(crate) fn for_modulus(p: &BigUint) -> Result<Self> {
        let algorithm = if mod_residue(p, 4) == 3 {
            Self::Shanks {
                exp: (p + 1u32) >> 2,
            }
        } else if mod_residue(p, 8) == 5 {
            let exp: BigUint = (p - 5u32) >> 3;
            let t = BigUint::from(2u8).modpow(&exp, p);
            Self::Atkin { exp, t }
        } else {
            let p_minus_1: BigUint = p - 1u32;
            let s = p_minus_1.trailing_zeros().ok_or(Error::InvalidModulus)?;
            let t = &p_minus_1 >> s;
            let half = &p_minus_1 >> 1;

            let z = (2..NON_RESIDUE_SEARCH_LIMIT)
                .map(BigUint::from)
                .find(|z| z.modpow(&half, p) == p_minus_1)
                .ok_or(Error::InvalidModulus)?;

            Self::TonelliShanks {
                s,
                root_of_unity: z.modpow(&t, p),
                t,
            }
        };

        log::trace!("square root algorithm for {p:#x}: {}", algorithm.name());
        Ok(algorithm)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Atkin { .. } => "atkin",
            Self::Shanks { .. } => "shanks",
            Self::TonelliShanks { .. } => "tonelli-shanks",
        }
    }
}

impl FieldElement {
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// The candidate root is verified by squaring before it is returned.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = match self.modulus().sqrt_algorithm() {
            Algorithm::Atkin { exp, t } => self.sqrt_atkin(exp, t),
            Algorithm::Shanks { exp } => self.pow(exp),
            Algorithm::TonelliShanks {
                s,
                t,
                root_of_unity,
            } => self.sqrt_tonelli_shanks(*s, t, root_of_unity)?,
        };

        (candidate.square() == *self).then_some(candidate)
    }

    /// Atkin's algorithm for `q ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkin(&self, exp: &BigUint, t: &BigUint) -> Self {
        let a1 = self.pow(exp);
        let b = a1.multiply(&self.modulus().element(t.clone()));
        let ab = self.multiply(&b);
        let i = ab.multiply(&b).double();
        ab.multiply(&i.subtract(&self.modulus().one()))
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// Returns `None` as soon as `self` is detected to be a non-residue.
    fn sqrt_tonelli_shanks(&self, s: u64, t: &BigUint, root_of_unity: &BigUint) -> Option<Self> {
        if self.is_zero() {
            return Some(self.clone());
        }

        let modulus = self.modulus();
        let mut m = s;
        let mut c = modulus.element(root_of_unity.clone());
        let mut b = self.pow(t);
        let mut x = self.pow(&((t + 1u32) >> 1));

        while !b.is_one() {
            // Least i with b^(2^i) = 1.
            let mut i = 0;
            let mut b2i = b.clone();
            while !b2i.is_one() {
                b2i = b2i.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut d = c;
            for _ in 0..(m - i - 1) {
                d = d.square();
            }

            m = i;
            c = d.square();
            b = b.multiply(&c);
            x = x.multiply(&d);
        }

        Some(x)
    }
}

/// Compute residue classes of the modulus for selecting particular square root algorithms.
fn mod_residue(p: &BigUint, n: u32) -> u32 {
    debug_assert!(n.is_power_of_two());
    p.iter_u32_digits().next().unwrap_or(0) & (n - 1)
}

#[cfg(test)]
mod tests {
    use super::Algorithm;
    use crate::{FieldElement, Modulus};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use num_traits::One;

    /// Is `a` a quadratic residue modulo `p`, per Euler's criterion?
    fn is_square(a: &FieldElement) -> bool {
        let p = a.modulus().value();
        a.is_zero() || a.value().modpow(&((p - 1u32) >> 1), p).is_one()
    }

    /// Generic sqrt test.
    fn sqrt_test(m: &Modulus) {
        for n in [0u64, 1, 4, 9, 16, 25, 36, 49, 64] {
            let fe = m.element_from_u64(n);
            let root = fe.sqrt().unwrap();
            assert_eq!(root.square(), fe);
        }

        // Exhaust a window of small values: roots exist exactly for residues.
        for n in 2..200u64 {
            let fe = m.element_from_u64(n);
            match fe.sqrt() {
                Some(root) => assert_eq!(root.square(), fe),
                None => assert!(!is_square(&fe)),
            }
        }
    }

    #[test]
    fn shanks() {
        let m = Modulus::new(BigUint::from(1063u32)).unwrap();
        assert!(matches!(m.sqrt_algorithm(), Algorithm::Shanks { .. }));
        sqrt_test(&m);
    }

    #[test]
    fn atkin() {
        // SM9 base field
        let m = Modulus::from_be_bytes(&hex!(
            "B640000002A3A6F1D603AB4FF58EC74521F2934B1A7AEEDBE56F9B27E351457D"
        ))
        .unwrap();
        assert!(matches!(m.sqrt_algorithm(), Algorithm::Atkin { .. }));
        sqrt_test(&m);
    }

    #[test]
    fn tonelli_shanks() {
        for p in [17u32, 41, 73, 97, 7681] {
            let m = Modulus::new(BigUint::from(p)).unwrap();
            assert!(matches!(m.sqrt_algorithm(), Algorithm::TonelliShanks { .. }));

            for n in 0..u64::from(p) {
                let fe = m.element_from_u64(n);
                match fe.sqrt() {
                    Some(root) => assert_eq!(root.square(), fe),
                    None => assert!(!is_square(&fe)),
                }
            }
        }
    }

    #[test]
    fn non_residue_has_no_root() {
        // -1 is a non-residue whenever p ≡ 3 (mod 4)
        let m = Modulus::new(BigUint::from(1063u32)).unwrap();
        assert!(m.one().negate().sqrt().is_none());
    }
}
