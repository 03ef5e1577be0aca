//! Extension field tower over the SM9 prime field.
//!
//! ```text
//! Fp2  = Fp[u]  / (u² + 2)
//! Fp4  = Fp2[v] / (v² - u)
//! Fp12 = Fp4[w] / (w³ - v)
//! ```
//!
//! Frobenius constants are derived from the modulus each time a map is applied. The tower works
//! over any prime for which `-2` is a quadratic non-residue.

mod fp12;
mod fp2;
mod fp4;

pub use self::{fp2::Fp2, fp4::Fp4, fp12::Fp12};

use num_bigint::BigUint;
use num_traits::One;
use primefield::{FieldElement, Modulus};

/// `p^k`, the order of the field the `k`-th power Frobenius map fixes.
fn characteristic_power(modulus: &Modulus, k: u32) -> BigUint {
    modulus.value().pow(k)
}

/// The non-residue `β = -2` defining `u² = β`.
fn beta(modulus: &Modulus) -> FieldElement {
    modulus.element_from_u64(2).negate()
}

/// `β^e` with the exponent reduced modulo `p - 1`.
fn beta_pow(modulus: &Modulus, e: &BigUint) -> FieldElement {
    let order = modulus.value() - BigUint::one();
    beta(modulus).pow(&(e % order))
}

/// Square-and-multiply over the bits of `exp`, most significant first.
fn pow_by_squaring<T: Clone>(
    base: &T,
    one: T,
    exp: &BigUint,
    square: impl Fn(&T) -> T,
    multiply: impl Fn(&T, &T) -> T,
) -> T {
    let mut acc = one;
    for i in (0..exp.bits()).rev() {
        acc = square(&acc);
        if exp.bit(i) {
            acc = multiply(&acc, base);
        }
    }
    acc
}
