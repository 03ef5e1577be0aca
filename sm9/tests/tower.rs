//! Extension tower over the SM9 prime.

use num_bigint::BigUint;
use proptest::prelude::*;
use sm9::{
    Fp2, Fp4, Fp12, Sm9Params,
    primefield::{Error, Modulus},
};

fn modulus() -> Modulus {
    Sm9Params::standard().modulus().clone()
}

prop_compose! {
    fn fp2()(c0 in any::<[u8; 32]>(), c1 in any::<[u8; 32]>()) -> Fp2 {
        let m = modulus();
        Fp2::new(
            m.element(BigUint::from_bytes_be(&c0)),
            m.element(BigUint::from_bytes_be(&c1)),
        )
        .unwrap()
    }
}

prop_compose! {
    fn fp4()(c0 in fp2(), c1 in fp2()) -> Fp4 {
        Fp4::new(c0, c1).unwrap()
    }
}

prop_compose! {
    fn fp12()(c0 in fp4(), c1 in fp4(), c2 in fp4()) -> Fp12 {
        Fp12::new(c0, c1, c2).unwrap()
    }
}

#[test]
fn tower_relations() {
    let m = modulus();

    let u = Fp2::u(&m);
    assert_eq!(u.square(), Fp2::from_base(m.element_from_u64(2).negate()));

    let v = Fp4::one(&m).mul_by_v();
    assert_eq!(v.square(), Fp4::from_fp2(u.clone()));

    let w = Fp12::new(Fp4::zero(&m), Fp4::one(&m), Fp4::zero(&m)).unwrap();
    assert_eq!(w.square().multiply(&w), Fp12::from_fp4(v));
}

#[test]
fn mixed_moduli_are_rejected() {
    let m = modulus();
    let other = Modulus::new(BigUint::from(1063u32)).unwrap();

    assert!(Fp2::new(m.one(), other.one()).is_err());
    assert!(Fp4::new(Fp2::one(&m), Fp2::one(&other)).is_err());
    assert!(Fp12::new(Fp4::one(&m), Fp4::one(&m), Fp4::zero(&other)).is_err());

    let one = Fp2::one(&m);
    assert_eq!(
        Fp12::from_sparse_line(one.clone(), one.clone(), Fp2::one(&other)).unwrap_err(),
        Error::ModulusMismatch
    );
    assert_eq!(
        Fp12::from_sparse_line(one.clone(), Fp2::one(&other), one).unwrap_err(),
        Error::ModulusMismatch
    );
}

#[test]
fn frobenius_fixes_the_base_field() {
    let m = modulus();
    let a = Fp12::from_fp4(Fp4::from_fp2(Fp2::from_base(m.element_from_u64(0xdead_beef))));
    assert_eq!(a.frobenius(), a);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn fp2_field_laws(a in fp2(), b in fp2(), c in fp2()) {
        prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        prop_assert_eq!(a.multiply(&b.add(&c)), a.multiply(&b).add(&a.multiply(&c)));
        prop_assert_eq!(a.square(), a.multiply(&a));
        prop_assert_eq!(a.frobenius(), a.pow(Sm9Params::standard().modulus().value()));

        if !a.is_zero() {
            prop_assert!(a.invert().unwrap().multiply(&a).is_one());
            prop_assert_eq!(b.divide(&a).unwrap().multiply(&a), b);
        }
    }

    #[test]
    fn fp4_field_laws(a in fp4(), b in fp4()) {
        prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        prop_assert_eq!(a.square(), a.multiply(&a));
        prop_assert_eq!(a.add(&b).subtract(&b), a.clone());
        prop_assert_eq!(a.frobenius(), a.pow(Sm9Params::standard().modulus().value()));
        prop_assert_eq!(a.frobenius_map(4), a.clone());

        if !a.is_zero() {
            prop_assert!(a.invert().unwrap().multiply(&a).is_one());
        }
    }

    #[test]
    fn fp12_field_laws(a in fp12(), b in fp12()) {
        prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        prop_assert_eq!(a.square(), a.multiply(&a));
        prop_assert_eq!(a.frobenius(), a.pow(Sm9Params::standard().modulus().value()));
        prop_assert_eq!(a.frobenius_map(2), a.frobenius().frobenius());
        prop_assert_eq!(a.frobenius_map(12), a.clone());

        if !a.is_zero() {
            prop_assert!(a.invert().unwrap().multiply(&a).is_one());
        }
    }
}
