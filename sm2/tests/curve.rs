//! SM2 curve arithmetic against known vectors.

use hex_literal::hex;
use proptest::prelude::*;
use sm2::weierstrass::{
    CoordinateSystem, DoubleAndAddMultiplier, FixedPointCombMultiplier, Multiplier,
    num_bigint::{BigInt, BigUint, Sign},
};

const SECRET_KEY: [u8; 32] =
    hex!("4BB8DF505722299592CBED4283B354A13FF5D3FEEB3A0660C5BDF3C87C559499");

const PUBLIC_KEY: [u8; 65] = hex!(
    "0408D77AE04C01CC4C1104360DD8AF6B6F7DF334283D7C1A6AFD5652407B87BEE5014E2A57C36C150D16324DC664E31E6432359609C4E79847A5B161C8C7364C8A"
);

const PUBLIC_KEY_COMPRESSED: [u8; 33] =
    hex!("0208D77AE04C01CC4C1104360DD8AF6B6F7DF334283D7C1A6AFD5652407B87BEE5");

/// 2G
const DOUBLE_GENERATOR: [u8; 65] = hex!(
    "0456CEFD60D7C87C000D58EF57FA73BA4D9C0DFA08C08A7331495C2E1DA3F2BD5231B7E7E6CC8189F668535CE0F8EAF1BD6DE84C182F6C8E716F780D3A970A23C3"
);

fn scalar(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

#[test]
fn public_key_from_secret_key() {
    let g = sm2::generator();
    let d = scalar(&SECRET_KEY);

    let expected = DoubleAndAddMultiplier.multiply(&g, &d).unwrap();
    assert_eq!(expected.to_encoded_point(false), PUBLIC_KEY);

    let comb = FixedPointCombMultiplier.multiply(&g, &d).unwrap();
    assert_eq!(comb, expected);
    assert_eq!(comb.to_encoded_point(false), PUBLIC_KEY);
    assert_eq!(comb.to_encoded_point(true), PUBLIC_KEY_COMPRESSED);
}

#[test]
fn decode_public_key() {
    let curve = sm2::curve();
    let uncompressed = curve.decode_point(&PUBLIC_KEY).unwrap();
    let compressed = curve.decode_point(&PUBLIC_KEY_COMPRESSED).unwrap();

    assert_eq!(uncompressed, compressed);
    assert!(uncompressed.is_valid());
    assert_eq!(uncompressed.to_encoded_point(false), PUBLIC_KEY);

    let mut hybrid = PUBLIC_KEY;
    hybrid[0] = 0x06;
    assert_eq!(uncompressed.to_hybrid_encoded_point(), hybrid);
    assert_eq!(curve.decode_point(&hybrid).unwrap(), uncompressed);
}

#[test]
fn tampered_public_key() {
    let curve = sm2::curve();
    let mut bytes = PUBLIC_KEY;
    bytes[64] ^= 1;
    assert!(curve.decode_point(&bytes).is_err());
}

#[test]
fn generator_vectors() {
    let g = sm2::generator();
    let n = BigInt::from_bytes_be(Sign::Plus, &sm2::ORDER);

    assert_eq!(g.twice().to_encoded_point(false), DOUBLE_GENERATOR);
    assert_eq!(g.add(&g).to_encoded_point(false), DOUBLE_GENERATOR);
    assert!(g.multiply(&n).is_infinity());
    assert_eq!(g.multiply(&(&n - 1)), g.negate());
    assert_eq!(
        FixedPointCombMultiplier.multiply(&g, &(&n - 1)).unwrap(),
        g.negate()
    );
}

#[test]
fn coordinate_systems_agree() {
    let d = scalar(&SECRET_KEY);
    let (x, y) = sm2::GENERATOR;

    for coordinates in [
        CoordinateSystem::Affine,
        CoordinateSystem::Homogeneous,
        CoordinateSystem::Jacobian,
        CoordinateSystem::JacobianModified,
    ] {
        let curve = sm2::curve().with_coordinates(coordinates);
        let g = curve
            .create_point_from_integers(BigUint::from_bytes_be(&x), BigUint::from_bytes_be(&y))
            .unwrap();

        let p = g.multiply(&d);
        assert_eq!(p.to_encoded_point(false), PUBLIC_KEY, "{coordinates:?}");
        assert!(p.satisfies_curve_equation());
        assert_eq!(g.three_times(), g.twice().add(&g));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn comb_matches_double_and_add(bytes in any::<[u8; 32]>(), negative in any::<bool>()) {
        let g = sm2::generator();
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let k = BigInt::from_bytes_be(sign, &bytes);

        prop_assert_eq!(
            FixedPointCombMultiplier.multiply(&g, &k).unwrap(),
            DoubleAndAddMultiplier.multiply(&g, &k).unwrap()
        );
    }

    #[test]
    fn encoding_round_trip(bytes in any::<[u8; 32]>(), compress in any::<bool>()) {
        let curve = sm2::curve();
        let p = sm2::generator().multiply(&scalar(&bytes));
        let encoded = p.to_encoded_point(compress);
        prop_assert_eq!(curve.decode_point(&encoded).unwrap(), p);
    }
}
