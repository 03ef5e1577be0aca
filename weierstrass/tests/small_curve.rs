//! Arithmetic on the toy curve `y² = x³ + 4x + 20` over `GF(1063)`.
//!
//! The base point `G = (1, 5)` has order 280; the curve has 1120 points.

use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;
use weierstrass::{CoordinateSystem, Curve, Error, FieldElement, Point};

const ALL_COORDINATES: [CoordinateSystem; 4] = [
    CoordinateSystem::Affine,
    CoordinateSystem::Homogeneous,
    CoordinateSystem::Jacobian,
    CoordinateSystem::JacobianModified,
];

fn curve(coordinates: CoordinateSystem) -> Curve<FieldElement> {
    Curve::from_params(
        BigUint::from(1063u32),
        BigUint::from(4u32),
        BigUint::from(20u32),
        Some(BigUint::from(280u32)),
        Some(BigUint::from(4u32)),
    )
    .unwrap()
    .with_coordinates(coordinates)
}

fn point(curve: &Curve<FieldElement>, x: u32, y: u32) -> Point<FieldElement> {
    curve
        .create_point_from_integers(BigUint::from(x), BigUint::from(y))
        .unwrap()
}

fn generator(curve: &Curve<FieldElement>) -> Point<FieldElement> {
    point(curve, 1, 5)
}

fn affine(p: &Point<FieldElement>) -> Option<(BigUint, BigUint)> {
    p.to_affine()
        .coordinates()
        .map(|(x, y)| (x.value().clone(), y.value().clone()))
}

#[test]
fn known_multiples_in_every_coordinate_system() {
    let vectors = [(2, 817, 912), (3, 54, 521), (6, 340, 933), (8, 1001, 714)];

    for coordinates in ALL_COORDINATES {
        let curve = curve(coordinates);
        let g = generator(&curve);

        for (k, x, y) in vectors {
            let expected = point(&curve, x, y);
            assert_eq!(g.multiply(&BigInt::from(k)), expected, "{coordinates:?} k={k}");
        }

        assert_eq!(g.twice(), point(&curve, 817, 912));
        assert_eq!(g.three_times(), point(&curve, 54, 521));
        assert_eq!(g.times_pow2(3), point(&curve, 1001, 714));
        assert_eq!(g.twice().twice_plus(&g.twice()), point(&curve, 340, 933));
    }
}

#[test]
fn coordinate_systems_agree() {
    let reference = curve(CoordinateSystem::Affine);
    let g_ref = generator(&reference);

    for coordinates in ALL_COORDINATES {
        let curve = curve(coordinates);
        let g = generator(&curve);
        let mut p = curve.infinity();
        let mut p_ref = reference.infinity();

        for k in 0..300u32 {
            assert_eq!(affine(&p), affine(&p_ref), "{coordinates:?} k={k}");
            assert!(p.is_valid());
            p = p.add(&g);
            p_ref = p_ref.add(&g_ref);
        }
    }
}

#[test]
fn unnormalized_points_normalize_consistently() {
    for coordinates in ALL_COORDINATES {
        let curve = curve(coordinates);
        let p = generator(&curve).multiply(&BigInt::from(101));

        let normalized = p.normalize();
        assert!(normalized.is_normalized());
        assert_eq!(normalized, p);
        assert_eq!(
            affine(&normalized),
            Some((BigUint::from(915u32), BigUint::from(761u32)))
        );
        assert!(normalized.satisfies_curve_equation());
        assert!(p.satisfies_curve_equation());
    }
}

#[test]
fn special_cases() {
    for coordinates in ALL_COORDINATES {
        let curve = curve(coordinates);
        let g = generator(&curve);
        let o = curve.infinity();

        assert!(o.is_infinity());
        assert!(o.is_valid());
        assert!(g.add(&g.negate()).is_infinity());
        assert!(g.subtract(&g).is_infinity());
        assert_eq!(g.add(&o), g);
        assert_eq!(o.add(&g), g);
        assert!(o.twice().is_infinity());
        assert!(o.negate().is_infinity());
        assert_eq!(g.add(&g), g.twice());

        // 140G = (51, 0) has order two
        let t = g.multiply(&BigInt::from(140));
        assert_eq!(t, point(&curve, 51, 0));
        assert!(t.twice().is_infinity());
        assert!(t.add(&t).is_infinity());

        assert!(g.multiply(&BigInt::from(280)).is_infinity());
        assert!(g.multiply(&BigInt::from(0)).is_infinity());
        assert_eq!(g.multiply(&BigInt::from(-1)), g.negate());
        assert_eq!(g.multiply(&BigInt::from(279)), g.negate());
        assert_eq!(g.multiply(&BigInt::from(-3)), point(&curve, 54, 1063 - 521));
    }
}

#[test]
fn subgroup_membership() {
    let curve = curve(CoordinateSystem::JacobianModified);

    // (10, 376) is on the curve but not in the subgroup generated by G.
    assert_eq!(
        curve
            .create_point_from_integers(BigUint::from(10u32), BigUint::from(376u32))
            .unwrap_err(),
        Error::InvalidPoint
    );

    // Not on the curve at all
    assert_eq!(
        curve
            .create_point_from_integers(BigUint::from(1u32), BigUint::from(6u32))
            .unwrap_err(),
        Error::InvalidPoint
    );

    // Without a cofactor only the curve equation is checked
    let whole_group = Curve::from_params(
        BigUint::from(1063u32),
        BigUint::from(4u32),
        BigUint::from(20u32),
        None,
        None,
    )
    .unwrap();
    let q = whole_group
        .create_point_from_integers(BigUint::from(10u32), BigUint::from(376u32))
        .unwrap();
    assert!(q.is_valid());
    assert!(q.satisfies_order());
}

#[test]
fn singular_curve_is_rejected() {
    // y² = x³ has discriminant zero
    let err = Curve::from_params(
        BigUint::from(1063u32),
        BigUint::from(0u32),
        BigUint::from(0u32),
        None,
        None,
    )
    .unwrap_err();
    assert_eq!(err, Error::SingularCurve);
}

#[test]
fn equal_curves_with_different_coordinates() {
    let jacobian = curve(CoordinateSystem::Jacobian);
    let homogeneous = curve(CoordinateSystem::Homogeneous);
    assert_eq!(jacobian, homogeneous);

    let p = generator(&jacobian).multiply(&BigInt::from(77));
    let q = homogeneous.import_point(&p).unwrap();
    assert_eq!(q.curve().coordinate_system(), CoordinateSystem::Homogeneous);
    assert_eq!(p, q);
    assert_eq!(
        q.add(&generator(&homogeneous)),
        generator(&jacobian).multiply(&BigInt::from(78))
    );

    let other = Curve::from_params(
        BigUint::from(1063u32),
        BigUint::from(4u32),
        BigUint::from(21u32),
        None,
        None,
    )
    .unwrap();
    assert_eq!(other.import_point(&p).unwrap_err(), Error::CurveMismatch);
}

#[test]
fn detached_points() {
    let curve = curve(CoordinateSystem::Jacobian);
    let p = generator(&curve).multiply(&BigInt::from(6));

    let detached = p.to_affine();
    assert_eq!(
        detached.coordinates().map(|(x, y)| (x.value().clone(), y.value().clone())),
        Some((BigUint::from(340u32), BigUint::from(933u32)))
    );
    assert_eq!(curve.import_affine(&detached).unwrap(), p);
    assert!(curve.infinity().to_affine().is_identity());
    assert!(curve.import_affine(&Default::default()).unwrap().is_infinity());
}

#[test]
fn batch_normalization_matches_individual() {
    for coordinates in ALL_COORDINATES {
        let curve = curve(coordinates);
        let g = generator(&curve);

        let mut points: Vec<_> = [0, 5, 17, 140, 0, 199, 280, 3]
            .into_iter()
            .map(|k| g.multiply(&BigInt::from(k)))
            .collect();
        let expected: Vec<_> = points.iter().map(affine).collect();

        curve.normalize_all(&mut points);

        for (p, e) in points.iter().zip(expected) {
            assert!(p.is_normalized());
            assert_eq!(affine(p), e);
        }
    }
}

#[test]
#[should_panic]
fn adding_points_of_different_curves_panics() {
    let a = generator(&curve(CoordinateSystem::Jacobian));
    let b = generator(&curve(CoordinateSystem::Homogeneous));
    let _ = a.add(&b);
}

prop_compose! {
    fn multiple(coordinates: CoordinateSystem)(k in 0u32..280) -> Point<FieldElement> {
        let curve = curve(coordinates);
        generator(&curve).multiply(&BigInt::from(k))
    }
}

fn any_coordinates() -> impl Strategy<Value = CoordinateSystem> {
    prop::sample::select(ALL_COORDINATES.to_vec())
}

proptest! {
    #[test]
    fn group_axioms(
        (p, q, r) in any_coordinates().prop_flat_map(|c| (multiple(c), multiple(c), multiple(c)))
    ) {
        let o = p.curve().infinity();
        prop_assert_eq!(p.add(&q), q.add(&p));
        prop_assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
        prop_assert_eq!(p.add(&o), p.clone());
        prop_assert!(p.add(&p.negate()).is_infinity());
        prop_assert_eq!(p.twice().normalize(), p.add(&p).normalize());
        prop_assert_eq!(p.twice_plus(&q), p.twice().add(&q));
        prop_assert!(p.add(&q).is_valid());
    }

    #[test]
    fn scalar_laws(
        coordinates in any_coordinates(),
        a in -600i64..600,
        b in -600i64..600,
        j in 0u32..280,
        k in 0u32..280,
    ) {
        let curve = curve(coordinates);
        let g = generator(&curve);
        let p = g.multiply(&BigInt::from(j));
        let q = g.multiply(&BigInt::from(k));
        let (a, b) = (BigInt::from(a), BigInt::from(b));

        prop_assert_eq!(p.add(&q).multiply(&a), p.multiply(&a).add(&q.multiply(&a)));
        prop_assert_eq!(p.multiply(&(&a * &b)), p.multiply(&b).multiply(&a));
        prop_assert_eq!(p.multiply(&(&a + &b)), p.multiply(&a).add(&p.multiply(&b)));
    }
}
