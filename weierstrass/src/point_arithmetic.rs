//! Point addition and doubling formulas for each coordinate system.
//!
//! Every function here takes points which are not the identity and belong to the same curve;
//! [`Point`] handles the identity and dispatches on the curve's [`CoordinateSystem`].

use crate::{CoordinateSystem, Point};
use primefield::Field;

/// Compute `n * x` by double-and-add.
pub(crate) fn times_small<F: Field>(x: &F, n: u32) -> F {
    let mut acc = x.zero();
    for i in (0..u32::BITS - n.leading_zeros()).rev() {
        acc = acc.double();
        if (n >> i) & 1 == 1 {
            acc = acc.add(x);
        }
    }
    acc
}

fn three<F: Field>(x: &F) -> F {
    x.double().add(x)
}

fn four<F: Field>(x: &F) -> F {
    x.double().double()
}

fn eight<F: Field>(x: &F) -> F {
    four(x).double()
}

/// Affine and projective coordinates of a non-identity point.
struct Coords<'a, F> {
    x: &'a F,
    y: &'a F,
    zs: &'a [F],
}

impl<'a, F: Field> Coords<'a, F> {
    fn of(point: &'a Point<F>) -> Option<Self> {
        match (point.raw_x(), point.raw_y()) {
            (Some(x), Some(y)) => Some(Self {
                x,
                y,
                zs: point.raw_z_coords(),
            }),
            _ => None,
        }
    }

    fn z(&self) -> &'a F {
        &self.zs[0]
    }

    fn w(&self) -> &'a F {
        &self.zs[1]
    }
}

/// Returns `lhs + rhs` for points which are not the identity.
pub(crate) fn add<F: Field>(lhs: &Point<F>, rhs: &Point<F>) -> Point<F> {
    let curve = lhs.curve();
    let (Some(p), Some(q)) = (Coords::of(lhs), Coords::of(rhs)) else {
        return curve.infinity();
    };

    match curve.coordinate_system() {
        CoordinateSystem::Affine => add_affine(lhs, &p, &q),
        CoordinateSystem::Homogeneous => add_homogeneous(lhs, &p, &q),
        CoordinateSystem::Jacobian | CoordinateSystem::JacobianModified => {
            add_jacobian(lhs, &p, &q)
        }
    }
}

/// Returns `2 * point` for a point which is not the identity.
pub(crate) fn double<F: Field>(point: &Point<F>) -> Point<F> {
    let curve = point.curve();
    let Some(p) = Coords::of(point) else {
        return curve.infinity();
    };

    if p.y.is_zero() {
        return curve.infinity();
    }

    match curve.coordinate_system() {
        CoordinateSystem::Affine => double_affine(point, &p),
        CoordinateSystem::Homogeneous => double_homogeneous(point, &p),
        CoordinateSystem::Jacobian => double_jacobian(point, &p),
        CoordinateSystem::JacobianModified => double_jacobian_modified(point, &p),
    }
}

fn add_affine<F: Field>(lhs: &Point<F>, p: &Coords<'_, F>, q: &Coords<'_, F>) -> Point<F> {
    let dx = q.x.subtract(p.x);
    let dy = q.y.subtract(p.y);

    let gamma = match dy.divide(&dx) {
        Ok(gamma) => gamma,
        Err(_) if dy.is_zero() => return double(lhs),
        Err(_) => return lhs.curve().infinity(),
    };

    let x3 = gamma.square().subtract(p.x).subtract(q.x);
    let y3 = gamma.multiply(&p.x.subtract(&x3)).subtract(p.y);
    lhs.with_coordinates(x3, y3, Vec::new())
}

fn double_affine<F: Field>(point: &Point<F>, p: &Coords<'_, F>) -> Point<F> {
    let numerator = three(&p.x.square()).add(point.curve().a());

    let Ok(gamma) = numerator.divide(&p.y.double()) else {
        return point.curve().infinity();
    };

    let x3 = gamma.square().subtract(&p.x.double());
    let y3 = gamma.multiply(&p.x.subtract(&x3)).subtract(p.y);
    point.with_coordinates(x3, y3, Vec::new())
}

fn add_homogeneous<F: Field>(lhs: &Point<F>, p: &Coords<'_, F>, q: &Coords<'_, F>) -> Point<F> {
    let (z1, z2) = (p.z(), q.z());

    let u1 = q.y.multiply(z1);
    let u2 = p.y.multiply(z2);
    let u = u1.subtract(&u2);

    let v1 = q.x.multiply(z1);
    let v2 = p.x.multiply(z2);
    let v = v1.subtract(&v2);

    if v.is_zero() {
        return if u.is_zero() {
            double(lhs)
        } else {
            lhs.curve().infinity()
        };
    }

    let w = z1.multiply(z2);
    let v_squared = v.square();
    let v_cubed = v_squared.multiply(&v);
    let v_squared_v2 = v_squared.multiply(&v2);

    // A = u²w - v³ - 2v²v2
    let a = u
        .square()
        .multiply(&w)
        .subtract(&v_cubed)
        .subtract(&v_squared_v2.double());

    let x3 = v.multiply(&a);
    let y3 = v_squared_v2
        .subtract(&a)
        .multiply_minus_product(&u, &u2, &v_cubed);
    let z3 = v_cubed.multiply(&w);

    lhs.with_coordinates(x3, y3, vec![z3])
}

fn double_homogeneous<F: Field>(point: &Point<F>, p: &Coords<'_, F>) -> Point<F> {
    let z = p.z();
    let a = point.curve().a();

    let mut w = three(&p.x.square());
    if !a.is_zero() {
        w = w.add(&a.multiply(&z.square()));
    }

    let s = p.y.multiply(z);
    let t = s.multiply(p.y);
    let b = p.x.multiply(&t);
    let four_b = four(&b);
    let h = w.square().subtract(&four_b.double());

    let x3 = h.multiply(&s).double();
    let y3 = four_b
        .subtract(&h)
        .multiply_minus_product(&w, &eight(&t), &t);
    let z3 = eight(&s.square().multiply(&s));

    point.with_coordinates(x3, y3, vec![z3])
}

fn add_jacobian<F: Field>(lhs: &Point<F>, p: &Coords<'_, F>, q: &Coords<'_, F>) -> Point<F> {
    let (z1, z2) = (p.z(), q.z());

    let z1_squared = z1.square();
    let z2_squared = z2.square();

    let u1 = p.x.multiply(&z2_squared);
    let u2 = q.x.multiply(&z1_squared);
    let s1 = p.y.multiply(&z2_squared).multiply(z2);
    let s2 = q.y.multiply(&z1_squared).multiply(z1);

    let h = u2.subtract(&u1);
    let r = s2.subtract(&s1);

    if h.is_zero() {
        return if r.is_zero() {
            double(lhs)
        } else {
            lhs.curve().infinity()
        };
    }

    let h_squared = h.square();
    let g = h_squared.multiply(&h);
    let v = u1.multiply(&h_squared);

    let x3 = r.square().subtract(&g).subtract(&v.double());
    let y3 = v.subtract(&x3).multiply_minus_product(&r, &s1, &g);
    let z3 = z1.multiply(z2).multiply(&h);

    let zs = match lhs.curve().coordinate_system() {
        CoordinateSystem::JacobianModified => {
            let w3 = jacobian_modified_w(lhs.curve().a(), &z3);
            vec![z3, w3]
        }
        _ => vec![z3],
    };

    lhs.with_coordinates(x3, y3, zs)
}

fn double_jacobian<F: Field>(point: &Point<F>, p: &Coords<'_, F>) -> Point<F> {
    let z = p.z();
    let a = point.curve().a();

    let y_squared = p.y.square();
    let s = four(&p.x.multiply(&y_squared));

    let mut m = three(&p.x.square());
    if !a.is_zero() {
        m = m.add(&a.multiply(&z.square().square()));
    }

    let x3 = m.square().subtract(&s.double());
    let y3 = s
        .subtract(&x3)
        .multiply_minus_product(&m, &eight(&y_squared), &y_squared);
    let z3 = p.y.multiply(z).double();

    point.with_coordinates(x3, y3, vec![z3])
}

fn double_jacobian_modified<F: Field>(point: &Point<F>, p: &Coords<'_, F>) -> Point<F> {
    let z = p.z();
    let w = p.w();

    let y_squared = p.y.square();
    let s = four(&p.x.multiply(&y_squared));
    let t = eight(&y_squared.square());
    let m = three(&p.x.square()).add(w);

    let x3 = m.square().subtract(&s.double());
    let y3 = s.subtract(&x3).multiply(&m).subtract(&t);
    let z3 = p.y.multiply(z).double();
    let w3 = t.multiply(w).double();

    point.with_coordinates(x3, y3, vec![z3, w3])
}

/// `W = aZ⁴`
pub(crate) fn jacobian_modified_w<F: Field>(a: &F, z: &F) -> F {
    a.multiply(&z.square().square())
}
