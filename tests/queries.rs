// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized checks of the shape queries against each other.

use planar::{
    Angle, Annulus, Circle, Complex, Contains, Interpolate, Intersects, Point, Ray, Square,
    Triangle, Vec2,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_SAMPLES: usize = 2000;
const TOLERANCE: f64 = 1e-9;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn rand_point(rng: &mut StdRng) -> Point {
    Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0))
}

fn rand_orientation(rng: &mut StdRng) -> Complex {
    Complex::from_angle(Angle::from_degrees(rng.random_range(-180.0..180.0)))
}

fn rand_circle(rng: &mut StdRng) -> Circle {
    Circle::new(
        rand_point(rng),
        rand_orientation(rng),
        rng.random_range(0.0..5.0),
    )
    .unwrap()
}

fn rand_square(rng: &mut StdRng) -> Square {
    Square::new(
        rand_point(rng),
        rand_orientation(rng),
        rng.random_range(0.1..8.0),
    )
    .unwrap()
}

fn rand_triangle(rng: &mut StdRng) -> Triangle {
    Triangle::new(rand_point(rng), rand_point(rng), rand_point(rng))
}

fn rand_ray(rng: &mut StdRng) -> Ray {
    Ray::from_orientation(rand_point(rng), rand_orientation(rng))
}

#[test]
fn circle_closest_point_is_on_boundary() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let circle = rand_circle(&mut rng);
        let p = rand_point(&mut rng);
        let q = circle.closest_point(p);
        assert!(
            (q.distance(circle.center()) - circle.radius()).abs() < TOLERANCE,
            "{q} is not on {circle}"
        );
        // The boundary is exactly `|d - r|` away along the radial line.
        let expected = (p.distance(circle.center()) - circle.radius()).abs();
        assert!((p.distance(q) - expected).abs() < TOLERANCE);
    }
}

#[test]
fn square_closest_point() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let square = rand_square(&mut rng);
        let p = rand_point(&mut rng);
        let q = square.closest_point(p);
        if square.contains(p) {
            assert_eq!(p, q);
            continue;
        }
        let local = square.local_point(q);
        let h = 0.5 * square.side_length();
        assert!(
            (local.x.abs().max(local.y.abs()) - h).abs() < TOLERANCE,
            "{q} is not on the boundary of {square}"
        );
        for edge in square.edges() {
            assert!(p.distance(q) <= p.distance(edge.nearest_point(p)) + TOLERANCE);
        }
    }
}

#[test]
fn triangle_closest_point() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let triangle = rand_triangle(&mut rng);
        let p = rand_point(&mut rng);
        let q = triangle.closest_point(p);
        if triangle.contains(p) {
            assert_eq!(p, q);
            continue;
        }
        let on_edge = triangle
            .edges()
            .iter()
            .any(|edge| edge.nearest(q).distance_sq < TOLERANCE);
        assert!(on_edge, "{q} is not on the boundary of {triangle}");
        for vertex in [triangle.a, triangle.b, triangle.c] {
            assert!(p.distance(q) <= p.distance(vertex) + TOLERANCE);
        }
    }
}

#[test]
fn annulus_closest_point_is_in_band() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let outer = rng.random_range(0.5..6.0);
        let inner = rng.random_range(0.0..outer);
        let annulus =
            Annulus::new(rand_point(&mut rng), rand_orientation(&mut rng), outer, inner).unwrap();
        let p = rand_point(&mut rng);
        let q = annulus.closest_point(p);
        let d = q.distance(annulus.center());
        assert!(d >= inner - TOLERANCE && d <= outer + TOLERANCE, "{q} outside {annulus}");
        if annulus.contains(p) {
            assert_eq!(p, q);
        }
    }
}

#[test]
fn ray_closest_point_is_on_ray() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let ray = rand_ray(&mut rng);
        let p = rand_point(&mut rng);
        let q = ray.closest_point(p);
        assert!(ray.contains(q), "{q} is not on {ray}");
        if q != ray.origin() {
            // The offset to the projection is perpendicular to the ray.
            assert!((p - q).dot(ray.direction()).abs() < TOLERANCE);
        }
    }
}

#[test]
fn ray_circle_tests_agree() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let ray = rand_ray(&mut rng);
        let circle = rand_circle(&mut rng);
        let crossings = ray.circle_intersections(&circle);
        assert_eq!(ray.intersects(circle), !crossings.is_empty());
        assert_eq!(circle.intersects(ray), ray.intersects(circle));
        for t in crossings {
            let p = ray.point_at(t);
            assert!((p.distance(circle.center()) - circle.radius()).abs() < 1e-6);
        }
    }
}

#[test]
fn ray_triangle_hits_land_on_triangle() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let ray = rand_ray(&mut rng);
        let triangle = rand_triangle(&mut rng);
        let hit = triangle
            .edges()
            .iter()
            .filter_map(|edge| ray.line_intersection(edge))
            .next();
        if let Some(t) = hit {
            assert!(ray.intersects(triangle));
            let p = ray.point_at(t);
            assert!(p.distance(triangle.closest_point(p)) < 1e-6);
        } else {
            assert_eq!(ray.intersects(triangle), triangle.contains(ray.origin()));
        }
    }
}

#[test]
fn circle_pairs_are_symmetric() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let a = rand_circle(&mut rng);
        let b = rand_circle(&mut rng);
        assert_eq!(a.intersects(b), b.intersects(a));
        if a.contains(b) {
            assert!(a.intersects(b));
            assert!(a.contains(b.center()));
        }
    }
}

#[test]
fn shapes_touching_circles_agree() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES {
        let circle = rand_circle(&mut rng);
        let square = rand_square(&mut rng);
        let triangle = rand_triangle(&mut rng);
        assert_eq!(circle.intersects(square), square.intersects(circle));
        assert_eq!(circle.intersects(triangle), triangle.intersects(circle));
        if square.contains(circle.center()) {
            assert!(circle.intersects(square));
        }
    }
}

#[test]
fn interpolation_endpoints() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES / 10 {
        let from = rand_square(&mut rng);
        let to = rand_square(&mut rng);
        let start = from.interpolated(&to, 0.0);
        let end = from.interpolated(&to, 1.0);
        assert!(start.center().is_near(from.center()));
        assert!(end.center().is_near(to.center()));
        assert!((end.side_length() - to.side_length()).abs() < TOLERANCE);
        let delta = (end.orientation().angle() - to.orientation().angle()).normalized();
        assert!(delta.radians().abs() < TOLERANCE);

        // The orientation never moves more than half a turn.
        let mid = from.interpolated(&to, 0.5);
        let half = (mid.orientation().angle() - from.orientation().angle()).normalized();
        assert!(half.degrees().abs() <= 90.0 + TOLERANCE);
    }
}

#[test]
fn translation_preserves_queries() {
    let mut rng = rng();
    for _ in 0..N_SAMPLES / 10 {
        let triangle = rand_triangle(&mut rng);
        let p = rand_point(&mut rng);
        let v = Vec2::new(rng.random_range(-3.0..3.0), 0.0);
        let moved = triangle + v;
        let q = moved.closest_point(p + v);
        assert!((q - v).distance(triangle.closest_point(p)) < 1e-6);
    }
}
