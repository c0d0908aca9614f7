#![feature(test)]
extern crate test;
use test::Bencher;

use planar::{Circle, Complex, Contains, Intersects, Point, Ray, Square, Triangle, Vec2};

static TRIANGLE: Triangle = Triangle::from_coords((-4.0, 2.0), (2.0, 2.0), (1.0, 5.0));

// Inside, on the boundary, and outside of the shapes below.
static POINTS: [Point; 3] = [
    Point::new(0.5, 3.0),
    Point::new(2.0, 2.0),
    Point::new(7.5, -3.25),
];

#[bench]
fn bench_circle_ray(b: &mut Bencher) {
    let circle = Circle::from_center_radius((-4.0, 4.0), 4.0).unwrap();
    let rays = [
        Ray::new((-8.1, 0.0), Vec2::new(0.0, 1.0)).unwrap(),
        Ray::new((-8.1, 0.0), Vec2::new(0.17365, 0.98481)).unwrap(),
    ];
    b.iter(|| {
        for ray in &rays {
            test::black_box(test::black_box(circle).intersects(*ray));
        }
    });
}

#[bench]
fn bench_square_closest_point(b: &mut Bencher) {
    let square = Square::new((2.9, 1.4), Complex::new(0.5, 0.866), 3.5).unwrap();
    b.iter(|| {
        for p in &POINTS {
            test::black_box(test::black_box(square).closest_point(*p));
        }
    });
}

#[bench]
fn bench_triangle_contains(b: &mut Bencher) {
    b.iter(|| {
        for p in &POINTS {
            test::black_box(test::black_box(TRIANGLE).contains(*p));
        }
    });
}

#[bench]
fn bench_ray_triangle(b: &mut Bencher) {
    let ray = Ray::new((-10.0, 3.0), Vec2::new(1.0, 0.1)).unwrap();
    b.iter(|| test::black_box(ray).intersects(test::black_box(TRIANGLE)));
}
