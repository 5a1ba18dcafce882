// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use std::marker::PhantomData;

/// Marker for world-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct World;

/// Marker for camera-space coordinates (camera at origin, looking down -z).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cam;

/// A 3D point/vector tagged with the coordinate space it lives in. Mixing
/// spaces is a compile error; the only crossing is `Camera::to_camera_space`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3<S> {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    _space: PhantomData<S>,
}

impl<S> Point3<S> {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, _space: PhantomData }
    }

    pub fn add(&self, other: &Point3<S>) -> Point3<S> {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(&self, other: &Point3<S>) -> Point3<S> {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn dot(&self, other: &Point3<S>) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Point3<S>) -> Point3<S> {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn scale(&self, s: f32) -> Point3<S> {
        Point3::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// A zero-length vector normalizes to itself. That keeps the camera basis
    /// math total at the pitch poles instead of producing NaN.
    pub fn normalize(&self) -> Point3<S> {
        let l = self.length();
        if l == 0.0 {
            Point3::new(self.x, self.y, self.z)
        } else {
            self.scale(1.0 / l)
        }
    }
}

/// Rotate `point` about the vertical axis through `hinge`, keeping y.
pub fn rotate_around_y(point: &Point3<World>, angle: f32, hinge: &Point3<World>) -> Point3<World> {
    let dx = point.x - hinge.x;
    let dz = point.z - hinge.z;
    let x_rot = dx * angle.cos() + dz * angle.sin();
    let z_rot = -dx * angle.sin() + dz * angle.cos();
    Point3::new(hinge.x + x_rot, point.y, hinge.z + z_rot)
}

/// Half-space `dot(normal, p) + d >= 0` counts as inside.
#[derive(Clone, Copy, Debug)]
pub struct Plane<S> {
    pub normal: Point3<S>,
    pub d: f32,
}

impl<S> Plane<S> {
    pub fn new(normal: Point3<S>, d: f32) -> Self {
        Self { normal, d }
    }

    pub fn signed_distance(&self, p: &Point3<S>) -> f32 {
        self.normal.dot(p) + self.d
    }

    pub fn is_inside(&self, p: &Point3<S>) -> bool {
        self.signed_distance(p) >= 0.0
    }
}

/// Ordered vertex loop (vertex i connects to vertex (i+1) mod n) plus a fill
/// color. Lives in whichever space `S` says.
#[derive(Clone, Debug)]
pub struct Polygon<S> {
    pub vertices: Vec<Point3<S>>,
    pub color: [f32; 4],
}

impl<S> Polygon<S> {
    pub fn new(vertices: Vec<Point3<S>>, color: [f32; 4]) -> Self {
        Self { vertices, color }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// What the pipeline emits: a projected vertex loop in pixel coordinates.
#[derive(Clone, Debug)]
pub struct ScreenPolygon {
    pub points: Vec<Point2>,
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn approx(a: &Point3<World>, b: &Point3<World>) -> bool {
        a.sub(b).length() < EPS
    }

    #[test]
    fn dot_and_cross() {
        let a: Point3<World> = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 5.0, 6.0);
        assert!((a.dot(&b) - 32.0).abs() < EPS);

        let x: Point3<World> = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert!(approx(&x.cross(&y), &Point3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn normalize_is_idempotent() {
        let v: Point3<World> = Point3::new(3.0, -4.0, 12.0);
        let once = v.normalize();
        let twice = once.normalize();
        assert!((once.length() - 1.0).abs() < EPS);
        assert!(approx(&once, &twice));
    }

    #[test]
    fn normalize_zero_stays_zero() {
        let z: Point3<World> = Point3::new(0.0, 0.0, 0.0);
        let n = z.normalize();
        assert_eq!((n.x, n.y, n.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_at_zero_angle_is_identity() {
        let hinge = Point3::new(-0.5, 0.0, -2.0);
        let p = Point3::new(0.5, 1.2, -2.0);
        assert!(approx(&rotate_around_y(&p, 0.0, &hinge), &p));
    }

    #[test]
    fn rotate_quarter_twice_equals_half() {
        let hinge = Point3::new(-0.5, 0.0, -2.0);
        let p = Point3::new(0.5, 0.7, -2.0);
        let twice = rotate_around_y(&rotate_around_y(&p, FRAC_PI_2, &hinge), FRAC_PI_2, &hinge);
        let half = rotate_around_y(&p, PI, &hinge);
        assert!(approx(&twice, &half));
    }

    #[test]
    fn hinge_is_a_fixed_point() {
        let hinge = Point3::new(-0.5, 0.0, -2.0);
        for angle in [0.0, 0.3, FRAC_PI_2, PI, 5.0] {
            assert!(approx(&rotate_around_y(&hinge, angle, &hinge), &hinge));
        }
    }

    #[test]
    fn plane_half_space() {
        let plane: Plane<Cam> = Plane::new(Point3::new(0.0, 0.0, -1.0), -0.1);
        assert!(plane.is_inside(&Point3::new(0.0, 0.0, -1.0)));
        assert!(!plane.is_inside(&Point3::new(0.0, 0.0, -0.05)));
        assert!(plane.is_inside(&Point3::new(0.0, 0.0, -0.1)));
    }
}
