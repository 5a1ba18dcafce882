// src/camera.rs

use crate::geometry::{Cam, Plane, Point2, Point3, World};

/// First-person camera: a world position plus yaw/pitch in radians.
///
/// Yaw is unbounded (it wraps through the trig functions); the driver clamps
/// pitch to [-pi/2, pi/2]. At exactly +-pi/2 the forward vector is parallel to
/// world-up and `basis()` degenerates to a zero right vector, which the
/// normalize-zero policy propagates unchanged.
#[derive(Debug)]
pub struct Camera {
    pub position: Point3<World>,
    pub yaw: f32,
    pub pitch: f32,
}

/// Orthonormal frame derived from yaw/pitch, in world space.
#[derive(Clone, Copy, Debug)]
pub struct Basis {
    pub right: Point3<World>,
    pub up: Point3<World>,
    pub forward: Point3<World>,
}

impl Camera {
    pub fn new(position: Point3<World>, yaw: f32, pitch: f32) -> Self {
        Self { position, yaw, pitch }
    }

    pub fn basis(&self) -> Basis {
        let forward = Point3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize();
        let right = Point3::new(0.0, 1.0, 0.0).cross(&forward).normalize();
        let up = forward.cross(&right).normalize();
        Basis { right, up, forward }
    }

    /// Transform a world point into camera space. The result is right-handed
    /// with -z in front of the camera.
    pub fn to_camera_space(&self, point: &Point3<World>) -> Point3<Cam> {
        let basis = self.basis();
        let p = point.sub(&self.position);
        Point3::new(basis.right.dot(&p), basis.up.dot(&p), -basis.forward.dot(&p))
    }
}

/// Projection parameters: near-clip distance and vertical field of view.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub near: f32,
    pub fov_v_deg: f32,
}

impl Projection {
    pub fn new(near: f32, fov_v_deg: f32) -> Self {
        Self { near, fov_v_deg }
    }

    /// The camera-space near plane: everything with z <= -near is kept.
    pub fn near_plane(&self) -> Plane<Cam> {
        Plane::new(Point3::new(0.0, 0.0, -1.0), -self.near)
    }

    /// Camera space to pixel coordinates. Callers guarantee z < 0 (the near
    /// clip runs first); y is flipped so pixel y grows downward.
    pub fn project_point(&self, point: &Point3<Cam>, width: f32, height: f32) -> Point2 {
        let tan_fov_v_2 = (self.fov_v_deg / 2.0).to_radians().tan();
        let aspect = width / height;
        let tan_fov_h_2 = aspect * tan_fov_v_2;
        let x_proj = (point.x / -point.z) / tan_fov_h_2;
        let y_proj = (point.y / -point.z) / tan_fov_v_2;
        Point2::new((x_proj + 1.0) * (width / 2.0), (1.0 - y_proj) * (height / 2.0))
    }
}
