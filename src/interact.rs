// src/interact.rs

use crate::camera::{Camera, Projection};
use crate::geometry::{Point2, Point3, World};
use crate::scene::RoomConfig;

/// Door-toggle eligibility, recomputed once per tick. Only `Ready` permits
/// toggling; the other two arms exist for the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorStatus {
    Ready,
    TooFar,
    NotInView,
}

impl DoorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DoorStatus::Ready => "Door: Ready",
            DoorStatus::TooFar => "Door: Too Far",
            DoorStatus::NotInView => "Door: Not in View",
        }
    }
}

/// Classify the door center against the camera: behind the camera is
/// `NotInView`; in front, it must project within `ready_pixel_radius` of the
/// screen center AND sit within `ready_distance` world units to be `Ready`.
pub fn door_status(
    camera: &Camera,
    projection: &Projection,
    door_center: &Point3<World>,
    width: f32,
    height: f32,
    config: &RoomConfig,
) -> DoorStatus {
    let in_cam = camera.to_camera_space(door_center);
    if in_cam.z >= 0.0 {
        return DoorStatus::NotInView;
    }

    let projected = projection.project_point(&in_cam, width, height);
    let screen_center = Point2::new(width / 2.0, height / 2.0);
    let distance_on_screen = projected.distance_to(&screen_center);
    let distance_to_door = door_center.sub(&camera.position).length();

    if distance_on_screen < config.ready_pixel_radius && distance_to_door < config.ready_distance {
        DoorStatus::Ready
    } else {
        DoorStatus::TooFar
    }
}
