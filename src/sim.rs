// src/sim.rs

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::camera::{Camera, Projection};
use crate::geometry::{Point3, ScreenPolygon};
use crate::interact::{door_status, DoorStatus};
use crate::pipeline::render_frame;
use crate::scene::{DoorPanel, RoomBounds, RoomConfig, RoomShell};

/// Everything the driver hands the simulation for one tick. Both vectors are
/// normalized joystick reads in [-1, 1]^2.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub view: Vec2,
    pub movement: Vec2,
    pub toggle_door: bool,
}

/// The whole simulation: camera, room, door and the last computed door
/// status. The external scheduler owns the tick cadence and calls `tick`;
/// nothing else mutates this state.
pub struct SimState {
    config: RoomConfig,
    camera: Camera,
    shell: RoomShell,
    door: DoorPanel,
    bounds: RoomBounds,
    projection: Projection,
    status: DoorStatus,
}

impl SimState {
    /// Stock starting pose: mid-room at eye height, yaw 0.
    pub fn new(config: RoomConfig) -> Self {
        let camera = Camera::new(Point3::new(0.0, 1.0, 0.0), 0.0, 0.0);
        Self::with_camera(config, camera)
    }

    pub fn with_camera(config: RoomConfig, camera: Camera) -> Self {
        Self {
            camera,
            shell: RoomShell::new(&config),
            door: DoorPanel::new(&config),
            bounds: RoomBounds::new(&config),
            projection: Projection::new(config.near, config.fov_v_deg),
            status: DoorStatus::NotInView,
            config,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn door(&self) -> &DoorPanel {
        &self.door
    }

    pub fn door_status(&self) -> DoorStatus {
        self.status
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Advance one ~16ms tick: integrate look input, attempt movement with
    /// containment validation, refresh door eligibility, apply a requested
    /// toggle if eligible.
    pub fn tick(&mut self, input: &FrameInput, width: f32, height: f32) {
        let look = self.config.look_sensitivity;
        self.camera.yaw += input.view.x * look;
        self.camera.pitch =
            (self.camera.pitch + input.view.y * look).clamp(-FRAC_PI_2, FRAC_PI_2);

        // Forward and strafe are validated independently, so sliding along a
        // wall keeps the free axis. The forward vector keeps its pitch
        // component: looking up and walking forward climbs until the ceiling
        // bound rejects it.
        let basis = self.camera.basis();
        let speed = self.config.move_speed;
        let door_open = self.door.is_open();

        let ahead = self.camera.position.add(&basis.forward.scale(input.movement.y * speed));
        if self.bounds.contains(&ahead, door_open) {
            self.camera.position = ahead;
        } else if input.movement.y != 0.0 {
            log::debug!("forward move rejected at ({}, {}, {})", ahead.x, ahead.y, ahead.z);
        }

        let aside = self.camera.position.add(&basis.right.scale(-input.movement.x * speed));
        if self.bounds.contains(&aside, door_open) {
            self.camera.position = aside;
        } else if input.movement.x != 0.0 {
            log::debug!("strafe rejected at ({}, {}, {})", aside.x, aside.y, aside.z);
        }

        self.status = door_status(
            &self.camera,
            &self.projection,
            &self.door.center(),
            width,
            height,
            &self.config,
        );
        if input.toggle_door && self.status == DoorStatus::Ready {
            self.door.toggle();
        }
    }

    /// Produce this frame's drawables: the static shell plus the door panel,
    /// through the full transform/clip/sort/project pipeline.
    pub fn render(&self, width: f32, height: f32) -> Vec<ScreenPolygon> {
        render_frame(&[&self.shell, &self.door], &self.camera, &self.projection, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn forward_input() -> FrameInput {
        FrameInput { movement: Vec2::new(0.0, 1.0), ..Default::default() }
    }

    fn at_door() -> SimState {
        // One unit back from the door, facing it.
        SimState::with_camera(
            RoomConfig::default(),
            Camera::new(Point3::new(0.0, 0.75, -1.0), -FRAC_PI_2, 0.0),
        )
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let mut sim = SimState::new(RoomConfig::default());
        sim.tick(&FrameInput::default(), W, H);
        let cam = sim.camera();
        assert_eq!((cam.position.x, cam.position.y, cam.position.z), (0.0, 1.0, 0.0));
        assert_eq!(cam.yaw, 0.0);
    }

    #[test]
    fn walking_into_a_wall_stops_at_it() {
        // Stock camera faces +x; the right wall is at x = 2.
        let mut sim = SimState::new(RoomConfig::default());
        for _ in 0..40 {
            sim.tick(&forward_input(), W, H);
        }
        let x = sim.camera().position.x;
        assert!(x > 1.85 && x < 2.0);
    }

    #[test]
    fn pitch_clamps_at_the_pole() {
        let mut sim = SimState::new(RoomConfig::default());
        let look_up = FrameInput { view: Vec2::new(0.0, 1.0), ..Default::default() };
        for _ in 0..100 {
            sim.tick(&look_up, W, H);
        }
        assert_eq!(sim.camera().pitch, FRAC_PI_2);
    }

    #[test]
    fn toggle_opens_the_door_when_ready() {
        let mut sim = at_door();
        sim.tick(&FrameInput::default(), W, H);
        assert_eq!(sim.door_status(), DoorStatus::Ready);

        let toggle = FrameInput { toggle_door: true, ..Default::default() };
        sim.tick(&toggle, W, H);
        assert!(sim.door().is_open());
    }

    #[test]
    fn toggle_is_ignored_when_not_ready() {
        // Stock pose: door center sits exactly on the camera plane, not in view.
        let mut sim = SimState::new(RoomConfig::default());
        let toggle = FrameInput { toggle_door: true, ..Default::default() };
        sim.tick(&toggle, W, H);
        assert_ne!(sim.door_status(), DoorStatus::Ready);
        assert!(!sim.door().is_open());
    }

    #[test]
    fn closed_door_blocks_the_doorway_open_door_admits_it() {
        let mut sim = at_door();
        for _ in 0..30 {
            sim.tick(&forward_input(), W, H);
        }
        // Blocked at the front wall plane (z = -2).
        assert!(sim.camera().position.z > -2.0);

        sim.tick(&FrameInput { toggle_door: true, ..Default::default() }, W, H);
        assert!(sim.door().is_open());
        for _ in 0..30 {
            sim.tick(&forward_input(), W, H);
        }
        // Through the doorway and beyond the front wall.
        assert!(sim.camera().position.z < -2.0);
    }

    #[test]
    fn render_covers_the_whole_view_from_inside() {
        let sim = SimState::new(RoomConfig::default());
        let frame = sim.render(W, H);
        // Facing +x from the room center, plenty of surfaces survive the
        // near clip in some clipped form.
        assert!(frame.len() > 5);
        assert!(frame.iter().all(|p| p.points.len() >= 3));
    }
}
