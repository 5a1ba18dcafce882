// src/scene.rs

use crate::geometry::{rotate_around_y, Point3, Polygon, World};
use std::f32::consts::FRAC_PI_2;

const FLOOR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
const CEILING_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
const LEFT_WALL_COLOR: [f32; 4] = [0.8, 0.2, 0.2, 1.0];
const RIGHT_WALL_COLOR: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
const BACK_WALL_COLOR: [f32; 4] = [0.8, 0.8, 0.2, 1.0];
const FRONT_WALL_COLOR: [f32; 4] = [0.3, 0.3, 0.8, 1.0];
const DOOR_COLOR: [f32; 4] = [0.55, 0.35, 0.2, 1.0];

/// Every tunable the room viewer carries, with the stock values as defaults.
#[derive(Clone, Copy, Debug)]
pub struct RoomConfig {
    /// Half-extent of the square footprint; walls sit at +-half_extent.
    pub half_extent: f32,
    pub height: f32,
    /// Doorway spans [-doorway_half_width, doorway_half_width] on the front wall.
    pub doorway_half_width: f32,
    pub door_top: f32,
    pub near: f32,
    pub fov_v_deg: f32,
    /// World units per tick at full joystick deflection.
    pub move_speed: f32,
    /// Radians per tick at full joystick deflection.
    pub look_sensitivity: f32,
    pub ready_pixel_radius: f32,
    pub ready_distance: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            half_extent: 2.0,
            height: 2.0,
            doorway_half_width: 0.5,
            door_top: 1.5,
            near: 0.1,
            fov_v_deg: 60.0,
            move_speed: 0.1,
            look_sensitivity: 0.05,
            ready_pixel_radius: 150.0,
            ready_distance: 2.5,
        }
    }
}

/// A per-frame supplier of world geometry. The static shell and the dynamic
/// door panel both implement this, so the pipeline composes them without
/// special-casing either.
pub trait PolygonSource {
    fn emit(&self, out: &mut Vec<Polygon<World>>);
}

/// The static room surfaces: floor, ceiling, four walls, with the doorway cut
/// out of the front wall. Every surface is double-sided (the viewer can end up
/// on either side once the door is open). Fixed at construction.
pub struct RoomShell {
    polygons: Vec<Polygon<World>>,
}

impl RoomShell {
    pub fn new(config: &RoomConfig) -> Self {
        let l = config.half_extent;
        let h = config.height;
        let dw = config.doorway_half_width;
        let dt = config.door_top;
        let p = Point3::<World>::new;
        let mut polygons = Vec::with_capacity(26);

        // Floor and ceiling, two triangles each.
        push_two_sided(&mut polygons, vec![p(-l, 0.0, -l), p(l, 0.0, -l), p(l, 0.0, l)], FLOOR_COLOR);
        push_two_sided(&mut polygons, vec![p(-l, 0.0, -l), p(l, 0.0, l), p(-l, 0.0, l)], FLOOR_COLOR);
        push_two_sided(&mut polygons, vec![p(-l, h, -l), p(l, h, -l), p(l, h, l)], CEILING_COLOR);
        push_two_sided(&mut polygons, vec![p(-l, h, -l), p(l, h, l), p(-l, h, l)], CEILING_COLOR);

        // Side and back walls.
        push_two_sided(&mut polygons, vec![p(-l, 0.0, -l), p(-l, h, -l), p(-l, h, l)], LEFT_WALL_COLOR);
        push_two_sided(&mut polygons, vec![p(-l, 0.0, -l), p(-l, h, l), p(-l, 0.0, l)], LEFT_WALL_COLOR);
        push_two_sided(&mut polygons, vec![p(l, 0.0, -l), p(l, h, -l), p(l, h, l)], RIGHT_WALL_COLOR);
        push_two_sided(&mut polygons, vec![p(l, 0.0, -l), p(l, h, l), p(l, 0.0, l)], RIGHT_WALL_COLOR);
        push_two_sided(&mut polygons, vec![p(-l, 0.0, l), p(l, 0.0, l), p(l, h, l)], BACK_WALL_COLOR);
        push_two_sided(&mut polygons, vec![p(-l, 0.0, l), p(l, h, l), p(-l, h, l)], BACK_WALL_COLOR);

        // Front wall in three quads around the doorway: lintel above the
        // opening, then the piers left and right of it.
        push_two_sided(
            &mut polygons,
            vec![p(-l, dt, -l), p(l, dt, -l), p(l, h, -l), p(-l, h, -l)],
            FRONT_WALL_COLOR,
        );
        push_two_sided(
            &mut polygons,
            vec![p(-l, 0.0, -l), p(-dw, 0.0, -l), p(-dw, dt, -l), p(-l, dt, -l)],
            FRONT_WALL_COLOR,
        );
        push_two_sided(
            &mut polygons,
            vec![p(dw, 0.0, -l), p(l, 0.0, -l), p(l, dt, -l), p(dw, dt, -l)],
            FRONT_WALL_COLOR,
        );

        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon<World>] {
        &self.polygons
    }
}

fn push_two_sided(out: &mut Vec<Polygon<World>>, vertices: Vec<Point3<World>>, color: [f32; 4]) {
    let mut reversed = vertices.clone();
    reversed.reverse();
    out.push(Polygon::new(vertices, color));
    out.push(Polygon::new(reversed, color));
}

impl PolygonSource for RoomShell {
    fn emit(&self, out: &mut Vec<Polygon<World>>) {
        out.extend(self.polygons.iter().cloned());
    }
}

/// The hinged door: a quad recomputed each frame by rotating the closed pose
/// about the vertical hinge axis at its left-bottom-front corner. Only two
/// angles ever occur, 0 (closed) and pi/2 (open); the toggle snaps between
/// them with no animation in between.
pub struct DoorPanel {
    angle: f32,
    closed: [Point3<World>; 4],
    hinge: Point3<World>,
}

impl DoorPanel {
    pub fn new(config: &RoomConfig) -> Self {
        let l = config.half_extent;
        let dw = config.doorway_half_width;
        let dt = config.door_top;
        let closed = [
            Point3::new(-dw, 0.0, -l),
            Point3::new(dw, 0.0, -l),
            Point3::new(dw, dt, -l),
            Point3::new(-dw, dt, -l),
        ];
        Self { angle: 0.0, closed, hinge: Point3::new(-dw, 0.0, -l) }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_open(&self) -> bool {
        self.angle == FRAC_PI_2
    }

    pub fn toggle(&mut self) {
        self.angle = if self.angle == 0.0 { FRAC_PI_2 } else { 0.0 };
        log::debug!("door toggled, angle = {}", self.angle);
    }

    pub fn vertices(&self) -> [Point3<World>; 4] {
        self.closed.map(|v| rotate_around_y(&v, self.angle, &self.hinge))
    }

    /// Mean of the four corners; proximity tests only, never rendered.
    pub fn center(&self) -> Point3<World> {
        let mut sum = Point3::new(0.0, 0.0, 0.0);
        for v in self.vertices() {
            sum = sum.add(&v);
        }
        sum.scale(0.25)
    }
}

impl PolygonSource for DoorPanel {
    fn emit(&self, out: &mut Vec<Polygon<World>>) {
        out.push(Polygon::new(self.vertices().to_vec(), DOOR_COLOR));
    }
}

/// Door-state-aware containment test for the viewer position. All bounds are
/// strict; standing exactly on a wall plane counts as outside.
#[derive(Clone, Copy, Debug)]
pub struct RoomBounds {
    half_extent: f32,
    height: f32,
    doorway_half_width: f32,
}

impl RoomBounds {
    pub fn new(config: &RoomConfig) -> Self {
        Self {
            half_extent: config.half_extent,
            height: config.height,
            doorway_half_width: config.doorway_half_width,
        }
    }

    pub fn contains(&self, position: &Point3<World>, door_open: bool) -> bool {
        let l = self.half_extent;
        let in_footprint = -l < position.x && position.x < l;
        let in_height = 0.0 < position.y && position.y < self.height;
        if door_open {
            if position.z >= -l {
                in_footprint && in_height
            } else {
                // Past the front wall: only the doorway slot is passable.
                let dw = self.doorway_half_width;
                -dw < position.x && position.x < dw && in_height
            }
        } else {
            in_footprint && in_height && -l < position.z && position.z < l
        }
    }
}
