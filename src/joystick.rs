// src/joystick.rs

use glam::Vec2;

/// On-screen virtual joystick: a fixed base circle and a knob the pointer
/// drags around inside it. One per control (move / view). The knob offset is
/// mutated by drag events and sampled once per tick as a normalized input
/// vector in [-1, 1]^2, clamped to the unit disk.
#[derive(Clone, Copy, Debug)]
pub struct Joystick {
    center: Vec2,
    radius: f32,
    knob_offset: Vec2,
    dragging: bool,
}

impl Joystick {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius, knob_offset: Vec2::ZERO, dragging: false }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn knob_position(&self) -> Vec2 {
        self.center + self.knob_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn contains(&self, pointer: Vec2) -> bool {
        (pointer - self.center).length_squared() <= self.radius * self.radius
    }

    pub fn start_drag(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.update_drag(pointer);
    }

    pub fn update_drag(&mut self, pointer: Vec2) {
        self.knob_offset = (pointer - self.center).clamp_length_max(self.radius);
    }

    /// Releasing snaps the knob back to center, zeroing the input.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.knob_offset = Vec2::ZERO;
    }

    /// Normalized input: both axes negated, so dragging the knob left/up
    /// yields positive x/y. Screen-space drag, control-space output.
    pub fn input(&self) -> Vec2 {
        -self.knob_offset / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_stick_reads_zero() {
        let stick = Joystick::new(Vec2::new(100.0, 500.0), 50.0);
        assert_eq!(stick.input(), Vec2::ZERO);
    }

    #[test]
    fn contains_is_inclusive_of_the_rim() {
        let stick = Joystick::new(Vec2::new(100.0, 100.0), 50.0);
        assert!(stick.contains(Vec2::new(150.0, 100.0)));
        assert!(!stick.contains(Vec2::new(151.0, 100.0)));
    }

    #[test]
    fn drag_is_clamped_to_the_base_circle() {
        let mut stick = Joystick::new(Vec2::new(100.0, 100.0), 50.0);
        stick.start_drag(Vec2::new(300.0, 100.0));
        assert!((stick.knob_position().x - 150.0).abs() < 1e-4);
        assert!((stick.input().x + 1.0).abs() < 1e-4);
    }

    #[test]
    fn input_axes_are_negated() {
        let mut stick = Joystick::new(Vec2::new(100.0, 100.0), 50.0);
        stick.start_drag(Vec2::new(100.0, 125.0)); // drag down half-way
        let input = stick.input();
        assert!((input.y + 0.5).abs() < 1e-4);
        assert_eq!(input.x, 0.0);
    }

    #[test]
    fn release_recenters_the_knob() {
        let mut stick = Joystick::new(Vec2::new(100.0, 100.0), 50.0);
        stick.start_drag(Vec2::new(130.0, 100.0));
        assert!(stick.is_dragging());
        stick.end_drag();
        assert!(!stick.is_dragging());
        assert_eq!(stick.input(), Vec2::ZERO);
    }
}
