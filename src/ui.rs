// src/ui.rs

use glam::Vec2;
use roomwalk::{DoorStatus, FrameInput, Joystick};

const STICK_RADIUS: f32 = 50.0;
const KNOB_RADIUS: f32 = 20.0;
const STICK_MARGIN: f32 = 100.0;

/// Driver-side input state: the two virtual joysticks plus the pending door
/// toggle request. Mutated by the egui overlay every frame, drained into a
/// `FrameInput` at each simulation tick.
pub struct UiState {
    pub move_stick: Joystick,
    pub view_stick: Joystick,
    toggle_requested: bool,
}

impl UiState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            move_stick: Joystick::new(Vec2::new(STICK_MARGIN, height - STICK_MARGIN), STICK_RADIUS),
            view_stick: Joystick::new(
                Vec2::new(width - STICK_MARGIN, height - STICK_MARGIN),
                STICK_RADIUS,
            ),
            toggle_requested: false,
        }
    }

    /// Re-pin both sticks to the screen corners. Any in-flight drag is
    /// dropped, the same as releasing.
    pub fn reanchor(&mut self, width: f32, height: f32) {
        self.move_stick =
            Joystick::new(Vec2::new(STICK_MARGIN, height - STICK_MARGIN), STICK_RADIUS);
        self.view_stick =
            Joystick::new(Vec2::new(width - STICK_MARGIN, height - STICK_MARGIN), STICK_RADIUS);
    }

    pub fn take_frame_input(&mut self) -> FrameInput {
        FrameInput {
            view: self.view_stick.input(),
            movement: self.move_stick.input(),
            toggle_door: std::mem::take(&mut self.toggle_requested),
        }
    }
}

pub fn draw_overlay(ctx: &egui::Context, state: &mut UiState, status: DoorStatus) {
    egui::Area::new(egui::Id::new("door_status"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 10.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(status.label()).color(egui::Color32::WHITE).size(16.0),
            );
        });

    egui::Area::new(egui::Id::new("door_button"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -40.0))
        .show(ctx, |ui| {
            // Always clickable; the simulation gates the toggle on Ready.
            if ui.button("Toggle Door").clicked() {
                state.toggle_requested = true;
            }
        });

    joystick_widget(ctx, "move_stick", &mut state.move_stick);
    joystick_widget(ctx, "view_stick", &mut state.view_stick);
    draw_crosshair(ctx);
}

fn joystick_widget(ctx: &egui::Context, id: &str, stick: &mut Joystick) {
    let center = stick.center();
    let radius = stick.radius();
    egui::Area::new(egui::Id::new(id))
        .fixed_pos(egui::pos2(center.x - radius, center.y - radius))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let (_rect, response) = ui
                .allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::drag());

            if let Some(pos) = response.interact_pointer_pos() {
                let pointer = Vec2::new(pos.x, pos.y);
                if response.drag_started() && stick.contains(pointer) {
                    stick.start_drag(pointer);
                } else if response.dragged() && stick.is_dragging() {
                    stick.update_drag(pointer);
                }
            }
            if response.drag_stopped() && stick.is_dragging() {
                stick.end_drag();
            }

            let painter = ui.painter();
            painter.circle_filled(
                egui::pos2(center.x, center.y),
                radius,
                egui::Color32::from_rgba_unmultiplied(200, 200, 200, 110),
            );
            let knob = stick.knob_position();
            painter.circle_filled(
                egui::pos2(knob.x, knob.y),
                KNOB_RADIUS,
                egui::Color32::from_rgba_unmultiplied(110, 110, 110, 220),
            );
        });
}

fn draw_crosshair(ctx: &egui::Context) {
    let center = ctx.screen_rect().center();
    let painter =
        ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("crosshair")));
    let stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    painter.line_segment(
        [egui::pos2(center.x - 10.0, center.y), egui::pos2(center.x + 10.0, center.y)],
        stroke,
    );
    painter.line_segment(
        [egui::pos2(center.x, center.y - 10.0), egui::pos2(center.x, center.y + 10.0)],
        stroke,
    );
}
