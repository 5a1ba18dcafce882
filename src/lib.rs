// src/lib.rs

pub mod camera;
pub mod clip;
pub mod geometry;
pub mod interact;
pub mod joystick;
pub mod pipeline;
pub mod scene;
pub mod sim;

pub use camera::{Camera, Projection};
pub use geometry::{Point2, Point3, Polygon, ScreenPolygon};
pub use interact::DoorStatus;
pub use joystick::Joystick;
pub use scene::{PolygonSource, RoomConfig};
pub use sim::{FrameInput, SimState};
