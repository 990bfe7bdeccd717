pub mod drive;
pub mod engine;
pub mod error;
pub mod field;
pub mod geometry;
pub mod params;
pub mod vehicle;

pub use drive::{DriveController, Motion};
pub use engine::Simulation;
pub use error::FieldError;
pub use field::{SensorField, Source};
pub use geometry::Vec2;
pub use vehicle::{SensorMount, Side, Vehicle, VehicleSnapshot, WheelMount};
