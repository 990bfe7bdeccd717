//! Simulation constants.

pub const ARENA_WIDTH: f64 = 512.0;
pub const ARENA_HEIGHT: f64 = 512.0;

/// The arena is divided into an 8x8 grid; placement indices run 0..=6.
pub const GRID_DIVISIONS: f64 = 8.0;
pub const MAX_CELL_INDEX: u32 = 6;

pub const VEHICLE_WIDTH: f64 = 30.0;
pub const VEHICLE_HEIGHT: f64 = 20.0;

/// Conversion rate between a sensor reading and the speed of a wheel.
pub const SPEED_RATIO: f64 = 0.15;
pub const MAX_SPEED: f64 = 1.0;
pub const MAX_SENSOR: f64 = 300.0;

pub const SOURCE_STRENGTH: f64 = 2.0;

/// Duration of one simulation step, in arena time units.
pub const TIME_QUANTUM: f64 = 10.0;

