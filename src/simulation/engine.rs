use tracing::debug;

use crate::simulation::drive::DriveController;
use crate::simulation::error::FieldError;
use crate::simulation::field::{SensorField, Source};
use crate::simulation::params::{ARENA_HEIGHT, ARENA_WIDTH, TIME_QUANTUM};
use crate::simulation::vehicle::{Side, Vehicle, VehicleSnapshot};

/// The simulator: one field, one vehicle, one drive controller, and the
/// Idle/Running state machine.
///
/// The driver owns a `Simulation` value and calls [`Simulation::tick`] on a
/// fixed cadence; [`Simulation::step`] is the same computation without the
/// run-state gate, for deterministic testing. Each step is a brief
/// synchronous computation; pausing is simply ceasing to tick.
pub struct Simulation {
    pub field: SensorField,
    pub vehicle: Vehicle,
    pub drive: DriveController,
    running: bool,
    time_quantum: f64,
}

impl Simulation {
    #[must_use]
    pub fn new() -> Self {
        Self::with_arena(ARENA_WIDTH, ARENA_HEIGHT)
    }

    /// Creates an idle simulation with an empty field and a fresh vehicle
    /// at the arena center.
    #[must_use]
    pub fn with_arena(width: f64, height: f64) -> Self {
        Self {
            field: SensorField::new(width, height),
            vehicle: Vehicle::new(width / 2.0, height / 2.0),
            drive: DriveController::default(),
            running: false,
            time_quantum: TIME_QUANTUM,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        debug!("simulation started");
    }

    pub fn pause(&mut self) {
        self.running = false;
        debug!("simulation paused");
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Discards every source and replaces the vehicle with a fresh one at
    /// the arena center. Leaves the simulation idle.
    pub fn reset(&mut self) {
        self.pause();
        self.field.clear();
        self.vehicle = Vehicle::new(self.field.width / 2.0, self.field.height / 2.0);
        debug!("simulation reset");
    }

    /// Places a source at a continuous arena position.
    pub fn add_source(&mut self, x: f64, y: f64) -> Result<Source, FieldError> {
        let source = self.field.add_source(x, y)?;
        debug!(x, y, "source placed");
        Ok(source)
    }

    /// Places a source at a grid cell (indices `0..=6`).
    pub fn add_source_at_cell(&mut self, col: u32, row: u32) -> Result<Source, FieldError> {
        let source = self.field.add_source_at_cell(col, row)?;
        debug!(col, row, "source placed");
        Ok(source)
    }

    /// Sets one sensor's wiring: which wheel it drives and whether its
    /// reading is inverted.
    pub fn configure_sensor(&mut self, side: Side, attachment: Side, inhibitory: bool) {
        let sensor = match side {
            Side::Left => &mut self.vehicle.left_sensor,
            Side::Right => &mut self.vehicle.right_sensor,
        };
        sensor.attachment = attachment;
        sensor.inhibitory = inhibitory;
    }

    /// Sets one wheel's velocity inversion flag.
    pub fn configure_wheel(&mut self, side: Side, inhibitory: bool) {
        let wheel = match side {
            Side::Left => &mut self.vehicle.left_wheel,
            Side::Right => &mut self.vehicle.right_wheel,
        };
        wheel.inhibitory = inhibitory;
    }

    /// Advances the simulation by one step of `duration` time units,
    /// regardless of the run state.
    ///
    /// Reads the field at both sensor positions, derives and applies the
    /// motion, then wraps the vehicle at the arena bounds.
    pub fn step(&mut self, duration: f64) -> VehicleSnapshot {
        let right = self.field.evaluate(
            self.vehicle.right_sensor.position.x,
            self.vehicle.right_sensor.position.y,
        );
        let left = self.field.evaluate(
            self.vehicle.left_sensor.position.x,
            self.vehicle.left_sensor.position.y,
        );

        let motion = self.drive.step(&self.vehicle, right, left, duration);
        self.vehicle.apply(&motion);
        self.wrap();

        self.vehicle.snapshot()
    }

    /// Advances by one time quantum if the simulation is running.
    pub fn tick(&mut self) -> Option<VehicleSnapshot> {
        if self.running {
            Some(self.step(self.time_quantum))
        } else {
            None
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> VehicleSnapshot {
        self.vehicle.snapshot()
    }

    // One correction per axis per step; a step never displaces the body
    // by more than one arena dimension.
    #[allow(clippy::float_cmp)]
    fn wrap(&mut self) {
        let center = self.vehicle.center();
        let mut x = center.x;
        let mut y = center.y;
        if x < 0.0 {
            x += self.field.width;
        }
        if x > self.field.width {
            x -= self.field.width;
        }
        if y < 0.0 {
            y += self.field.height;
        }
        if y > self.field.height {
            y -= self.field.height;
        }
        if x != center.x || y != center.y {
            self.vehicle.relocate(x, y);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
