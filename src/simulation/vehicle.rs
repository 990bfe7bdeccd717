use crate::simulation::drive::Motion;
use crate::simulation::geometry::Vec2;
use crate::simulation::params::{VEHICLE_HEIGHT, VEHICLE_WIDTH};

/// Which side of the vehicle a sensor or wheel sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A fixed point on the body that reads the scalar field.
#[derive(Debug, Clone, Copy)]
pub struct SensorMount {
    pub position: Vec2,
    /// Which wheel this sensor's reading drives.
    pub attachment: Side,
    /// Inverts the reading (`max_sensor - reading`) before routing.
    pub inhibitory: bool,
}

/// A fixed point on the body representing one side's drive actuator.
#[derive(Debug, Clone, Copy)]
pub struct WheelMount {
    pub position: Vec2,
    /// Inverts the resulting velocity (`max_speed - velocity`).
    pub inhibitory: bool,
}

/// Number of chassis outline vertices.
pub const VERTEX_COUNT: usize = 12;

/// The vehicle's rigid body: chassis outline, sensor mounts, wheel mounts,
/// and center, all in absolute arena coordinates.
///
/// The body is rigid: offsets of every point relative to `center` are fixed
/// at construction, and the transform operations move the whole point set
/// at once. Nothing may change the relative geometry afterwards.
///
/// The chassis is a `VEHICLE_WIDTH x VEHICLE_HEIGHT` box whose front edge
/// (+y at construction) carries two small sensor stalks at `+/- width/4`.
/// Wheels sit at `+/- width/2` on the lateral axis.
#[derive(Debug, Clone)]
pub struct Vehicle {
    center: Vec2,
    vertices: [Vec2; VERTEX_COUNT],
    pub left_sensor: SensorMount,
    pub right_sensor: SensorMount,
    pub left_wheel: WheelMount,
    pub right_wheel: WheelMount,
}

impl Vehicle {
    /// Creates a vehicle centered at `(x, y)`, facing +y, with straight
    /// wiring (each sensor drives its own wheel) and no inhibition.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        let w = VEHICLE_WIDTH;
        let h = VEHICLE_HEIGHT;

        // Chassis outline, counter-clockwise from the rear-left corner,
        // with the two sensor stalks notched into the front edge.
        let vertices = [
            Vec2::new(x - w / 2.0, y - h / 2.0),
            Vec2::new(x + w / 2.0, y - h / 2.0),
            Vec2::new(x + w / 2.0, y + h / 2.0),
            Vec2::new(x + w / 4.0 + 2.0, y + h / 2.0),
            Vec2::new(x + w / 4.0 + 2.0, y + h / 2.0 + 2.0),
            Vec2::new(x + w / 4.0 - 2.0, y + h / 2.0 + 2.0),
            Vec2::new(x + w / 4.0 - 2.0, y + h / 2.0),
            Vec2::new(x - w / 4.0 + 2.0, y + h / 2.0),
            Vec2::new(x - w / 4.0 + 2.0, y + h / 2.0 + 2.0),
            Vec2::new(x - w / 4.0 - 2.0, y + h / 2.0 + 2.0),
            Vec2::new(x - w / 4.0 - 2.0, y + h / 2.0),
            Vec2::new(x - w / 2.0, y + h / 2.0),
        ];

        Self {
            center: Vec2::new(x, y),
            vertices,
            left_sensor: SensorMount {
                position: Vec2::new(x + w / 4.0, y + h / 2.0),
                attachment: Side::Left,
                inhibitory: false,
            },
            right_sensor: SensorMount {
                position: Vec2::new(x - w / 4.0, y + h / 2.0),
                attachment: Side::Right,
                inhibitory: false,
            },
            left_wheel: WheelMount {
                position: Vec2::new(x + w / 2.0, y),
                inhibitory: false,
            },
            right_wheel: WheelMount {
                position: Vec2::new(x - w / 2.0, y),
                inhibitory: false,
            },
        }
    }

    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    #[must_use]
    pub const fn vertices(&self) -> &[Vec2; VERTEX_COUNT] {
        &self.vertices
    }

    /// Applies a motion command produced by the drive controller.
    pub fn apply(&mut self, motion: &Motion) {
        match *motion {
            Motion::Rotate { center, angle } => self.rotate(center, angle),
            Motion::Translate { dx, dy } => self.translate(dx, dy),
        }
    }

    /// Rotates every body point about `pivot` by `angle` radians
    /// (counter-clockwise positive).
    pub fn rotate(&mut self, pivot: Vec2, angle: f64) {
        for vertex in &mut self.vertices {
            *vertex = vertex.rotated_about(pivot, angle);
        }
        self.center = self.center.rotated_about(pivot, angle);
        self.left_sensor.position = self.left_sensor.position.rotated_about(pivot, angle);
        self.right_sensor.position = self.right_sensor.position.rotated_about(pivot, angle);
        self.left_wheel.position = self.left_wheel.position.rotated_about(pivot, angle);
        self.right_wheel.position = self.right_wheel.position.rotated_about(pivot, angle);
    }

    /// Shifts every body point by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let delta = Vec2::new(dx, dy);
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
        self.center += delta;
        self.left_sensor.position += delta;
        self.right_sensor.position += delta;
        self.left_wheel.position += delta;
        self.right_wheel.position += delta;
    }

    /// Moves the body so that its center lands exactly on `(x, y)`,
    /// preserving every relative offset. Used for boundary wrap-around.
    pub fn relocate(&mut self, x: f64, y: f64) {
        let target = Vec2::new(x, y);
        for vertex in &mut self.vertices {
            *vertex = target + (*vertex - self.center);
        }
        self.left_sensor.position = target + (self.left_sensor.position - self.center);
        self.right_sensor.position = target + (self.right_sensor.position - self.center);
        self.left_wheel.position = target + (self.left_wheel.position - self.center);
        self.right_wheel.position = target + (self.right_wheel.position - self.center);
        self.center = target;
    }

    /// Read-only copy of the body geometry, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            center: self.center,
            vertices: self.vertices,
            left_sensor: self.left_sensor.position,
            right_sensor: self.right_sensor.position,
            left_wheel: self.left_wheel.position,
            right_wheel: self.right_wheel.position,
        }
    }
}

/// A plain-data view of the body published after each step. The renderer
/// reads snapshots only and never touches the live body.
#[derive(Debug, Clone, Copy)]
pub struct VehicleSnapshot {
    pub center: Vec2,
    pub vertices: [Vec2; VERTEX_COUNT],
    pub left_sensor: Vec2,
    pub right_sensor: Vec2,
    pub left_wheel: Vec2,
    pub right_wheel: Vec2,
}
