use crate::simulation::geometry::Vec2;
use crate::simulation::params::{MAX_SENSOR, MAX_SPEED, SPEED_RATIO};
use crate::simulation::vehicle::{Side, Vehicle};

/// Rigid-body motion derived from one drive step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Rotate the whole body about `center` by `angle` radians
    /// (counter-clockwise positive).
    Rotate { center: Vec2, angle: f64 },
    /// Shift the whole body by `(dx, dy)`.
    Translate { dx: f64, dy: f64 },
}

/// Converts two sensor readings into wheel velocities and the resulting
/// rigid-body motion.
///
/// The wiring flags (attachment, inhibition) live on the vehicle's mounts;
/// this controller holds only the numeric configuration. Equal wheel
/// velocities produce a pure translation along the body's forward axis;
/// unequal velocities produce a pure rotation about a turn center on the
/// wheel axle line.
#[derive(Debug, Clone, Copy)]
pub struct DriveController {
    pub speed_ratio: f64,
    pub max_speed: f64,
    pub max_sensor: f64,
}

impl Default for DriveController {
    fn default() -> Self {
        Self {
            speed_ratio: SPEED_RATIO,
            max_speed: MAX_SPEED,
            max_sensor: MAX_SENSOR,
        }
    }
}

impl DriveController {
    /// Derives the motion for one step of `duration` time units from the
    /// raw right and left sensor readings.
    ///
    /// Readings are clamped to `[0, max_sensor]` before any wiring is
    /// applied, so an infinite reading from a field singularity saturates
    /// instead of propagating, and the inhibitory inversion
    /// `max_sensor - reading` stays inside the same range.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn step(
        &self,
        vehicle: &Vehicle,
        right_reading: f64,
        left_reading: f64,
        duration: f64,
    ) -> Motion {
        let right = self.effective_reading(right_reading, vehicle.right_sensor.inhibitory);
        let left = self.effective_reading(left_reading, vehicle.left_sensor.inhibitory);

        // Route each reading to the wheel its sensor is attached to. A
        // wheel may receive zero, one, or two contributions.
        let mut v_right = 0.0;
        let mut v_left = 0.0;
        match vehicle.right_sensor.attachment {
            Side::Right => v_right += self.speed_ratio * right,
            Side::Left => v_left += self.speed_ratio * right,
        }
        match vehicle.left_sensor.attachment {
            Side::Left => v_left += self.speed_ratio * left,
            Side::Right => v_right += self.speed_ratio * left,
        }

        // Saturate from above only; with non-negative readings the
        // velocities are already non-negative.
        v_right = v_right.min(self.max_speed);
        v_left = v_left.min(self.max_speed);

        if vehicle.right_wheel.inhibitory {
            v_right = self.max_speed - v_right;
        }
        if vehicle.left_wheel.inhibitory {
            v_left = self.max_speed - v_left;
        }

        let v_avg = (v_right + v_left) / 2.0;

        // Axle direction: from body center toward the right wheel. The
        // wheel separation is twice its length.
        let axle = vehicle.right_wheel.position - vehicle.center();

        if v_left == v_right {
            // Equal speeds: straight ahead, perpendicular to the axle.
            let direction = axle.perp().unit();
            let distance = v_avg * duration;
            Motion::Translate {
                dx: distance * direction.x,
                dy: distance * direction.y,
            }
        } else {
            // Unequal speeds: circular arc about a turn center on the axle
            // line. A negative radius puts the center on the left-wheel
            // side. The equal-speed case never reaches this branch, so the
            // ratio denominator cannot be zero.
            let track = 2.0 * axle.norm();
            let turn_radius = if v_right == 0.0 {
                track / 2.0
            } else {
                track / 2.0 + track / (v_left / v_right - 1.0)
            };
            let omega = v_avg / turn_radius;
            Motion::Rotate {
                center: vehicle.center() + axle.unit() * turn_radius,
                angle: omega * duration,
            }
        }
    }

    fn effective_reading(&self, reading: f64, inhibitory: bool) -> f64 {
        let clamped = reading.clamp(0.0, self.max_sensor);
        if inhibitory {
            self.max_sensor - clamped
        } else {
            clamped
        }
    }
}
