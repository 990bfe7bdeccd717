//! 2D point and vector arithmetic for the rigid-body math.

use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D point or displacement in arena coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. A zero vector stays zero.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn unit(self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            Self::default()
        } else {
            Self::new(self.x / n, self.y / n)
        }
    }

    /// Perpendicular vector, rotated a quarter turn clockwise.
    #[inline]
    #[must_use]
    pub const fn perp(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotates the point about `pivot` by `angle` radians, counter-clockwise
    /// positive, using the standard 2D rotation matrix.
    #[must_use]
    pub fn rotated_about(self, pivot: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self::new(dx * cos - dy * sin + pivot.x, dx * sin + dy * cos + pivot.y)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).norm()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
