//! Per-tick displacement vector

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::direction_from_degrees;
use crate::geometry::Point;

/// Displacement applied to a body every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub delta: DVec2,
}

impl Velocity {
    pub const ZERO: Self = Self { delta: DVec2::ZERO };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self {
            delta: DVec2::new(dx, dy),
        }
    }

    /// Velocity pointing at `angle` degrees with magnitude `speed`.
    ///
    /// Screen convention: 0° is right, 90° is down, 270° is up.
    pub fn from_angle_and_speed(angle: f64, speed: f64) -> Self {
        Self {
            delta: direction_from_degrees(angle) * speed,
        }
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.delta.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.delta.y
    }

    /// Magnitude of the displacement
    #[inline]
    pub fn speed(&self) -> f64 {
        self.delta.length()
    }

    /// Move `p` by one tick of this velocity
    #[inline]
    pub fn apply_to_point(&self, p: Point) -> Point {
        (p.to_dvec2() + self.delta).into()
    }

    /// Move `p` by a fraction of one tick
    #[inline]
    pub fn apply_fraction(&self, p: Point, ratio: f64) -> Point {
        (p.to_dvec2() + self.delta * ratio).into()
    }

    /// Horizontal component flipped
    #[inline]
    pub fn invert_dx(self) -> Self {
        Self::new(-self.delta.x, self.delta.y)
    }

    /// Vertical component flipped
    #[inline]
    pub fn invert_dy(self) -> Self {
        Self::new(self.delta.x, -self.delta.y)
    }

    /// Same direction rotated by `degrees`
    pub fn rotated(self, degrees: f64) -> Self {
        Self {
            delta: DVec2::from_angle(degrees.to_radians()).rotate(self.delta),
        }
    }
}

impl From<DVec2> for Velocity {
    fn from(delta: DVec2) -> Self {
        Self { delta }
    }
}
