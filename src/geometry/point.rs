//! 2D point with epsilon-tolerant equality

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;

/// A point in screen space (x grows right, y grows down)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }

    /// True when both coordinates differ by strictly less than [`EPSILON`].
    ///
    /// Not transitive, so `Point` deliberately does not implement `PartialEq`.
    #[inline]
    pub fn approx_eq(&self, other: Point) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_dvec2()
    }
}
