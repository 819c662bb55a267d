//! Axis-aligned rectangles
//!
//! A rectangle is never mutated in place; moving something (the paddle)
//! means replacing its rectangle with a translated copy.

use serde::{Deserialize, Serialize};

use super::line::Line;
use super::point::Point;
use crate::consts::EPSILON;

/// Axis-aligned rectangle anchored at its upper-left corner
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rectangle {
    pub upper_left: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(upper_left: Point, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rectangle size");
        Self {
            upper_left,
            width,
            height,
        }
    }

    #[inline]
    pub fn top_y(&self) -> f64 {
        self.upper_left.y
    }

    #[inline]
    pub fn bottom_y(&self) -> f64 {
        self.upper_left.y + self.height
    }

    #[inline]
    pub fn left_x(&self) -> f64 {
        self.upper_left.x
    }

    #[inline]
    pub fn right_x(&self) -> f64 {
        self.upper_left.x + self.width
    }

    pub fn top_line(&self) -> Line {
        Line::from_coords(self.left_x(), self.top_y(), self.right_x(), self.top_y())
    }

    pub fn bottom_line(&self) -> Line {
        Line::from_coords(self.left_x(), self.bottom_y(), self.right_x(), self.bottom_y())
    }

    pub fn left_line(&self) -> Line {
        Line::from_coords(self.left_x(), self.top_y(), self.left_x(), self.bottom_y())
    }

    pub fn right_line(&self) -> Line {
        Line::from_coords(self.right_x(), self.top_y(), self.right_x(), self.bottom_y())
    }

    /// Every point where `line` crosses an edge, checked bottom, top, left,
    /// right. A corner crossing shows up once per adjoining edge.
    pub fn intersection_points(&self, line: &Line) -> Vec<Point> {
        [
            self.bottom_line(),
            self.top_line(),
            self.left_line(),
            self.right_line(),
        ]
        .iter()
        .filter_map(|edge| line.intersection_with(edge))
        .collect()
    }

    /// Copy shifted by (dx, dy)
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            Point::new(self.upper_left.x + dx, self.upper_left.y + dy),
            self.width,
            self.height,
        )
    }

    /// Copy with its upper-left corner moved to `x`
    pub fn with_left_x(&self, x: f64) -> Self {
        Self::new(Point::new(x, self.upper_left.y), self.width, self.height)
    }

    /// True when `p` is inside the rectangle by more than epsilon on every side
    pub fn contains_strictly(&self, p: Point) -> bool {
        p.x > self.left_x() + EPSILON
            && p.x < self.right_x() - EPSILON
            && p.y > self.top_y() + EPSILON
            && p.y < self.bottom_y() - EPSILON
    }

    /// Distance from `p` to the nearest edge line of the rectangle
    pub fn distance_to_nearest_edge(&self, p: Point) -> f64 {
        let dx = (self.left_x() - p.x).max(0.0).max(p.x - self.right_x());
        let dy = (self.top_y() - p.y).max(0.0).max(p.y - self.bottom_y());
        if dx > 0.0 || dy > 0.0 {
            return dx.hypot(dy);
        }
        // Inside: nearest edge wins
        (p.x - self.left_x())
            .min(self.right_x() - p.x)
            .min(p.y - self.top_y())
            .min(self.bottom_y() - p.y)
    }
}
