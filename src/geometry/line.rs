//! Line segments and segment/segment intersection
//!
//! The intersection routine has to survive every degenerate case a ball
//! trajectory can produce against an axis-aligned rectangle edge: zero-length
//! trajectories, vertical segments (no slope), collinear overlap and
//! endpoint-to-endpoint touches.

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::rect::Rectangle;
use crate::consts::EPSILON;

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// An ordered segment from `start` to `end`; may be degenerate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn middle(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Start and end coincide (within epsilon)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start.approx_eq(self.end)
    }

    #[inline]
    fn is_vertical(&self) -> bool {
        (self.end.x - self.start.x).abs() < EPSILON
    }

    /// Slope of a non-vertical segment
    #[inline]
    fn slope(&self) -> f64 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// Whether `p` lies inside this segment's bounding box (inclusive, exact)
    fn bounds_contain(&self, p: Point) -> bool {
        p.x <= self.start.x.max(self.end.x)
            && p.x >= self.start.x.min(self.end.x)
            && p.y <= self.start.y.max(self.end.y)
            && p.y >= self.start.y.min(self.end.y)
    }

    /// Bounding-box test widened by epsilon, for points we computed ourselves
    fn bounds_contain_approx(&self, p: Point) -> bool {
        p.x <= self.start.x.max(self.end.x) + EPSILON
            && p.x >= self.start.x.min(self.end.x) - EPSILON
            && p.y <= self.start.y.max(self.end.y) + EPSILON
            && p.y >= self.start.y.min(self.end.y) - EPSILON
    }

    /// Orientation of (p1, p2, p3).
    ///
    /// Collinearity is an exact zero test on the cross product, not an
    /// epsilon test. Nearly-collinear triples therefore count as turning.
    fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
        let cross = (p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y);

        if cross == 0.0 {
            Orientation::Collinear
        } else if cross > 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// True if the two segments share at least one point
    pub fn is_intersecting(&self, other: &Line) -> bool {
        let o1 = Self::orientation(self.start, self.end, other.start);
        let o2 = Self::orientation(self.start, self.end, other.end);
        let o3 = Self::orientation(other.start, other.end, self.start);
        let o4 = Self::orientation(other.start, other.end, self.end);

        // General case: each segment straddles the other
        if o1 != o2 && o3 != o4 {
            return true;
        }

        // Touching: an endpoint is collinear with, and within, the other segment
        (o1 == Orientation::Collinear && self.bounds_contain(other.start))
            || (o2 == Orientation::Collinear && self.bounds_contain(other.end))
            || (o3 == Orientation::Collinear && other.bounds_contain(self.start))
            || (o4 == Orientation::Collinear && other.bounds_contain(self.end))
    }

    /// True if this segment intersects both `first` and `second`
    pub fn is_intersecting_both(&self, first: &Line, second: &Line) -> bool {
        first.is_intersecting(self) && second.is_intersecting(self)
    }

    /// The single point shared by the two segments.
    ///
    /// Returns `None` when the segments are disjoint, when either one is
    /// degenerate, and when they overlap along a stretch of points. The last
    /// case (infinitely many intersections) is a different situation from "no
    /// intersection" but both collapse into `None`: callers only ever need a
    /// unique contact point.
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        if !self.is_intersecting(other) {
            return None;
        }
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }

        let vertical_self = self.is_vertical();
        let vertical_other = other.is_vertical();

        if vertical_self && vertical_other {
            return self.vertical_touch_point(other);
        }

        let slope_self = if vertical_self { 0.0 } else { self.slope() };
        let slope_other = if vertical_other { 0.0 } else { other.slope() };

        if vertical_self == vertical_other && (slope_self - slope_other).abs() < EPSILON {
            if let Some(shared) = self.collinear_touch_point(other) {
                return shared;
            }
        }

        // Endpoint-to-endpoint touch
        if self.start.approx_eq(other.start) || self.start.approx_eq(other.end) {
            return Some(self.start);
        }
        if self.end.approx_eq(other.start) || self.end.approx_eq(other.end) {
            return Some(self.end);
        }

        if vertical_self {
            let x = self.start.x;
            let y = slope_other * (x - other.start.x) + other.start.y;
            return Some(Point::new(x, y));
        }
        if vertical_other {
            let x = other.start.x;
            let y = slope_self * (x - self.start.x) + self.start.y;
            return Some(Point::new(x, y));
        }

        let x = (self.start.x * slope_self - other.start.x * slope_other + other.start.y
            - self.start.y)
            / (slope_self - slope_other);
        let y = slope_self * (x - self.start.x) + self.start.y;
        let point = Point::new(x, y);

        self.bounds_contain_approx(point).then_some(point)
    }

    /// Both segments vertical and collinear: either a single abutting
    /// endpoint or an overlapping stretch.
    fn vertical_touch_point(&self, other: &Line) -> Option<Point> {
        let (self_lo, self_hi) = min_max(self.start.y, self.end.y);
        let (other_lo, other_hi) = min_max(other.start.y, other.end.y);

        if self_lo.max(other_lo) < self_hi.min(other_hi) - EPSILON {
            // Overlapping y-ranges: infinitely many intersections
            return None;
        }

        [self.start, self.end].into_iter().find(|p| {
            (p.y - other.start.y).abs() < EPSILON || (p.y - other.end.y).abs() < EPSILON
        })
    }

    /// Equal slopes. `Some(result)` settles the query, `None` means no shared
    /// configuration applies and the caller keeps going.
    fn collinear_touch_point(&self, other: &Line) -> Option<Option<Point>> {
        // (shared point on self, self's far end, other's far end)
        let shared = if self.start.approx_eq(other.start) {
            Some((self.start, self.end, other.end))
        } else if self.end.approx_eq(other.end) {
            Some((self.end, self.start, other.start))
        } else if self.end.approx_eq(other.start) {
            Some((self.end, self.start, other.end))
        } else if self.start.approx_eq(other.end) {
            Some((self.start, self.end, other.start))
        } else {
            None
        };

        if let Some((point, self_far, other_far)) = shared {
            // Overlapping past the shared point means a stretch, not a point
            let overlaps = self.bounds_contain(other_far) || other.bounds_contain(self_far);
            return Some(if overlaps { None } else { Some(point) });
        }

        if self.bounds_contain(other.start)
            || self.bounds_contain(other.end)
            || other.bounds_contain(self.start)
            || other.bounds_contain(self.end)
        {
            return Some(None);
        }

        None
    }

    /// The intersection with `rect`'s edges nearest to this segment's start.
    ///
    /// A later point only replaces the current best when it is closer by more
    /// than epsilon, so coincident corner hits resolve to the first edge found.
    pub fn closest_intersection_to_start(&self, rect: &Rectangle) -> Option<Point> {
        let mut points = rect.intersection_points(self).into_iter();
        let mut closest = points.next()?;

        for p in points {
            if p.distance(self.start) + EPSILON < closest.distance(self.start) {
                closest = p;
            }
        }

        Some(closest)
    }
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
