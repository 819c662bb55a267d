//! Block Breaker - collision geometry and ball physics for a Breakout-style game
//!
//! Core modules:
//! - `geometry`: Points, line segments and axis-aligned rectangles
//! - `sim`: Deterministic simulation (collision environment, ball, blocks, paddle, tick)
//! - `listeners`: Hit notifications, counters and removal bookkeeping
//! - `settings`: Data-driven game configuration

pub mod geometry;
pub mod listeners;
pub mod settings;
pub mod sim;

pub use geometry::{Line, Point, Rectangle};
pub use settings::GameConfig;

use glam::DVec2;

/// Engine-wide constants
pub mod consts {
    /// Tolerance for every position comparison in the engine
    pub const EPSILON: f64 = 0.00001;

    /// Outgoing angles (degrees) for the five paddle zones, left to right.
    /// 270° is straight up in screen coordinates (y grows downward).
    pub const PADDLE_ZONE_ANGLES: [f64; 5] = [240.0, 255.0, 270.0, 285.0, 300.0];

    /// Nominal frame rate; converts tick counts to seconds of play
    pub const FRAMES_PER_SECOND: u32 = 60;
}

/// Unit vector for an angle given in degrees
#[inline]
pub fn direction_from_degrees(angle: f64) -> DVec2 {
    let radians = angle.to_radians();
    DVec2::new(radians.cos(), radians.sin())
}

/// Angle of a vector in degrees, normalized to [0, 360)
#[inline]
pub fn degrees_of(v: DVec2) -> f64 {
    v.y.atan2(v.x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip_angles() {
        for angle in consts::PADDLE_ZONE_ANGLES {
            let dir = direction_from_degrees(angle);
            assert!((dir.length() - 1.0).abs() < 1e-12);
            assert!((degrees_of(dir) - angle).abs() < 1e-9);
        }
    }

    #[test]
    fn test_straight_up_is_negative_y() {
        let up = direction_from_degrees(270.0);
        assert!(up.x.abs() < 1e-12);
        assert!((up.y + 1.0).abs() < 1e-12);
    }
}
