//! The player's paddle
//!
//! Reflects like a block on its sides, but a hit on the top or bottom sends
//! the ball off at one of five fixed angles depending on where it landed.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Collidable;
use super::color::Color;
use super::velocity::Velocity;
use crate::consts::{EPSILON, PADDLE_ZONE_ANGLES};
use crate::geometry::{Point, Rectangle};

/// Movement request for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub left: bool,
    pub right: bool,
}

/// Player-controlled paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    rect: Rectangle,
    color: Color,
    speed: f64,
}

impl Paddle {
    pub fn new(rect: Rectangle, color: Color, speed: f64) -> Self {
        Self { rect, color, speed }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Horizontal center of the paddle
    pub fn center_x(&self) -> f64 {
        self.rect.left_x() + self.rect.width / 2.0
    }

    pub fn move_left(&mut self) {
        self.rect = self.rect.translated(-self.speed, 0.0);
    }

    pub fn move_right(&mut self) {
        self.rect = self.rect.translated(self.speed, 0.0);
    }

    /// Advance one tick: wrap to the opposite side if the paddle left
    /// `[0, arena_width]`, then apply input.
    pub fn update(&mut self, input: PaddleInput, arena_width: f64) {
        if self.rect.left_x() < 0.0 {
            self.rect = self.rect.with_left_x(arena_width - self.rect.width);
        }
        if self.rect.right_x() > arena_width {
            self.rect = self.rect.with_left_x(0.0);
        }

        if input.left {
            self.move_left();
        }
        if input.right {
            self.move_right();
        }
    }

    /// Which of the five top-surface zones `x` falls in (0 = leftmost).
    ///
    /// Zones are half-open `[start, end)`, so a point exactly on a boundary
    /// belongs to the zone on its right. Points past either end clamp.
    pub fn zone_for(&self, x: f64) -> usize {
        let zone_width = self.rect.width / PADDLE_ZONE_ANGLES.len() as f64;
        if zone_width <= 0.0 {
            return PADDLE_ZONE_ANGLES.len() / 2;
        }

        let zone = ((x - self.rect.left_x()) / zone_width).floor();
        zone.clamp(0.0, (PADDLE_ZONE_ANGLES.len() - 1) as f64) as usize
    }
}

impl Collidable for Paddle {
    fn collision_rectangle(&self) -> Rectangle {
        self.rect
    }

    fn hit(&mut self, _hitter: &mut Ball, collision_point: Point, velocity: Velocity) -> Velocity {
        let rect = self.rect;

        let on_top = (collision_point.y - rect.top_y()).abs() < EPSILON;
        let on_bottom = (collision_point.y - rect.bottom_y()).abs() < EPSILON;
        if on_top || on_bottom {
            // The zone angle replaces the plain vertical flip; only speed carries over
            let speed = velocity.invert_dy().speed();
            let angle = PADDLE_ZONE_ANGLES[self.zone_for(collision_point.x)];
            log::debug!("Paddle hit at x={:.2}, leaving at {}°", collision_point.x, angle);
            return Velocity::from_angle_and_speed(angle, speed);
        }

        let on_left = (collision_point.x - rect.left_x()).abs() < EPSILON;
        let on_right = (collision_point.x - rect.right_x()).abs() < EPSILON;
        if on_left || on_right {
            return velocity.invert_dx();
        }

        velocity
    }
}
