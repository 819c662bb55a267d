//! The ball: the only body that moves through the collision environment

use serde::{Deserialize, Serialize};

use super::Sprite;
use super::collision::{Collidable, CollisionEnvironment, Obstacle};
use super::color::Color;
use super::velocity::Velocity;
use crate::consts::EPSILON;
use crate::geometry::{Line, Point};

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    id: u32,
    center: Point,
    radius: f64,
    velocity: Velocity,
    color: Color,
    /// Cleared when a listener takes the ball out of play
    alive: bool,
}

impl Ball {
    pub fn new(center: Point, radius: f64, color: Color) -> Self {
        Self {
            id: 0,
            center,
            radius,
            velocity: Velocity::ZERO,
            color,
            alive: true,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the ball for removal; it stops moving and is dropped at the end
    /// of the tick
    pub fn remove_from_game(&mut self) {
        self.alive = false;
    }

    /// Segment the center would travel this tick if nothing were in the way
    pub fn trajectory(&self) -> Line {
        Line::new(self.center, self.velocity.apply_to_point(self.center))
    }

    /// Advance one tick against `env`.
    ///
    /// Without a collision the ball moves its full velocity. With one it
    /// stops `radius` short of the collision point, measured along the
    /// trajectory, then takes the obstacle's reflected velocity. A paddle hit
    /// additionally snaps the ball to just above the paddle's top surface.
    ///
    /// The back-off runs along the direction of travel, not along the edge
    /// normal. A perpendicular approach ends exactly `radius` from the edge;
    /// an oblique one ends only `radius * sin(angle to the edge)` from it,
    /// still outside the rectangle.
    pub fn move_one_step(&mut self, env: &mut CollisionEnvironment) {
        let trajectory = self.trajectory();
        let start = trajectory.start;

        let Some(info) = env.closest_collision(&trajectory) else {
            self.center = trajectory.end;
            return;
        };
        let collision_point = info.collision_point;

        // Back off by the radius along the direction of travel
        let total_distance = trajectory.length();
        let travel = (start.distance(collision_point) - self.radius).max(0.0);
        let ratio = if total_distance == 0.0 {
            0.0
        } else {
            travel / total_distance
        };
        self.center = self.velocity.apply_fraction(start, ratio);

        let paddle_top = env
            .get(info.collision_object)
            .and_then(Obstacle::as_paddle)
            .map(|paddle| paddle.collision_rectangle().top_y());

        let incoming = self.velocity;
        let reflected = env.hit(info.collision_object, self, collision_point, incoming);
        self.velocity = reflected;

        if let Some(top) = paddle_top {
            // Deterministic snap so a grazing ball cannot re-enter the paddle next tick
            self.center = Point::new(collision_point.x, top - self.radius - EPSILON);
        }

        log::debug!(
            "Ball {} hit {:?} at ({:.3}, {:.3}), velocity now ({:.3}, {:.3})",
            self.id,
            info.collision_object,
            collision_point.x,
            collision_point.y,
            self.velocity.dx(),
            self.velocity.dy()
        );
    }
}

impl Sprite for Ball {
    fn time_passed(&mut self, env: &mut CollisionEnvironment) {
        if self.alive {
            self.move_one_step(env);
        }
    }
}
