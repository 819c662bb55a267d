//! Static rectangular obstacles

use super::ball::Ball;
use super::collision::Collidable;
use super::color::Color;
use super::velocity::Velocity;
use crate::consts::EPSILON;
use crate::geometry::{Point, Rectangle};
use crate::listeners::{HitBlock, HitNotifier, SharedHitListener};

/// A block: walls, the death zone and the breakable bricks are all blocks
#[derive(Debug)]
pub struct Block {
    rect: Rectangle,
    color: Color,
    listeners: HitNotifier,
    removal_requested: bool,
}

impl Block {
    pub fn new(rect: Rectangle, color: Color) -> Self {
        Self {
            rect,
            color,
            listeners: HitNotifier::default(),
            removal_requested: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn add_hit_listener(&mut self, listener: SharedHitListener) {
        self.listeners.add(listener);
    }

    pub fn remove_hit_listener(&mut self, listener: &SharedHitListener) {
        self.listeners.remove(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Camouflage: a ball wearing the block's color neither scores nor breaks it
    pub fn ball_color_match(&self, ball: &Ball) -> bool {
        self.color == ball.color()
    }

    /// Returns and clears a pending removal request from the last hit
    pub(crate) fn take_removal_request(&mut self) -> bool {
        std::mem::take(&mut self.removal_requested)
    }

    fn notify_hit(&mut self, hitter: &mut Ball) {
        let block = HitBlock {
            rect: self.rect,
            color: self.color,
        };
        if self.listeners.notify(block, hitter) {
            self.removal_requested = true;
        }
    }
}

impl Collidable for Block {
    fn collision_rectangle(&self) -> Rectangle {
        self.rect
    }

    fn hit(&mut self, hitter: &mut Ball, collision_point: Point, velocity: Velocity) -> Velocity {
        let rect = self.rect;

        // How close the hit is to each edge
        let top = (collision_point.y - rect.top_y()).abs();
        let bottom = (collision_point.y - rect.bottom_y()).abs();
        let left = (collision_point.x - rect.left_x()).abs();
        let right = (collision_point.x - rect.right_x()).abs();

        let min = top.min(bottom).min(left).min(right);

        // Flip exactly one component; the nearest edge decides which
        let reflected = if min <= EPSILON {
            if min == top || min == bottom {
                velocity.invert_dy()
            } else {
                velocity.invert_dx()
            }
        } else {
            // No edge within epsilon (fuzzy corner): bounce vertically
            velocity.invert_dy()
        };

        if !self.ball_color_match(hitter) {
            self.notify_hit(hitter);
        }

        reflected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::{BlockRemover, Counter, ScoreTrackingListener, shared};

    fn block(color: Color) -> Block {
        Block::new(Rectangle::new(Point::new(110.0, 90.0), 20.0, 20.0), color)
    }

    fn ball(color: Color) -> Ball {
        Ball::new(Point::new(100.0, 100.0), 5.0, color)
    }

    #[test]
    fn test_left_edge_inverts_dx() {
        let mut b = block(Color::BLACK);
        let v = b.hit(&mut ball(Color::BLACK), Point::new(110.0, 100.0), Velocity::new(10.0, 2.0));
        assert_eq!(v, Velocity::new(-10.0, 2.0));
    }

    #[test]
    fn test_right_edge_inverts_dx() {
        let mut b = block(Color::BLACK);
        let v = b.hit(&mut ball(Color::BLACK), Point::new(130.0, 95.0), Velocity::new(-4.0, 1.0));
        assert_eq!(v, Velocity::new(4.0, 1.0));
    }

    #[test]
    fn test_top_and_bottom_invert_dy() {
        let mut b = block(Color::BLACK);
        let v = b.hit(&mut ball(Color::BLACK), Point::new(120.0, 90.0), Velocity::new(1.0, 3.0));
        assert_eq!(v, Velocity::new(1.0, -3.0));
        let v = b.hit(&mut ball(Color::BLACK), Point::new(115.0, 110.0), Velocity::new(1.0, -3.0));
        assert_eq!(v, Velocity::new(1.0, 3.0));
    }

    #[test]
    fn test_exact_corner_prefers_vertical() {
        let mut b = block(Color::BLACK);
        // Top and left are both at distance zero
        let v = b.hit(&mut ball(Color::BLACK), Point::new(110.0, 90.0), Velocity::new(2.0, 2.0));
        assert_eq!(v, Velocity::new(2.0, -2.0));
    }

    #[test]
    fn test_point_off_every_edge_falls_back_to_vertical() {
        let mut b = block(Color::BLACK);
        let v = b.hit(&mut ball(Color::BLACK), Point::new(120.0, 100.0), Velocity::new(2.0, 5.0));
        assert_eq!(v, Velocity::new(2.0, -5.0));
    }

    #[test]
    fn test_color_camouflage_skips_listeners() {
        let red = Color::rgb(255, 0, 0);
        let score = Counter::default();
        let mut b = block(red);
        b.add_hit_listener(shared(ScoreTrackingListener::new(score.clone(), 5)));

        // Same color: still reflected, no score
        let v = b.hit(&mut ball(red), Point::new(110.0, 100.0), Velocity::new(10.0, 0.0));
        assert_eq!(v, Velocity::new(-10.0, 0.0));
        assert_eq!(score.value(), 0);
        assert_eq!(b.listener_count(), 1);

        // Different color: scored
        let v = b.hit(&mut ball(Color::BLACK), Point::new(110.0, 100.0), Velocity::new(10.0, 0.0));
        assert_eq!(v, Velocity::new(-10.0, 0.0));
        assert_eq!(score.value(), 5);
    }

    #[test]
    fn test_block_remover_requests_removal() {
        let remaining = Counter::new(1);
        let mut b = block(Color::rgb(1, 2, 3));
        let remover = shared(BlockRemover::new(remaining.clone()));
        b.add_hit_listener(remover.clone());

        let mut hitter = ball(Color::BLACK);
        b.hit(&mut hitter, Point::new(110.0, 100.0), Velocity::new(1.0, 0.0));
        assert!(b.take_removal_request());
        assert!(!b.take_removal_request());
        assert_eq!(remaining.value(), 0);
        assert_eq!(hitter.color(), Color::rgb(1, 2, 3));
        assert_eq!(b.listener_count(), 0);
    }

    #[test]
    fn test_removed_listener_is_not_notified() {
        let remaining = Counter::new(1);
        let score = Counter::default();
        let mut b = block(Color::rgb(1, 2, 3));
        let remover = shared(BlockRemover::new(remaining.clone()));
        b.add_hit_listener(remover.clone());
        b.add_hit_listener(shared(ScoreTrackingListener::new(score.clone(), 5)));
        b.remove_hit_listener(&remover);
        assert_eq!(b.listener_count(), 1);

        let mut hitter = ball(Color::BLACK);
        b.hit(&mut hitter, Point::new(110.0, 100.0), Velocity::new(1.0, 0.0));
        // Scored, but the block stays and the ball keeps its color
        assert_eq!(score.value(), 5);
        assert!(!b.take_removal_request());
        assert_eq!(remaining.value(), 1);
        assert_eq!(hitter.color(), Color::BLACK);
    }
}
