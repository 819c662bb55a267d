//! Game state: one level wired into a collision environment
//!
//! Owns the environment, the balls and the shared counters that the hit
//! listeners update. Everything here is deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Sprite;
use super::ball::Ball;
use super::block::Block;
use super::collision::{CollidableId, CollisionEnvironment, Obstacle};
use super::layout::{self, SPIRAL};
use super::paddle::Paddle;
use super::tick::GameOutcome;
use super::velocity::Velocity;
use crate::listeners::{BallRemover, BlockRemover, Counter, ScoreTrackingListener, shared};
use crate::settings::GameConfig;

/// Complete game state for a single level
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub env: CollisionEnvironment,
    /// Balls in play, in id order
    pub balls: Vec<Ball>,
    paddle_id: CollidableId,
    pub score: Counter,
    pub remaining_blocks: Counter,
    pub remaining_balls: Counter,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set once the level has ended
    pub outcome: Option<GameOutcome>,
}

impl GameState {
    /// Build the classic spiral level
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_pattern(config, seed, &SPIRAL)
    }

    /// Build a level whose breakable blocks follow `pattern` (rows of cells,
    /// `true` = block)
    pub fn with_pattern<R: AsRef<[bool]>>(config: GameConfig, seed: u64, pattern: &[R]) -> Self {
        let mut env = CollisionEnvironment::new();
        let score = Counter::default();
        let remaining_blocks = Counter::default();
        let remaining_balls = Counter::default();

        for rect in layout::border_rects(&config) {
            env.add_collidable(Block::new(rect, layout::BORDER_COLOR));
        }

        let mut death_zone = Block::new(layout::death_zone_rect(&config), layout::DEATH_ZONE_COLOR);
        death_zone.add_hit_listener(shared(BallRemover::new(remaining_balls.clone())));
        env.add_collidable(death_zone);

        let paddle_id = env.add_collidable(Paddle::new(
            layout::paddle_rect(&config),
            layout::PADDLE_COLOR,
            config.paddle_speed,
        ));

        // One remover and one scorer shared by every block
        let block_remover = shared(BlockRemover::new(remaining_blocks.clone()));
        let scorer = shared(ScoreTrackingListener::new(score.clone(), config.score_per_block));
        for (rect, color) in layout::pattern_blocks(&config, pattern) {
            let mut block = Block::new(rect, color);
            block.add_hit_listener(block_remover.clone());
            block.add_hit_listener(scorer.clone());
            env.add_collidable(block);
            remaining_blocks.increase(1);
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let (dx, dy) = config.ball_velocity;
        let spread = config.launch_spread_degrees;
        let balls: Vec<Ball> = layout::ball_positions(&config)
            .into_iter()
            .zip(1u32..)
            .map(|(center, id)| {
                let mut velocity = Velocity::new(dx, dy);
                if spread > 0.0 {
                    velocity = velocity.rotated(rng.random_range(-spread..=spread));
                }
                remaining_balls.increase(1);
                Ball::new(center, config.ball_radius, layout::BALL_COLOR)
                    .with_id(id)
                    .with_velocity(velocity)
            })
            .collect();

        log::info!(
            "Level ready: {} obstacles, {} blocks, {} balls (seed {})",
            env.len(),
            remaining_blocks.value(),
            balls.len(),
            seed
        );

        Self {
            seed,
            config,
            env,
            balls,
            paddle_id,
            score,
            remaining_blocks,
            remaining_balls,
            time_ticks: 0,
            outcome: None,
        }
    }

    pub fn paddle_id(&self) -> CollidableId {
        self.paddle_id
    }

    pub fn paddle(&self) -> Option<&Paddle> {
        self.env.get(self.paddle_id).and_then(Obstacle::as_paddle)
    }

    pub fn paddle_mut(&mut self) -> Option<&mut Paddle> {
        self.env.get_mut(self.paddle_id).and_then(Obstacle::as_paddle_mut)
    }

    /// Step every live ball once, then drop the ones taken out of play.
    ///
    /// Balls are visited by index over the live vector; removal waits until
    /// all of them have moved.
    pub fn notify_all_time_passed(&mut self) {
        for i in 0..self.balls.len() {
            self.balls[i].time_passed(&mut self.env);
        }

        let before = self.balls.len();
        self.balls.retain(Ball::is_alive);
        if self.balls.len() < before {
            log::info!(
                "{} ball(s) lost, {} left",
                before - self.balls.len(),
                self.balls.len()
            );
        }
    }

    /// Breakable blocks left in play
    pub fn block_count(&self) -> usize {
        usize::try_from(self.remaining_blocks.value()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::sim::collision::Collidable;

    #[test]
    fn test_new_state_composition() {
        let state = GameState::new(GameConfig::default(), 7);
        // 3 walls + death zone + paddle + 50 blocks
        assert_eq!(state.env.len(), 55);
        assert_eq!(state.remaining_blocks.value(), 50);
        assert_eq!(state.block_count(), 50);
        assert_eq!(state.remaining_balls.value(), 3);
        assert_eq!(state.balls.len(), 3);
        assert_eq!(state.score.value(), 0);
        assert!(state.outcome.is_none());

        let ids: Vec<u32> = state.balls.iter().map(Ball::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_paddle_lookup() {
        let mut state = GameState::new(GameConfig::default(), 7);
        let rect = state.paddle().unwrap().collision_rectangle();
        assert_eq!(rect.top_y(), 560.0);
        assert!(state.paddle_mut().is_some());
        assert!(state.env.get(state.paddle_id()).unwrap().is_paddle());
    }

    #[test]
    fn test_no_spread_keeps_configured_velocity() {
        let state = GameState::new(GameConfig::default(), 7);
        for ball in &state.balls {
            assert_eq!(ball.velocity(), Velocity::new(3.0, 3.0));
        }
    }

    #[test]
    fn test_spread_is_seeded() {
        let config = GameConfig {
            launch_spread_degrees: 20.0,
            ..GameConfig::default()
        };
        let a = GameState::new(config.clone(), 42);
        let b = GameState::new(config.clone(), 42);
        let c = GameState::new(config, 43);

        let velocities = |s: &GameState| s.balls.iter().map(Ball::velocity).collect::<Vec<_>>();
        assert_eq!(velocities(&a), velocities(&b));
        assert_ne!(velocities(&a), velocities(&c));
        for v in velocities(&a) {
            // Rotation preserves speed
            assert!((v.speed() - Velocity::new(3.0, 3.0).speed()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dead_balls_are_pruned_after_stepping() {
        let config = GameConfig {
            ball_count: 2,
            ..GameConfig::default()
        };
        let mut state = GameState::with_pattern(config, 1, &[[false; 10]]);
        // Put the first ball right on top of the death zone
        state.balls[0].set_center(Point::new(100.0, 570.0));
        state.balls[0].set_velocity(Velocity::new(0.0, 10.0));

        state.notify_all_time_passed();
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].id(), 2);
        assert_eq!(state.remaining_balls.value(), 1);
    }
}
