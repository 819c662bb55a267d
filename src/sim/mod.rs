//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registration order for obstacles, id order for balls)
//! - No rendering or platform dependencies

pub mod ball;
pub mod block;
pub mod collision;
pub mod color;
pub mod layout;
pub mod paddle;
pub mod state;
pub mod tick;
pub mod velocity;

pub use ball::Ball;
pub use block::Block;
pub use collision::{Collidable, CollidableId, CollisionEnvironment, CollisionInfo, Obstacle};
pub use color::Color;
pub use paddle::{Paddle, PaddleInput};
pub use state::GameState;
pub use tick::{GameOutcome, TickInput, tick};
pub use velocity::Velocity;

/// Anything that advances once per tick against the collision environment
pub trait Sprite {
    fn time_passed(&mut self, env: &mut CollisionEnvironment);
}
