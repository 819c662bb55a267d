//! Collision capability and the closest-collision query
//!
//! Obstacles are rectangles with a reflection rule. The environment owns
//! them, hands out stable ids, and answers "what does this trajectory strike
//! first?" for the balls.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::block::Block;
use super::paddle::Paddle;
use super::velocity::Velocity;
use crate::geometry::{Line, Point, Rectangle};

/// Anything a ball can bounce off
pub trait Collidable {
    /// The shape used for collision queries
    fn collision_rectangle(&self) -> Rectangle;

    /// Reflect `velocity` for a hit at `collision_point` and return the
    /// outgoing velocity. May notify listeners as a side effect.
    fn hit(&mut self, hitter: &mut Ball, collision_point: Point, velocity: Velocity) -> Velocity;
}

/// Stable handle to an obstacle registered in a [`CollisionEnvironment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollidableId(pub u32);

/// The obstacles the engine knows about.
///
/// The paddle is a variant rather than a separate type hierarchy: the ball
/// checks for it explicitly to apply the post-hit snap.
#[derive(Debug)]
pub enum Obstacle {
    Block(Block),
    Paddle(Paddle),
}

impl Obstacle {
    pub fn is_paddle(&self) -> bool {
        matches!(self, Obstacle::Paddle(_))
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Obstacle::Block(block) => Some(block),
            Obstacle::Paddle(_) => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut Block> {
        match self {
            Obstacle::Block(block) => Some(block),
            Obstacle::Paddle(_) => None,
        }
    }

    pub fn as_paddle(&self) -> Option<&Paddle> {
        match self {
            Obstacle::Paddle(paddle) => Some(paddle),
            Obstacle::Block(_) => None,
        }
    }

    pub fn as_paddle_mut(&mut self) -> Option<&mut Paddle> {
        match self {
            Obstacle::Paddle(paddle) => Some(paddle),
            Obstacle::Block(_) => None,
        }
    }
}

impl Collidable for Obstacle {
    fn collision_rectangle(&self) -> Rectangle {
        match self {
            Obstacle::Block(block) => block.collision_rectangle(),
            Obstacle::Paddle(paddle) => paddle.collision_rectangle(),
        }
    }

    fn hit(&mut self, hitter: &mut Ball, collision_point: Point, velocity: Velocity) -> Velocity {
        match self {
            Obstacle::Block(block) => block.hit(hitter, collision_point, velocity),
            Obstacle::Paddle(paddle) => paddle.hit(hitter, collision_point, velocity),
        }
    }
}

impl From<Block> for Obstacle {
    fn from(block: Block) -> Self {
        Obstacle::Block(block)
    }
}

impl From<Paddle> for Obstacle {
    fn from(paddle: Paddle) -> Self {
        Obstacle::Paddle(paddle)
    }
}

/// Result of a closest-collision query
#[derive(Debug, Clone, Copy)]
pub struct CollisionInfo {
    /// Where the trajectory first meets the obstacle
    pub collision_point: Point,
    /// The obstacle that was struck
    pub collision_object: CollidableId,
}

/// The set of active obstacles.
///
/// Registration order is preserved and doubles as the tie-break when two
/// obstacles are struck at the same distance.
#[derive(Debug, Default)]
pub struct CollisionEnvironment {
    collidables: Vec<(CollidableId, Obstacle)>,
    next_id: u32,
}

impl CollisionEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an obstacle and return its id
    pub fn add_collidable(&mut self, obstacle: impl Into<Obstacle>) -> CollidableId {
        let id = CollidableId(self.next_id);
        self.next_id += 1;
        self.collidables.push((id, obstacle.into()));
        id
    }

    /// Unregister an obstacle. Later obstacles keep their relative order.
    pub fn remove_collidable(&mut self, id: CollidableId) -> Option<Obstacle> {
        let idx = self.collidables.iter().position(|(cid, _)| *cid == id)?;
        Some(self.collidables.remove(idx).1)
    }

    pub fn get(&self, id: CollidableId) -> Option<&Obstacle> {
        self.collidables
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, obstacle)| obstacle)
    }

    pub fn get_mut(&mut self, id: CollidableId) -> Option<&mut Obstacle> {
        self.collidables
            .iter_mut()
            .find(|(cid, _)| *cid == id)
            .map(|(_, obstacle)| obstacle)
    }

    pub fn contains(&self, id: CollidableId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.collidables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collidables.is_empty()
    }

    /// Obstacles in registration order
    pub fn iter(&self) -> impl Iterator<Item = (CollidableId, &Obstacle)> {
        self.collidables.iter().map(|(id, obstacle)| (*id, obstacle))
    }

    /// The obstacle whose edge `trajectory` reaches first, measured from the
    /// trajectory's start.
    ///
    /// Takes `&self`, so the set cannot change while it is being scanned;
    /// removals caused by a hit land on the live set and show up on the next
    /// query.
    pub fn closest_collision(&self, trajectory: &Line) -> Option<CollisionInfo> {
        let mut closest: Option<(f64, CollisionInfo)> = None;

        for (id, obstacle) in &self.collidables {
            let rect = obstacle.collision_rectangle();
            let Some(point) = trajectory.closest_intersection_to_start(&rect) else {
                continue;
            };

            let distance = trajectory.start.distance(point);
            // Strictly closer only: ties keep the earlier registration
            if closest.as_ref().is_none_or(|(best, _)| distance < *best) {
                closest = Some((
                    distance,
                    CollisionInfo {
                        collision_point: point,
                        collision_object: *id,
                    },
                ));
            }
        }

        closest.map(|(_, info)| info)
    }

    /// Run the reflection contract of obstacle `id`.
    ///
    /// A block that asked to be removed during its hit notifications is
    /// dropped from the live set before this returns.
    pub fn hit(
        &mut self,
        id: CollidableId,
        hitter: &mut Ball,
        collision_point: Point,
        velocity: Velocity,
    ) -> Velocity {
        let Some(obstacle) = self.get_mut(id) else {
            log::warn!("Hit on unknown collidable {:?}", id);
            return velocity;
        };

        let reflected = obstacle.hit(hitter, collision_point, velocity);

        let remove = obstacle
            .as_block_mut()
            .is_some_and(|block| block.take_removal_request());
        if remove {
            self.remove_collidable(id);
            log::debug!("Collidable {:?} removed ({} left)", id, self.len());
        }

        reflected
    }
}
