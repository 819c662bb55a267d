//! Geometric primitives
//!
//! Value types only: nothing here knows about balls, blocks or the game.
//! All position comparisons are epsilon-tolerant (see [`crate::consts::EPSILON`]).

pub mod line;
pub mod point;
pub mod rect;

pub use line::Line;
pub use point::Point;
pub use rect::Rectangle;
