//! Simulation core: scrolling obstacles, bird physics, and the per-game
//! state machine that ties them together.

pub mod bird;
pub mod obstacles;
pub mod session;

pub use bird::Bird;
pub use obstacles::{ObstacleField, ObstaclePair};
pub use session::{GameSession, SessionState, TickResult};
