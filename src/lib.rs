//! Sky Hopper - a Flappy Bird clone for the terminal.
//!
//! The simulation core ([`core`]) is pure state-in, state-out logic driven
//! by an external fixed-interval tick source; the terminal front-end only
//! reads its state. All tunables live in [`config::GameConfig`].

pub mod build_info;
pub mod config;
pub mod constants;
pub mod core;
pub mod geometry;
pub mod input;
pub mod simulator;
pub mod ui;

pub use crate::config::GameConfig;
pub use crate::constants::TICK_INTERVAL_MS;
pub use crate::core::session::{GameSession, SessionState, TickResult};
