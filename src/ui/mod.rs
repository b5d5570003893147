//! Terminal rendering. Reads simulation state, never writes it.

pub mod game_common;
pub mod game_scene;

pub use game_scene::render_game;
