//! Game loop and match state.
//!
//! - [`Game`] - Owns both paddles and the ball and advances them one tick at a time
//! - [`GameConfig`] - Arena geometry, paddle and ball sizes and speeds
//! - [`GameInfo`] - Score and hit counters returned after every tick
//! - [`MatchSeed`] - Seed for deterministic ball directions
//!
//! # Tick Order
//!
//! Each call to [`Game::tick`] performs, in order:
//!
//! 1. Move the ball by its velocity
//! 2. Apply pending paddle intents, clamped to the arena
//! 3. Reflect the ball vertically at the top/bottom walls
//! 4. Reflect the ball horizontally on paddle overlap and count the hit
//! 5. Award a point when the ball reaches a side wall and serve again from the center

pub use self::{game::*, game_config::*, match_seed::*};

mod game;
mod game_config;
mod match_seed;
