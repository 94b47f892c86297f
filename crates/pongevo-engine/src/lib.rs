//! Pong physics and rules engine.
//!
//! This crate owns the whole simulation state of a single Pong match: two paddles, one ball,
//! and the score/hit counters. It has no notion of rendering, input devices or controllers;
//! callers express paddle intents through [`Game::move_paddle`] and advance time with
//! [`Game::tick`].
//!
//! - [`core`] - Geometric primitives ([`Rect`], [`Velocity`]) and the entities built on them
//!   ([`Paddle`], [`Ball`])
//! - [`engine`] - The [`Game`] loop, its [`GameConfig`], the per-tick [`GameInfo`] snapshot and
//!   the [`MatchSeed`] used for deterministic ball directions
//!
//! # Example
//!
//! ```
//! use pongevo_engine::{Game, GameConfig, MatchSeed, PaddleSide};
//!
//! let mut game = Game::with_seed(GameConfig::default(), MatchSeed::from_u64(42));
//! game.move_paddle(PaddleSide::Left, true);
//! let info = game.tick();
//! assert_eq!(info.left_score + info.right_score, 0);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
