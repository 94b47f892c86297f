//! A live match in the terminal, restarted after every terminal state.
//!
//! `play` puts a [`KeyboardController`] on the left paddle, `watch` a second network.

pub use self::{
    app::{FPS, VersusApp},
    player::*,
    tally::Tally,
};

mod app;
mod player;
mod tally;
