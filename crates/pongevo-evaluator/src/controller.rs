//! Maps paddle observations to discrete actions.
//!
//! A controller sees the game from one paddle's point of view through an [`Observation`] and
//! answers with one [`Action`]. The network-backed controller scores the three actions and picks
//! the best one with [`Action::from_scores`].

use pongevo_engine::{Game, PaddleSide};
use serde::{Deserialize, Serialize};

use crate::network::{FeedForwardNetwork, OUTPUT_COUNT};

/// What one paddle sees of the game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub paddle_y: f32,
    pub ball_y: f32,
    /// Absolute horizontal distance between the paddle's and the ball's left edges.
    pub ball_distance_x: f32,
}

impl Observation {
    /// Observes `game` from the paddle on `side`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_game(game: &Game, side: PaddleSide) -> Self {
        let paddle = game.paddle(side);
        let ball = game.ball();
        Self {
            paddle_y: paddle.y() as f32,
            ball_y: ball.y() as f32,
            ball_distance_x: (paddle.x() - ball.x()).abs() as f32,
        }
    }

    #[must_use]
    pub const fn to_inputs(self) -> [f32; 3] {
        [self.paddle_y, self.ball_y, self.ball_distance_x]
    }
}

/// Discrete paddle action. The discriminant is the index of the matching network output.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Action {
    #[default]
    #[display("stay")]
    Stay = 0,
    #[display("up")]
    Up = 1,
    #[display("down")]
    Down = 2,
}

impl Action {
    pub const ALL: [Action; OUTPUT_COUNT] = [Action::Stay, Action::Up, Action::Down];

    /// Picks the action with the highest score.
    ///
    /// Ties go to the lowest index, so equal scores resolve to `Stay` before `Up` before `Down`.
    /// A later score replaces the current best only when it is strictly greater; `NaN` never
    /// wins.
    ///
    /// ```
    /// use pongevo_evaluator::controller::Action;
    ///
    /// assert_eq!(Action::from_scores([0.1, 0.9, 0.3]), Action::Up);
    /// assert_eq!(Action::from_scores([1.0, 1.0, 1.0]), Action::Stay);
    /// assert_eq!(Action::from_scores([0.0, 0.5, 0.5]), Action::Up);
    /// ```
    #[must_use]
    pub fn from_scores(scores: [f32; OUTPUT_COUNT]) -> Self {
        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = i;
            }
        }
        Action::ALL[best]
    }

    /// Turns the action into a paddle intent for the next tick.
    pub fn apply(self, game: &mut Game, side: PaddleSide) {
        match self {
            Action::Stay => {}
            Action::Up => game.move_paddle(side, true),
            Action::Down => game.move_paddle(side, false),
        }
    }
}

/// Pure controller step: observe, score and pick.
#[must_use]
pub fn decide_action(network: &FeedForwardNetwork, observation: Observation) -> Action {
    Action::from_scores(network.activate(observation.to_inputs()))
}

/// Anything that can drive a paddle.
pub trait PaddleController {
    fn decide(&mut self, observation: Observation) -> Action;
}

impl PaddleController for FeedForwardNetwork {
    fn decide(&mut self, observation: Observation) -> Action {
        decide_action(self, observation)
    }
}

impl PaddleController for &FeedForwardNetwork {
    fn decide(&mut self, observation: Observation) -> Action {
        decide_action(self, observation)
    }
}
