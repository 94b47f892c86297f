//! One match between two paddle controllers.
//!
//! A [`Match`] is a two-state machine. While [`MatchState::Running`], every [`Match::step`] lets
//! both controllers observe the game, applies their actions as paddle intents and advances the
//! game by one tick. The match becomes [`MatchState::Terminal`] as soon as a point is scored or
//! the hit ceiling of [`MatchRules`] is exceeded (or the optional tick cap is reached), and it
//! never leaves that state.

use pongevo_engine::{Game, GameConfig, GameInfo, MatchSeed, PaddleSide};
use serde::{Deserialize, Serialize};

use crate::{
    controller::{Observation, PaddleController},
    network::FeedForwardNetwork,
};

/// Which paddles the hit ceiling applies to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum HitLimitPolicy {
    /// Only the left paddle's hits end the match.
    #[default]
    #[display("left_only")]
    LeftOnly,
    /// Either paddle exceeding the ceiling ends the match.
    #[display("either_paddle")]
    EitherPaddle,
}

/// Termination rules of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    /// The match ends once a counted paddle has strictly more hits than this.
    pub hit_limit: u32,
    pub hit_limit_policy: HitLimitPolicy,
    /// Hard cap on the match length in ticks. `None` disables it.
    ///
    /// A paddle sliding onto the ball from above can trap it bouncing inside the paddle. Under
    /// [`HitLimitPolicy::LeftOnly`] this cap is the only way out when it is the right paddle.
    pub max_ticks: Option<u64>,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            hit_limit: 50,
            hit_limit_policy: HitLimitPolicy::LeftOnly,
            max_ticks: Some(100_000),
        }
    }
}

impl MatchRules {
    /// Returns `true` if a match showing `info` is over.
    ///
    /// ```
    /// use pongevo_engine::GameInfo;
    /// use pongevo_evaluator::match_evaluator::MatchRules;
    ///
    /// let rules = MatchRules::default();
    /// let rally = GameInfo { left_hits: 50, right_hits: 80, ..Default::default() };
    /// assert!(!rules.is_terminal(&rally));
    /// assert!(rules.is_terminal(&GameInfo { left_hits: 51, ..rally }));
    /// assert!(rules.is_terminal(&GameInfo { right_score: 1, ..Default::default() }));
    /// ```
    #[must_use]
    pub fn is_terminal(&self, info: &GameInfo) -> bool {
        if info.left_score >= 1 || info.right_score >= 1 {
            return true;
        }
        match self.hit_limit_policy {
            HitLimitPolicy::LeftOnly => info.left_hits > self.hit_limit,
            HitLimitPolicy::EitherPaddle => {
                info.left_hits > self.hit_limit || info.right_hits > self.hit_limit
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchState {
    Running,
    /// Final counters of the match.
    Terminal(GameInfo),
}

/// A match in progress between a left and a right controller.
#[derive(Debug)]
pub struct Match<L, R> {
    game: Game,
    left: L,
    right: R,
    rules: MatchRules,
    state: MatchState,
}

impl<L, R> Match<L, R>
where
    L: PaddleController,
    R: PaddleController,
{
    /// Starts a match on `game` in whatever state it currently is.
    pub fn new(game: Game, left: L, right: R, rules: MatchRules) -> Self {
        let state = if rules.is_terminal(&game.info()) {
            MatchState::Terminal(game.info())
        } else {
            MatchState::Running
        };
        Self {
            game,
            left,
            right,
            rules,
            state,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[must_use]
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    pub fn left_mut(&mut self) -> &mut L {
        &mut self.left
    }

    /// Starts over on `game`, keeping both controllers and the rules.
    pub fn restart(&mut self, game: Game) {
        self.state = if self.rules.is_terminal(&game.info()) {
            MatchState::Terminal(game.info())
        } else {
            MatchState::Running
        };
        self.game = game;
    }

    /// Advances a running match by one tick. Does nothing once the match is terminal.
    pub fn step(&mut self) -> MatchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let left_action = self
            .left
            .decide(Observation::from_game(&self.game, PaddleSide::Left));
        let right_action = self
            .right
            .decide(Observation::from_game(&self.game, PaddleSide::Right));
        left_action.apply(&mut self.game, PaddleSide::Left);
        right_action.apply(&mut self.game, PaddleSide::Right);

        let info = self.game.tick();
        let timed_out = self
            .rules
            .max_ticks
            .is_some_and(|max_ticks| self.game.ticks() >= max_ticks);
        if timed_out || self.rules.is_terminal(&info) {
            self.state = MatchState::Terminal(info);
        }
        self.state
    }

    /// Steps until the match is terminal and returns the final counters.
    pub fn run(&mut self) -> GameInfo {
        loop {
            if let MatchState::Terminal(info) = self.step() {
                return info;
            }
        }
    }
}

/// Plays headless matches between networks on a fixed arena with fixed rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEvaluator {
    game_config: GameConfig,
    rules: MatchRules,
}

impl MatchEvaluator {
    #[must_use]
    pub fn new(game_config: GameConfig, rules: MatchRules) -> Self {
        Self { game_config, rules }
    }

    #[must_use]
    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    #[must_use]
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Plays one match to the end and returns its final counters along with the tick count.
    #[must_use]
    pub fn play(
        &self,
        left: &FeedForwardNetwork,
        right: &FeedForwardNetwork,
        seed: MatchSeed,
    ) -> (GameInfo, u64) {
        let game = Game::with_seed(self.game_config, seed);
        let mut m = Match::new(game, left, right, self.rules);
        let info = m.run();
        (info, m.game().ticks())
    }
}
