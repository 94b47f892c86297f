use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{Ball, GameConfig, MatchSeed, Paddle, PaddleSide, Rect, Velocity};

/// Score and hit counters, returned by value after every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameInfo {
    pub left_score: u32,
    pub right_score: u32,
    pub left_hits: u32,
    pub right_hits: u32,
}

impl GameInfo {
    #[must_use]
    pub const fn score(&self, side: PaddleSide) -> u32 {
        match side {
            PaddleSide::Left => self.left_score,
            PaddleSide::Right => self.right_score,
        }
    }

    #[must_use]
    pub const fn hits(&self, side: PaddleSide) -> u32 {
        match side {
            PaddleSide::Left => self.left_hits,
            PaddleSide::Right => self.right_hits,
        }
    }
}

/// Complete state of one Pong match.
///
/// A `Game` is created per match and owns every piece of mutable simulation state, including
/// the random number generator used for serves. Nothing is shared between games.
///
/// # Example
///
/// ```
/// use pongevo_engine::{Game, GameConfig, MatchSeed, PaddleSide};
///
/// let config = GameConfig::default();
/// let mut game = Game::with_seed(config, MatchSeed::from_u64(3));
///
/// for _ in 0..100 {
///     game.move_paddle(PaddleSide::Right, false);
///     game.tick();
/// }
/// let y = game.paddle(PaddleSide::Right).y();
/// assert!((0..=config.max_paddle_y()).contains(&y));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    left_paddle: Paddle,
    right_paddle: Paddle,
    ball: Ball,
    info: GameInfo,
    ticks: u64,
    rng: Pcg32,
}

impl Game {
    /// Creates a game with a seed drawn from the thread-local generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but with a fixed seed for reproducible serves.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: MatchSeed) -> Self {
        let mut game = Self {
            config,
            left_paddle: Paddle::new(
                config.initial_paddle_rect(PaddleSide::Left),
                config.paddle_speed,
            ),
            right_paddle: Paddle::new(
                config.initial_paddle_rect(PaddleSide::Right),
                config.paddle_speed,
            ),
            ball: initial_ball(&config),
            info: GameInfo::default(),
            ticks: 0,
            rng: Pcg32::from_seed(seed.0),
        };
        game.reset();
        game
    }

    /// Centers both paddles, serves a new ball from the center and clears all counters.
    pub fn reset(&mut self) {
        for side in PaddleSide::ALL {
            let rect = self.config.initial_paddle_rect(side);
            let paddle = self.paddle_mut(side);
            paddle.set_y(rect.y);
            paddle.clear_intent();
        }
        self.ball = initial_ball(&self.config);
        self.serve();
        self.info = GameInfo::default();
        self.ticks = 0;
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn paddle(&self, side: PaddleSide) -> &Paddle {
        match side {
            PaddleSide::Left => &self.left_paddle,
            PaddleSide::Right => &self.right_paddle,
        }
    }

    const fn paddle_mut(&mut self, side: PaddleSide) -> &mut Paddle {
        match side {
            PaddleSide::Left => &mut self.left_paddle,
            PaddleSide::Right => &mut self.right_paddle,
        }
    }

    #[must_use]
    pub const fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Replaces the ball, keeping paddles and counters.
    ///
    /// Useful to set up a specific rally position in replays and tests.
    pub const fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    #[must_use]
    pub const fn info(&self) -> GameInfo {
        self.info
    }

    /// Number of ticks since the last [`Self::reset`].
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Requests a move of one paddle on the next tick.
    ///
    /// No bounds check happens here; the paddle is clamped when the intent is applied.
    pub const fn move_paddle(&mut self, side: PaddleSide, up: bool) {
        self.paddle_mut(side).set_intent(up);
    }

    /// Advances the simulation by one tick and returns the updated counters.
    pub fn tick(&mut self) -> GameInfo {
        self.ball.advance();

        let max_y = self.config.max_paddle_y();
        self.left_paddle.apply_intent(max_y);
        self.right_paddle.apply_intent(max_y);

        let ball = *self.ball.rect();
        if ball.top() <= 0 || ball.bottom() >= self.config.height {
            self.ball.bounce_vertical();
        }

        if ball.overlaps(self.left_paddle.rect()) {
            self.ball.bounce_horizontal();
            self.info.left_hits += 1;
        } else if ball.overlaps(self.right_paddle.rect()) {
            self.ball.bounce_horizontal();
            self.info.right_hits += 1;
        }

        if ball.left() <= 0 {
            self.info.right_score += 1;
            self.serve();
        } else if ball.right() >= self.config.width {
            self.info.left_score += 1;
            self.serve();
        }

        self.ticks += 1;
        self.info
    }

    fn serve(&mut self) {
        let (cx, cy) = self.config.center();
        self.ball.serve(cx, cy, &mut self.rng);
    }
}

fn initial_ball(config: &GameConfig) -> Ball {
    Ball::new(
        Rect::new(0, 0, config.ball_size, config.ball_size),
        Velocity::new(config.ball_speed, config.ball_speed),
    )
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};

    use super::*;

    fn game() -> Game {
        Game::with_seed(GameConfig::default(), MatchSeed::from_u64(0))
    }

    fn ball(x: i32, y: i32, dx: i32, dy: i32) -> Ball {
        Ball::new(Rect::new(x, y, 30, 30), Velocity::new(dx, dy))
    }

    #[test]
    fn test_reset_centers_everything() {
        let mut game = game();
        game.move_paddle(PaddleSide::Left, true);
        for _ in 0..20 {
            game.tick();
        }
        game.reset();

        assert_eq!((game.ball().x(), game.ball().y()), (335, 235));
        assert_eq!(game.ball().velocity().dx.abs(), 7);
        assert_eq!(game.ball().velocity().dy.abs(), 7);
        assert_eq!(game.paddle(PaddleSide::Left).y(), 180);
        assert_eq!(game.paddle(PaddleSide::Right).y(), 180);
        assert_eq!(game.paddle(PaddleSide::Left).intent(), None);
        assert_eq!(game.info(), GameInfo::default());
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn test_bottom_wall_scenario() {
        // Ball served from the center moving down-right, no paddle input.
        let mut game = game();
        game.set_ball(ball(335, 235, 7, 7));

        for k in 1..=33 {
            game.tick();
            assert_eq!(game.ball().y(), 235 + 7 * k);
            assert_eq!(game.ball().velocity().dy, 7);
        }

        // 235 + 7 * 34 = 473, bottom edge 503 >= 500
        game.tick();
        assert_eq!(game.ball().y(), 473);
        assert_eq!(game.ball().velocity(), Velocity::new(7, -7));

        game.tick();
        assert_eq!(game.ball().y(), 466);
        assert_eq!(game.ball().velocity().dy, -7);
    }

    #[test]
    fn test_top_wall_is_inclusive() {
        let mut game = game();
        game.set_ball(ball(335, 7, 7, -7));
        game.tick();
        assert_eq!(game.ball().y(), 0);
        assert_eq!(game.ball().velocity().dy, 7);

        game.tick();
        assert_eq!(game.ball().y(), 7);
        assert_eq!(game.ball().velocity().dy, 7);
    }

    #[test]
    fn test_left_paddle_hit() {
        let mut game = game();
        game.set_ball(ball(26, 200, -7, 0));

        let info = game.tick();
        assert_eq!(game.ball().x(), 19);
        assert_eq!(game.ball().velocity().dx, 7);
        assert_eq!(info.left_hits, 1);
        assert_eq!(info.right_hits, 0);

        let info = game.tick();
        assert_eq!(game.ball().x(), 26);
        assert_eq!(game.ball().velocity().dx, 7);
        assert_eq!(info.left_hits, 1);
    }

    #[test]
    fn test_right_paddle_hit() {
        let mut game = game();
        game.set_ball(ball(645, 200, 7, 0));

        let info = game.tick();
        assert_eq!(game.ball().velocity().dx, -7);
        assert_eq!(info.right_hits, 1);
        assert_eq!(info.left_hits, 0);
    }

    #[test]
    fn test_edge_contact_is_not_a_hit() {
        let mut game = game();
        game.set_ball(ball(27, 200, -7, 0));

        // Lands exactly on the paddle's right edge.
        let info = game.tick();
        assert_eq!(game.ball().x(), 20);
        assert_eq!(game.ball().velocity().dx, -7);
        assert_eq!(info.left_hits, 0);
    }

    #[test]
    fn test_moved_paddle_hits_ball() {
        let mut game = game();
        // Above the paddle (180..320) until the paddle moves up by 7.
        game.set_ball(ball(26, 144, -7, 0));
        game.move_paddle(PaddleSide::Left, true);

        let info = game.tick();
        assert_eq!(game.paddle(PaddleSide::Left).y(), 173);
        assert_eq!(info.left_hits, 1);
    }

    #[test]
    fn test_right_scores_when_ball_leaves_left_side() {
        let mut game = game();
        game.set_ball(ball(5, 50, -7, 7));

        let info = game.tick();
        assert_eq!(info.right_score, 1);
        assert_eq!(info.left_score, 0);
        assert_eq!((game.ball().x(), game.ball().y()), (335, 235));
        assert_eq!(game.ball().velocity().dx.abs(), 7);
        assert_eq!(game.ball().velocity().dy.abs(), 7);
    }

    #[test]
    fn test_left_scores_when_ball_leaves_right_side() {
        let mut game = game();
        game.set_ball(ball(665, 50, 7, 7));

        let info = game.tick();
        assert_eq!(info.left_score, 1);
        assert_eq!(info.right_score, 0);
        assert_eq!((game.ball().x(), game.ball().y()), (335, 235));
    }

    #[test]
    fn test_side_wall_is_inclusive() {
        let mut game = game();
        game.set_ball(ball(7, 50, -7, 7));
        let info = game.tick();
        assert_eq!(info.right_score, 1);
    }

    #[test]
    fn test_paddles_stay_in_bounds() {
        let mut game = game();
        let mut rng = Pcg32::seed_from_u64(99);
        let max_y = game.config().max_paddle_y();

        for _ in 0..5000 {
            for side in PaddleSide::ALL {
                match rng.random_range(0..3) {
                    0 => {}
                    1 => game.move_paddle(side, true),
                    _ => game.move_paddle(side, false),
                }
            }
            game.tick();
            for side in PaddleSide::ALL {
                let y = game.paddle(side).y();
                assert!((0..=max_y).contains(&y), "{side} paddle out of bounds: {y}");
            }
        }
    }

    #[test]
    fn test_at_most_one_point_per_tick() {
        let mut game = game();
        let mut previous = game.info();
        for _ in 0..5000 {
            let info = game.tick();
            let scored = (info.left_score - previous.left_score)
                + (info.right_score - previous.right_score);
            assert!(scored <= 1);
            if scored == 1 {
                let (cx, cy) = game.config().center();
                assert_eq!(game.ball().x(), cx - 15);
                assert_eq!(game.ball().y(), cy - 15);
            }
            previous = info;
        }
        assert!(previous.left_score + previous.right_score > 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        fn run(seed: MatchSeed) -> Vec<(GameInfo, i32, i32)> {
            let mut game = Game::with_seed(GameConfig::default(), seed);
            let mut inputs = Pcg32::seed_from_u64(5);
            (0..3000)
                .map(|_| {
                    if inputs.random_bool(0.5) {
                        game.move_paddle(PaddleSide::Left, inputs.random_bool(0.5));
                    }
                    let info = game.tick();
                    (info, game.ball().x(), game.ball().y())
                })
                .collect()
        }

        let seed = MatchSeed::from_u64(1234);
        assert_eq!(run(seed), run(seed));
    }
}
