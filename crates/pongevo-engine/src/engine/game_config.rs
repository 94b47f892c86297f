use serde::{Deserialize, Serialize};

use crate::{PaddleSide, Rect};

/// Arena geometry and entity dimensions.
///
/// The defaults reproduce the training arena: a 700x500 field, 10x140 paddles inset 10 pixels
/// from the side walls, and a 30x30 ball moving 7 pixels per tick on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Gap between a side wall and its paddle.
    pub paddle_margin: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_speed: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 500,
            paddle_width: 10,
            paddle_height: 140,
            paddle_margin: 10,
            paddle_speed: 7,
            ball_size: 30,
            ball_speed: 7,
        }
    }
}

/// Rejected arena configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameConfigError {
    #[display("`{field}` must be positive, got {value}")]
    NonPositive {
        field: &'static str,
        value: i32,
    },
    #[display("arena {width}x{height} cannot hold the paddles and the ball")]
    ArenaTooSmall { width: i32, height: i32 },
}

impl GameConfig {
    /// Checks that every dimension is positive and that paddles and ball fit in the arena.
    pub fn validate(&self) -> Result<(), GameConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in fields {
            if value <= 0 {
                return Err(GameConfigError::NonPositive { field, value });
            }
        }
        if self.paddle_margin < 0 {
            return Err(GameConfigError::NonPositive {
                field: "paddle_margin",
                value: self.paddle_margin,
            });
        }

        let paddles_width = 2 * (self.paddle_margin + self.paddle_width);
        if self.height < self.paddle_height
            || self.height < self.ball_size
            || self.width < paddles_width + self.ball_size
        {
            return Err(GameConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Largest `y` a paddle may reach.
    #[must_use]
    pub const fn max_paddle_y(&self) -> i32 {
        self.height - self.paddle_height
    }

    /// Fixed `x` of the given paddle.
    #[must_use]
    pub const fn paddle_x(&self, side: PaddleSide) -> i32 {
        match side {
            PaddleSide::Left => self.paddle_margin,
            PaddleSide::Right => self.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Paddle rectangle centered vertically on its side.
    #[must_use]
    pub const fn initial_paddle_rect(&self, side: PaddleSide) -> Rect {
        Rect::new(
            self.paddle_x(side),
            self.height / 2 - self.paddle_height / 2,
            self.paddle_width,
            self.paddle_height,
        )
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_paddle_positions() {
        let config = GameConfig::default();
        assert_eq!(
            config.initial_paddle_rect(PaddleSide::Left),
            Rect::new(10, 180, 10, 140)
        );
        assert_eq!(
            config.initial_paddle_rect(PaddleSide::Right),
            Rect::new(680, 180, 10, 140)
        );
        assert_eq!(config.max_paddle_y(), 360);
    }

    #[test]
    fn test_rejects_non_positive() {
        let config = GameConfig {
            ball_speed: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameConfigError::NonPositive {
                field: "ball_speed",
                value: 0
            })
        );
    }

    #[test]
    fn test_rejects_small_arena() {
        let config = GameConfig {
            height: 100,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameConfigError::ArenaTooSmall { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "width": 800 }"#).unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 500);
    }
}
