use serde::{Deserialize, Serialize};

use crate::Rect;

/// Which paddle of the arena.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum PaddleSide {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

impl PaddleSide {
    pub const ALL: [PaddleSide; 2] = [PaddleSide::Left, PaddleSide::Right];
}

/// Vertical movement requested for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum VerticalIntent {
    Up,
    Down,
}

/// A paddle with a fixed `x` and a vertically movable body.
///
/// Movement requests are stored as an intent and only applied by the engine during a tick,
/// which is also where the paddle is clamped to the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    rect: Rect,
    speed: i32,
    intent: Option<VerticalIntent>,
}

impl Paddle {
    #[must_use]
    pub const fn new(rect: Rect, speed: i32) -> Self {
        Self {
            rect,
            speed,
            intent: None,
        }
    }

    #[must_use]
    pub const fn rect(&self) -> &Rect {
        &self.rect
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.rect.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.rect.y
    }

    #[must_use]
    pub const fn speed(&self) -> i32 {
        self.speed
    }

    #[must_use]
    pub const fn intent(&self) -> Option<VerticalIntent> {
        self.intent
    }

    /// Records the movement to apply on the next tick, replacing any earlier request.
    pub const fn set_intent(&mut self, up: bool) {
        self.intent = Some(if up {
            VerticalIntent::Up
        } else {
            VerticalIntent::Down
        });
    }

    pub const fn clear_intent(&mut self) {
        self.intent = None;
    }

    /// Consumes the pending intent, moving by `speed` and clamping `y` to `[0, max_y]`.
    pub(crate) fn apply_intent(&mut self, max_y: i32) {
        let dy = match self.intent.take() {
            Some(VerticalIntent::Up) => -self.speed,
            Some(VerticalIntent::Down) => self.speed,
            None => 0,
        };
        self.rect.y = (self.rect.y + dy).clamp(0, max_y);
    }

    pub(crate) const fn set_y(&mut self, y: i32) {
        self.rect.y = y;
    }
}
