use crossterm::event::{KeyCode, KeyEventKind};
use pongevo_evaluator::{
    controller::{Action, Observation, PaddleController},
    network::FeedForwardNetwork,
};

/// Ticks a key press keeps the paddle moving.
///
/// Terminals report held keys as a press followed by auto-repeats, without release events, so
/// each press or repeat re-arms the movement for a short while.
const HOLD_TICKS: u8 = 8;

/// Human paddle driven by up/down keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardController {
    held: Option<(Action, u8)>,
}

impl KeyboardController {
    /// Direction bound to `code`: Z, W or ↑ for up and S or ↓ for down.
    pub fn key_action(code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char('z' | 'w') | KeyCode::Up => Some(Action::Up),
            KeyCode::Char('s') | KeyCode::Down => Some(Action::Down),
            _ => None,
        }
    }

    /// Returns `false` if `code` is not a movement key.
    pub fn handle_key(&mut self, code: KeyCode, kind: KeyEventKind) -> bool {
        let Some(action) = Self::key_action(code) else {
            return false;
        };
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.held = Some((action, HOLD_TICKS)),
            KeyEventKind::Release => {
                if self.held.is_some_and(|(held, _)| held == action) {
                    self.held = None;
                }
            }
        }
        true
    }
}

impl PaddleController for KeyboardController {
    fn decide(&mut self, _observation: Observation) -> Action {
        let Some((action, ticks)) = self.held else {
            return Action::Stay;
        };
        self.held = (ticks > 1).then_some((action, ticks - 1));
        action
    }
}

/// Whoever plays the left paddle.
#[derive(Debug)]
pub enum LeftPlayer {
    Human(KeyboardController),
    Model(FeedForwardNetwork),
}

impl PaddleController for LeftPlayer {
    fn decide(&mut self, observation: Observation) -> Action {
        match self {
            LeftPlayer::Human(keyboard) => keyboard.decide(observation),
            LeftPlayer::Model(network) => network.decide(observation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBSERVATION: Observation = Observation {
        paddle_y: 0.0,
        ball_y: 0.0,
        ball_distance_x: 0.0,
    };

    #[test]
    fn test_key_bindings() {
        for code in [KeyCode::Char('z'), KeyCode::Char('w'), KeyCode::Up] {
            assert_eq!(KeyboardController::key_action(code), Some(Action::Up));
        }
        for code in [KeyCode::Char('s'), KeyCode::Down] {
            assert_eq!(KeyboardController::key_action(code), Some(Action::Down));
        }
        assert_eq!(KeyboardController::key_action(KeyCode::Char('q')), None);
    }

    #[test]
    fn test_press_holds_for_a_few_ticks() {
        let mut keyboard = KeyboardController::default();
        assert_eq!(keyboard.decide(OBSERVATION), Action::Stay);

        assert!(keyboard.handle_key(KeyCode::Up, KeyEventKind::Press));
        for _ in 0..HOLD_TICKS {
            assert_eq!(keyboard.decide(OBSERVATION), Action::Up);
        }
        assert_eq!(keyboard.decide(OBSERVATION), Action::Stay);
    }

    #[test]
    fn test_release_and_direction_change() {
        let mut keyboard = KeyboardController::default();
        keyboard.handle_key(KeyCode::Char('s'), KeyEventKind::Press);
        keyboard.handle_key(KeyCode::Char('z'), KeyEventKind::Press);
        assert_eq!(keyboard.decide(OBSERVATION), Action::Up);

        // releasing the other direction keeps moving
        keyboard.handle_key(KeyCode::Char('s'), KeyEventKind::Release);
        assert_eq!(keyboard.decide(OBSERVATION), Action::Up);

        keyboard.handle_key(KeyCode::Char('z'), KeyEventKind::Release);
        assert_eq!(keyboard.decide(OBSERVATION), Action::Stay);

        assert!(!keyboard.handle_key(KeyCode::Char('x'), KeyEventKind::Press));
    }
}
