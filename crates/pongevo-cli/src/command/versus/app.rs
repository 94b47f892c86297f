use crossterm::event::{Event, KeyCode, KeyEventKind};
use pongevo_engine::{Game, GameConfig};
use pongevo_evaluator::{
    match_evaluator::{Match, MatchRules, MatchState},
    network::FeedForwardNetwork,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
    widgets::Block,
};

use crate::{
    command::versus::{LeftPlayer, Tally},
    tui::App,
    ui::widgets::{ArenaDisplay, ScoreboardDisplay, style},
};

pub const FPS: f64 = 60.0;

#[derive(Debug)]
pub struct VersusApp {
    arena: Match<LeftPlayer, FeedForwardNetwork>,
    config: GameConfig,
    human: bool,
    left_name: String,
    right_name: String,
    tally: Tally,
    paused: bool,
    is_exiting: bool,
}

impl VersusApp {
    pub fn new(
        config: GameConfig,
        rules: MatchRules,
        left: LeftPlayer,
        right: FeedForwardNetwork,
    ) -> Self {
        let human = matches!(left, LeftPlayer::Human(_));
        Self {
            arena: Match::new(Game::new(config), left, right, rules),
            config,
            human,
            left_name: "left".to_owned(),
            right_name: "right".to_owned(),
            tally: Tally::default(),
            paused: false,
            is_exiting: false,
        }
    }

    pub fn names(self, left_name: String, right_name: String) -> Self {
        Self {
            left_name,
            right_name,
            ..self
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    fn help_text(&self) -> &'static str {
        match (self.human, self.paused) {
            (_, true) => "Controls: P (Resume) | Q/Esc (Quit)",
            (true, false) => "Controls: Z/W/↑ (Up) | S/↓ (Down) | P (Pause) | Q/Esc (Quit)",
            (false, false) => "Controls: P (Pause) | Q/Esc (Quit)",
        }
    }
}

impl App for VersusApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        let is_release = key.kind == KeyEventKind::Release;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc if !is_release => self.is_exiting = true,
            KeyCode::Char('p') if !is_release => self.paused = !self.paused,
            code => {
                if let LeftPlayer::Human(keyboard) = self.arena.left_mut() {
                    keyboard.handle_key(code, key.kind);
                }
            }
        }
    }

    fn update(&mut self) {
        if self.paused || self.is_exiting {
            return;
        }
        if let MatchState::Terminal(result) = self.arena.step() {
            self.tally.record(&result);
            tracing::debug!(?result, ticks = self.arena.game().ticks(), "match finished");
            self.arena.restart(Game::new(self.config));
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [score_area, arena_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let scoreboard = ScoreboardDisplay::new(
            &self.left_name,
            &self.right_name,
            self.arena.game().info(),
            &self.tally,
        );
        let border_style = if self.paused {
            style::PAUSED_BORDER
        } else {
            style::DEFAULT
        };
        let arena = ArenaDisplay::new(self.arena.game())
            .block(Block::bordered().border_style(border_style));
        let help = Text::from(self.help_text()).style(style::HELP).centered();

        frame.render_widget(scoreboard, score_area);
        frame.render_widget(arena, arena_area);
        frame.render_widget(help, help_area);
    }
}
