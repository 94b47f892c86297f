use pongevo_engine::GameInfo;
use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{command::versus::Tally, ui::widgets::style};

/// Match tally above the arena, with the hit counters of the rally in progress.
#[derive(Debug)]
pub struct ScoreboardDisplay<'a> {
    left_name: &'a str,
    right_name: &'a str,
    rally: GameInfo,
    tally: &'a Tally,
}

impl<'a> ScoreboardDisplay<'a> {
    pub fn new(left_name: &'a str, right_name: &'a str, rally: GameInfo, tally: &'a Tally) -> Self {
        Self {
            left_name,
            right_name,
            rally,
            tally,
        }
    }
}

impl Widget for ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let score = Line::from(vec![
            Span::styled(self.left_name, style::LEFT_PADDLE),
            Span::raw(format!(
                "  {} : {}  ",
                self.tally.left_wins, self.tally.right_wins
            )),
            Span::styled(self.right_name, style::RIGHT_PADDLE),
        ])
        .centered();
        let details = Line::from(format!(
            "hits {} / {} | matches {} | no point {} | longest rally {}",
            self.rally.left_hits,
            self.rally.right_hits,
            self.tally.matches,
            self.tally.unscored,
            self.tally.longest_rally,
        ))
        .style(style::HELP)
        .centered();

        Paragraph::new(vec![score, details])
            .style(style::DEFAULT)
            .render(area, buf);
    }
}
