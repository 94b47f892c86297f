use std::{num::NonZeroUsize, path::PathBuf};

use crossterm::event::{Event, KeyCode};
use pongevo_training::statistics::TrainingStatistics;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
};

use crate::{
    tui::{App, Tui},
    ui::widgets::{FitnessChart, FitnessSeries, style},
    util,
};

const TICK_RATE: f64 = 10.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlotArg {
    /// Statistics file written by `train --stats` (JSON)
    #[arg(long)]
    stats: PathBuf,
    /// Window of the moving average over the max fitness
    #[arg(long, default_value = "5")]
    window: NonZeroUsize,
}

pub(crate) fn run(arg: &PlotArg) -> anyhow::Result<()> {
    let statistics: TrainingStatistics = util::read_json_file("statistics", &arg.stats)?;
    let mut app = PlotApp::new(&statistics, arg.window.get(), arg.stats.display().to_string());
    Tui::with_tick_rate(TICK_RATE).run(&mut app)
}

#[derive(Debug)]
struct PlotApp {
    series: FitnessSeries,
    title: String,
    is_exiting: bool,
}

impl PlotApp {
    fn new(statistics: &TrainingStatistics, window: usize, title: String) -> Self {
        Self {
            series: FitnessSeries::new(statistics, window),
            title,
            is_exiting: false,
        }
    }
}

impl App for PlotApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_event()
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            self.is_exiting = true;
        }
    }

    fn update(&mut self) {}

    fn draw(&self, frame: &mut Frame) {
        let [chart_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(FitnessChart::new(&self.series, &self.title), chart_area);
        frame.render_widget(
            Text::from("Controls: Q/Esc (Quit)")
                .style(style::HELP)
                .centered(),
            help_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use crossterm::event::{KeyEvent, KeyModifiers};

    use crate::command::{CommandArgs, Mode};

    use super::*;

    #[test]
    fn test_parse_window() {
        let parse = |args: &[&str]| CommandArgs::try_parse_from(args).map(|args| args.mode);
        let Ok(Mode::Plot(arg)) = parse(&["pongevo", "plot", "--stats", "stats.json"]) else {
            panic!("expected plot mode");
        };
        assert_eq!(arg.window.get(), 5);
        assert!(parse(&["pongevo", "plot", "--stats", "s.json", "--window", "0"]).is_err());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = PlotApp::new(&TrainingStatistics::default(), 5, "stats".to_owned());
        app.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(!app.should_exit());
        app.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(app.should_exit());
    }
}
