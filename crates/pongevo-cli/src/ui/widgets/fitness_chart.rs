use pongevo_training::statistics::{TrainingStatistics, moving_average};
use ratatui::{
    prelude::{Buffer, Rect},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

use crate::ui::widgets::style;

/// Chart points of a training run, one point per generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessSeries {
    pub best: Vec<(f64, f64)>,
    /// Moving average of `best`. Starts at the generation that completes the first window.
    pub smoothed: Vec<(f64, f64)>,
    pub mean: Vec<(f64, f64)>,
    pub window: usize,
}

impl FitnessSeries {
    #[expect(clippy::cast_precision_loss)]
    pub fn new(statistics: &TrainingStatistics, window: usize) -> Self {
        let generations: Vec<f64> = statistics
            .generations
            .iter()
            .map(|g| g.generation as f64)
            .collect();
        let points = |values: Vec<f32>| -> Vec<(f64, f64)> {
            generations
                .iter()
                .zip(values)
                .map(|(x, y)| (*x, f64::from(y)))
                .collect()
        };

        let best_values = statistics.best_fitness_series();
        let smoothed = moving_average(&best_values, window)
            .into_iter()
            .zip(generations.iter().skip(window.saturating_sub(1)))
            .map(|(y, x)| (*x, f64::from(y)))
            .collect();

        Self {
            best: points(best_values),
            smoothed,
            mean: points(statistics.mean_fitness_series()),
            window,
        }
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let first = self.best.first().map_or(0.0, |p| p.0);
        let last = self.best.last().map_or(1.0, |p| p.0);
        [first, last.max(first + 1.0)]
    }

    /// Zero-based range covering every series, with some headroom above the maximum.
    pub fn y_bounds(&self) -> [f64; 2] {
        let all = || self.best.iter().chain(&self.smoothed).chain(&self.mean);
        let min = all().map(|p| p.1).fold(0.0, f64::min);
        let max = all().map(|p| p.1).fold(0.0, f64::max);
        if max > min {
            [min, max * 1.1]
        } else {
            [min, min + 1.0]
        }
    }
}

/// Max, smoothed max and mean fitness per generation.
#[derive(Debug)]
pub struct FitnessChart<'a> {
    series: &'a FitnessSeries,
    title: &'a str,
}

impl<'a> FitnessChart<'a> {
    pub fn new(series: &'a FitnessSeries, title: &'a str) -> Self {
        Self { series, title }
    }
}

impl Widget for FitnessChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &FitnessChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let series = self.series;
        let datasets = vec![
            Dataset::default()
                .name("max")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style::BEST_FITNESS)
                .data(&series.best),
            Dataset::default()
                .name(format!("max (avg {})", series.window))
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style::SMOOTHED_FITNESS)
                .data(&series.smoothed),
            Dataset::default()
                .name("mean")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style::MEAN_FITNESS)
                .data(&series.mean),
        ];

        let x_bounds = series.x_bounds();
        let y_bounds = series.y_bounds();
        let x_axis = Axis::default()
            .title("generation")
            .bounds(x_bounds)
            .labels([
                format!("{:.0}", x_bounds[0]),
                format!("{:.0}", f64::midpoint(x_bounds[0], x_bounds[1])),
                format!("{:.0}", x_bounds[1]),
            ]);
        let y_axis = Axis::default()
            .title("fitness")
            .bounds(y_bounds)
            .labels([
                format!("{:.1}", y_bounds[0]),
                format!("{:.1}", f64::midpoint(y_bounds[0], y_bounds[1])),
                format!("{:.1}", y_bounds[1]),
            ]);

        Chart::new(datasets)
            .block(Block::bordered().title(Line::from(self.title).centered()))
            .style(style::DEFAULT)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }
}
