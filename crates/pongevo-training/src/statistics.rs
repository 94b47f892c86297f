//! Per-generation fitness statistics.

use pongevo_evaluator::genome::GenomeId;
use serde::{Deserialize, Serialize};

/// Summary of a fitness distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    /// Population standard deviation.
    pub std_dev: f32,
}

impl FitnessStats {
    /// Computes the summary, or `None` for an empty dataset.
    ///
    /// ```
    /// use pongevo_training::statistics::FitnessStats;
    ///
    /// let stats = FitnessStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.min, 2.0);
    /// assert_eq!(stats.max, 9.0);
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f32::total_cmp);

        let min = *values.first()?;
        let max = *values.last()?;
        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        Some(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Record of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f32,
    pub mean_fitness: f32,
    pub min_fitness: f32,
    pub std_dev: f32,
    pub best_genome: GenomeId,
    pub matches: usize,
}

/// Statistics of a whole training run, one entry per generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatistics {
    pub generations: Vec<GenerationStats>,
}

impl TrainingStatistics {
    pub fn push(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    #[must_use]
    pub fn last(&self) -> Option<&GenerationStats> {
        self.generations.last()
    }

    #[must_use]
    pub fn best_fitness_series(&self) -> Vec<f32> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    #[must_use]
    pub fn mean_fitness_series(&self) -> Vec<f32> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }
}

/// Moving average over `window` consecutive values.
///
/// Only positions where the window fits entirely are produced, so the result has
/// `values.len() - window + 1` entries, or none when the window is empty or longer than the
/// input.
///
/// ```
/// use pongevo_training::statistics::moving_average;
///
/// assert_eq!(moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3), vec![2.0, 3.0, 4.0]);
/// assert!(moving_average(&[1.0, 2.0], 3).is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn moving_average(values: &[f32], window: usize) -> Vec<f32> {
    if window == 0 {
        return vec![];
    }
    values
        .windows(window)
        .map(|w| w.iter().sum::<f32>() / window as f32)
        .collect()
}
