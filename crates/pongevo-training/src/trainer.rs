//! The generation loop.
//!
//! [`Trainer`] glues a [`PopulationDriver`] to a [`GenomeEvaluator`]. Each [`Trainer::step`]
//! evaluates one generation, records its statistics, updates the best genome seen so far and
//! breeds the next generation. Callers loop until [`Trainer::is_finished`] and may take a
//! [`Checkpoint`] between steps.

use std::time::Instant;

use pongevo_evaluator::{
    fitness::FitnessLedger,
    genome::Genome,
    network::GenomeShapeError,
    population_evaluator::{GenomeEvaluator, RoundRobinEvaluator},
};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    checkpoint::Checkpoint,
    config::{ConfigError, TrainingConfig},
    driver::{GeneticDriver, PopulationDriver},
    genetic::{Individual, MissingFitness},
    statistics::{FitnessStats, GenerationStats, TrainingStatistics},
};

/// Best genome found so far in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestGenome {
    pub genome: Genome,
    pub fitness: f32,
    pub generation: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StopReason {
    #[display("reached the generation limit")]
    MaxGenerations,
    #[display("reached the fitness threshold")]
    FitnessThreshold,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TrainingError {
    #[display("invalid training configuration: {_0}")]
    Config(ConfigError),
    #[display("cannot build network: {_0}")]
    GenomeShape(GenomeShapeError),
    #[display("evaluation incomplete: {_0}")]
    MissingFitness(MissingFitness),
    #[display("population is empty")]
    EmptyPopulation,
}

/// Drives training generation by generation.
#[derive(Debug)]
pub struct Trainer<D = GeneticDriver, E = RoundRobinEvaluator> {
    config: TrainingConfig,
    driver: D,
    evaluator: E,
    statistics: TrainingStatistics,
    best: Option<BestGenome>,
    stop_reason: Option<StopReason>,
}

impl Trainer {
    /// Fresh run with a random population, seeded from `config.seed` when present.
    pub fn new(config: TrainingConfig) -> Result<Self, TrainingError> {
        let (driver_rng, evaluator_seed) = split_seed(config.seed, 0);
        let driver = GeneticDriver::new(&config, driver_rng).map_err(TrainingError::Config)?;
        let evaluator =
            RoundRobinEvaluator::with_seed(config.arena, config.match_rules, evaluator_seed);
        Self::with_parts(config, driver, evaluator)
    }

    /// Continues the run saved in `checkpoint`, optionally with a new generation limit.
    pub fn resume(
        checkpoint: Checkpoint,
        max_generations: Option<usize>,
    ) -> Result<Self, TrainingError> {
        let Checkpoint {
            generation,
            mut config,
            genomes,
            next_genome_id,
            statistics,
            best,
        } = checkpoint;
        if let Some(max_generations) = max_generations {
            config.max_generations = max_generations;
        }

        let next_generation = generation + 1;
        let (driver_rng, evaluator_seed) = split_seed(config.seed, next_generation);
        let driver = GeneticDriver::resume(
            &config,
            genomes,
            next_genome_id,
            next_generation,
            driver_rng,
        )
        .map_err(TrainingError::Config)?;
        let evaluator =
            RoundRobinEvaluator::with_seed(config.arena, config.match_rules, evaluator_seed);

        let mut trainer = Self::with_parts(config, driver, evaluator)?;
        trainer.statistics = statistics;
        trainer.best = best;
        Ok(trainer)
    }

    /// Snapshot to resume from, or `None` before the first generation is evaluated.
    #[must_use]
    pub fn checkpoint(&self) -> Option<Checkpoint> {
        let generation = self.statistics.last()?.generation;
        Some(Checkpoint {
            generation,
            config: self.config.clone(),
            genomes: self.driver.genomes(),
            next_genome_id: self.driver.next_genome_id(),
            statistics: self.statistics.clone(),
            best: self.best.clone(),
        })
    }
}

impl<D, E> Trainer<D, E>
where
    D: PopulationDriver,
    E: GenomeEvaluator,
{
    /// Trainer over a custom driver and evaluator.
    pub fn with_parts(
        config: TrainingConfig,
        driver: D,
        evaluator: E,
    ) -> Result<Self, TrainingError> {
        config.validate().map_err(TrainingError::Config)?;
        Ok(Self {
            config,
            driver,
            evaluator,
            statistics: TrainingStatistics::default(),
            best: None,
            stop_reason: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    #[must_use]
    pub fn statistics(&self) -> &TrainingStatistics {
        &self.statistics
    }

    #[must_use]
    pub fn best(&self) -> Option<&BestGenome> {
        self.best.as_ref()
    }

    /// Index of the next generation to evaluate.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.driver.generation()
    }

    #[must_use]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason.or_else(|| {
            (self.driver.generation() >= self.config.max_generations)
                .then_some(StopReason::MaxGenerations)
        })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stop_reason().is_some()
    }

    /// Evaluates the current generation, records it and breeds the next one.
    pub fn step(&mut self) -> Result<GenerationStats, TrainingError> {
        let started = Instant::now();
        let generation = self.driver.generation();
        let genomes = self.driver.genomes();

        let mut ledger = FitnessLedger::new();
        let report = self
            .evaluator
            .evaluate(&genomes, &self.config.network, &mut ledger)
            .map_err(TrainingError::GenomeShape)?;

        let ranked = self
            .driver
            .report_fitness(&ledger)
            .map_err(TrainingError::MissingFitness)?;
        let best = ranked.first().ok_or(TrainingError::EmptyPopulation)?;
        let fitness = FitnessStats::new(ranked.iter().map(Individual::fitness))
            .ok_or(TrainingError::EmptyPopulation)?;

        let stats = GenerationStats {
            generation,
            best_fitness: fitness.max,
            mean_fitness: fitness.mean,
            min_fitness: fitness.min,
            std_dev: fitness.std_dev,
            best_genome: best.id(),
            matches: report.matches,
        };
        if self
            .best
            .as_ref()
            .is_none_or(|current| stats.best_fitness > current.fitness)
        {
            self.best = Some(BestGenome {
                genome: best.genome().clone(),
                fitness: stats.best_fitness,
                generation,
            });
        }
        self.statistics.push(stats);

        tracing::info!(
            generation,
            best = stats.best_fitness,
            mean = stats.mean_fitness,
            min = stats.min_fitness,
            std_dev = stats.std_dev,
            best_genome = %stats.best_genome,
            matches = report.matches,
            ticks = report.ticks,
            elapsed = ?started.elapsed(),
            "generation evaluated"
        );

        let threshold = self.config.fitness_threshold;
        if let Some(threshold) = threshold.filter(|t| stats.best_fitness >= *t) {
            tracing::warn!(
                generation,
                best = stats.best_fitness,
                threshold,
                "fitness threshold reached, stopping early"
            );
            self.stop_reason = Some(StopReason::FitnessThreshold);
        }

        self.driver.breed();
        Ok(stats)
    }

    /// Consumes the trainer, returning the statistics and the best genome of the run.
    pub fn into_results(self) -> (TrainingStatistics, Option<BestGenome>) {
        (self.statistics, self.best)
    }
}

/// Derives the driver generator and the evaluator seed for a run starting at `generation`.
fn split_seed(seed: Option<u64>, generation: usize) -> (Pcg32, u64) {
    let mut master = match seed {
        Some(seed) => Pcg32::seed_from_u64(seed.wrapping_add(generation as u64)),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let driver_rng = Pcg32::from_rng(&mut master);
    (driver_rng, master.random())
}

#[cfg(test)]
mod tests {
    use pongevo_evaluator::{network::NetworkConfig, population_evaluator::EvaluationReport};

    use super::*;

    fn quick_config() -> TrainingConfig {
        TrainingConfig {
            population_size: 4,
            max_generations: 2,
            seed: Some(3),
            ..TrainingConfig::default()
        }
    }

    #[test]
    fn test_runs_until_generation_limit() {
        let mut trainer = Trainer::new(quick_config()).unwrap();
        assert!(trainer.checkpoint().is_none());
        while !trainer.is_finished() {
            let stats = trainer.step().unwrap();
            assert_eq!(stats.matches, 6);
            assert!(stats.best_fitness >= stats.mean_fitness);
            assert!(stats.mean_fitness >= stats.min_fitness);
        }
        assert_eq!(trainer.stop_reason(), Some(StopReason::MaxGenerations));
        assert_eq!(trainer.statistics().generations.len(), 2);

        let best_fitness = trainer
            .statistics()
            .generations
            .iter()
            .map(|g| g.best_fitness)
            .fold(f32::MIN, f32::max);
        assert_eq!(trainer.best().unwrap().fitness, best_fitness);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = || {
            let mut trainer = Trainer::new(quick_config()).unwrap();
            while !trainer.is_finished() {
                trainer.step().unwrap();
            }
            trainer.into_results()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_threshold_stops_early() {
        let config = TrainingConfig {
            max_generations: 10,
            fitness_threshold: Some(0.0),
            ..quick_config()
        };
        let mut trainer = Trainer::new(config).unwrap();
        trainer.step().unwrap();
        assert!(trainer.is_finished());
        assert_eq!(trainer.stop_reason(), Some(StopReason::FitnessThreshold));
    }

    #[test]
    fn test_invalid_config() {
        let config = TrainingConfig {
            population_size: 0,
            ..TrainingConfig::default()
        };
        assert!(matches!(
            Trainer::new(config),
            Err(TrainingError::Config(ConfigError::EmptyPopulation))
        ));
    }

    /// Evaluator that rewards larger first weights, for checking the driver side alone.
    struct FirstWeight;

    impl GenomeEvaluator for FirstWeight {
        fn evaluate(
            &mut self,
            genomes: &[Genome],
            _network: &NetworkConfig,
            ledger: &mut FitnessLedger,
        ) -> Result<EvaluationReport, GenomeShapeError> {
            for genome in genomes {
                ledger.add(genome.id(), genome.weights()[0]);
            }
            Ok(Default::default())
        }
    }

    #[test]
    fn test_custom_evaluator_improves_fitness() {
        let config = TrainingConfig {
            population_size: 20,
            max_generations: 30,
            seed: Some(1),
            ..TrainingConfig::default()
        };
        let driver = GeneticDriver::new(&config, Pcg32::seed_from_u64(1)).unwrap();
        let mut trainer = Trainer::with_parts(config, driver, FirstWeight).unwrap();
        while !trainer.is_finished() {
            trainer.step().unwrap();
        }
        let stats = &trainer.statistics().generations;
        let first = stats.first().unwrap().best_fitness;
        let last = stats.last().unwrap().best_fitness;
        assert!(last > first);
        assert!(last <= 30.0);
        assert_eq!(trainer.best().unwrap().fitness, last);
    }
}
