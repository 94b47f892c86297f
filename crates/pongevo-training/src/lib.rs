//! Neuroevolution of Pong paddle controllers.
//!
//! This crate evolves the weight vectors consumed by `pongevo-evaluator`. A population of
//! genomes is evaluated generation by generation, every genome playing every other one, and a
//! genetic algorithm breeds the next generation from the fittest.
//!
//! # Architecture
//!
//! ```text
//! Trainer (generation loop, statistics, best genome, stop conditions)
//!     ↓ asks for genomes / reports fitness / breeds
//! PopulationDriver (GeneticDriver: elitism, tournament, BLX-α, Gaussian mutation)
//!     ↓ genomes
//! GenomeEvaluator (pongevo-evaluator: round-robin matches)
//!     ↓ writes
//! FitnessLedger
//! ```
//!
//! - [`config`] - JSON hyperparameters and their validation
//! - [`weights`] - Weight vector operators
//! - [`genetic`] - Individuals, populations and the evolver
//! - [`driver`] - The [`PopulationDriver`](driver::PopulationDriver) capability
//! - [`trainer`] - The generation loop
//! - [`statistics`] - Per-generation fitness statistics
//! - [`checkpoint`] - Saving and resuming runs
//!
//! # Example
//!
//! ```
//! use pongevo_training::{config::TrainingConfig, trainer::Trainer};
//!
//! let config = TrainingConfig {
//!     population_size: 4,
//!     max_generations: 2,
//!     seed: Some(1),
//!     ..TrainingConfig::default()
//! };
//! let mut trainer = Trainer::new(config).unwrap();
//! while !trainer.is_finished() {
//!     trainer.step().unwrap();
//! }
//! let (statistics, best) = trainer.into_results();
//! assert_eq!(statistics.generations.len(), 2);
//! assert!(best.is_some());
//! ```
//!
//! # Limitations
//!
//! - Fitness depends on the opponents drawn from the same generation, so it is noisy and not
//!   comparable across runs with different population sizes.
//! - Evaluation is sequential; a generation of `n` genomes plays `n·(n-1)/2` matches.

pub mod checkpoint;
pub mod config;
pub mod driver;
pub mod genetic;
pub mod statistics;
pub mod trainer;
pub mod weights;
