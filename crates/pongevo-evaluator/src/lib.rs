//! Controller and match evaluation for evolving Pong paddles.
//!
//! This crate sits between the physics engine (`pongevo-engine`) and the training loop
//! (`pongevo-training`). It turns genomes into paddle controllers, plays matches between them
//! and converts match outcomes into fitness.
//!
//! # Architecture
//!
//! ```text
//! Population Evaluation (round-robin over a generation)
//!     ↓ uses
//! Match Evaluation (one match until a terminal state)
//!     ↓ uses
//! Controller (observation → network → action)
//!     ↓ drives
//! Game (pongevo-engine)
//! ```
//!
//! - [`genome`] - Genome identifiers and weight vectors
//! - [`network`] - Fixed-topology feed-forward network built from a genome
//! - [`controller`] - Observation, discrete actions and first-index argmax
//! - [`match_evaluator`] - Two-state match state machine and hit-limit rules
//! - [`fitness`] - Genome id → accumulated fitness ledger
//! - [`population_evaluator`] - The [`GenomeEvaluator`](population_evaluator::GenomeEvaluator)
//!   boundary and its round-robin implementation
//!
//! # Fitness
//!
//! A genome's fitness for a generation is the total number of times its paddle touched the
//! ball, summed over every match it played in that generation. Scoring a point is not
//! rewarded directly; long rallies are.
//!
//! # Example
//!
//! ```
//! use pongevo_evaluator::{
//!     fitness::FitnessLedger,
//!     genome::{Genome, GenomeId},
//!     network::NetworkConfig,
//!     population_evaluator::{GenomeEvaluator, RoundRobinEvaluator},
//! };
//!
//! let network = NetworkConfig::default();
//! let genomes: Vec<Genome> = (0..3)
//!     .map(|i| Genome::new(GenomeId(i), vec![0.1; network.weight_count()]))
//!     .collect();
//!
//! let mut evaluator = RoundRobinEvaluator::with_seed(Default::default(), Default::default(), 7);
//! let mut ledger = FitnessLedger::new();
//! let report = evaluator.evaluate(&genomes, &network, &mut ledger).unwrap();
//! assert_eq!(report.matches, 3);
//! assert_eq!(ledger.len(), 3);
//! ```

pub mod controller;
pub mod fitness;
pub mod genome;
pub mod match_evaluator;
pub mod network;
pub mod population_evaluator;
