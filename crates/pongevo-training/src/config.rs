//! Training hyperparameters.
//!
//! A [`TrainingConfig`] is read from JSON. Every section carries `#[serde(default)]`, so a file
//! only has to mention the values it changes:
//!
//! ```
//! use pongevo_training::config::TrainingConfig;
//!
//! let config: TrainingConfig = serde_json::from_str(
//!     r#"{ "population_size": 20, "evolver": { "mutation_rate": 0.1 } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.population_size, 20);
//! assert_eq!(config.evolver.mutation_rate, 0.1);
//! assert_eq!(config.evolver.elite_count, 2);
//! config.validate().unwrap();
//! ```

use pongevo_engine::{GameConfig, GameConfigError};
use pongevo_evaluator::{
    match_evaluator::MatchRules,
    network::{NetworkConfig, NetworkConfigError},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub population_size: usize,
    pub max_generations: usize,
    /// Stop early once the best fitness of a generation reaches this value.
    pub fitness_threshold: Option<f32>,
    /// Seed for every random choice of a run. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub evolver: EvolverConfig,
    pub network: NetworkConfig,
    pub arena: GameConfig,
    #[serde(rename = "match")]
    pub match_rules: MatchRules,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 30,
            fitness_threshold: None,
            seed: None,
            evolver: EvolverConfig::default(),
            network: NetworkConfig::default(),
            arena: GameConfig::default(),
            match_rules: MatchRules::default(),
        }
    }
}

/// Genetic operator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolverConfig {
    /// Number of top individuals copied unchanged into the next generation.
    pub elite_count: usize,
    /// Individuals drawn per tournament (larger = stronger selection pressure).
    pub tournament_size: usize,
    /// BLX-α range expansion.
    pub blx_alpha: f32,
    /// Probability of perturbing each weight of a child.
    pub mutation_rate: f32,
    /// Standard deviation of the Gaussian perturbation.
    pub mutation_sigma: f32,
    /// Weights are clamped to `[-max_weight, max_weight]`.
    pub max_weight: f32,
    /// Initial weights are uniform in `[-init_weight, init_weight]`.
    pub init_weight: f32,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            elite_count: 2,
            tournament_size: 3,
            blx_alpha: 0.5,
            mutation_rate: 0.2,
            mutation_sigma: 0.5,
            max_weight: 30.0,
            init_weight: 1.0,
        }
    }
}

/// Rejected training configuration.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("population must contain at least one individual")]
    EmptyPopulation,
    #[display("elite_count ({elite_count}) exceeds population_size ({population_size})")]
    TooManyElites {
        elite_count: usize,
        population_size: usize,
    },
    #[display("tournament_size must be at least 1")]
    EmptyTournament,
    #[display("`{field}` must be a probability in [0, 1], got {value}")]
    NotAProbability { field: &'static str, value: f32 },
    #[display("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[display("invalid network: {_0}")]
    Network(NetworkConfigError),
    #[display("invalid arena: {_0}")]
    Arena(GameConfigError),
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.evolver.elite_count > self.population_size {
            return Err(ConfigError::TooManyElites {
                elite_count: self.evolver.elite_count,
                population_size: self.population_size,
            });
        }
        self.evolver.validate()?;
        self.network.validate().map_err(ConfigError::Network)?;
        self.arena.validate().map_err(ConfigError::Arena)?;
        Ok(())
    }
}

impl EvolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::NotAProbability {
                field: "mutation_rate",
                value: self.mutation_rate,
            });
        }
        for (field, value) in [
            ("mutation_sigma", self.mutation_sigma),
            ("max_weight", self.max_weight),
            ("init_weight", self.init_weight),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.blx_alpha.is_nan() || self.blx_alpha < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "blx_alpha",
                value: self.blx_alpha,
            });
        }
        Ok(())
    }
}
