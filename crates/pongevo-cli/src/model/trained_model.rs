use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use pongevo_engine::GameConfig;
use pongevo_evaluator::{
    genome::Genome,
    network::{FeedForwardNetwork, NetworkConfig},
};
use pongevo_training::{config::TrainingConfig, trainer::BestGenome};
use serde::{Deserialize, Serialize};

use crate::util;

/// Best genome of a training run, with everything needed to replay it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrainedModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub final_fitness: f32,
    /// Generation the genome was found in.
    pub generation: usize,
    pub network: NetworkConfig,
    pub arena: GameConfig,
    pub genome: Genome,
}

impl TrainedModel {
    pub fn from_best(name: String, best: &BestGenome, config: &TrainingConfig) -> Self {
        Self {
            name,
            trained_at: Utc::now(),
            final_fitness: best.fitness,
            generation: best.generation,
            network: config.network.clone(),
            arena: config.arena,
            genome: best.genome.clone(),
        }
    }

    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let model: Self = util::read_json_file("trained model", path)?;
        model
            .arena
            .validate()
            .with_context(|| format!("Invalid arena in model {}", model.name))?;
        model
            .network
            .validate()
            .with_context(|| format!("Invalid network in model {}", model.name))?;
        Ok(model)
    }

    pub fn build_network(&self) -> anyhow::Result<FeedForwardNetwork> {
        FeedForwardNetwork::new(&self.genome, &self.network)
            .with_context(|| format!("Model {} does not fit its network", self.name))
    }
}

#[cfg(test)]
mod tests {
    use pongevo_evaluator::{controller::Observation, genome::GenomeId};

    use super::*;

    fn model(weights: Vec<f32>) -> TrainedModel {
        let config = TrainingConfig::default();
        let best = BestGenome {
            genome: Genome::new(GenomeId(17), weights),
            fitness: 42.0,
            generation: 5,
        };
        TrainedModel::from_best("pong".to_owned(), &best, &config)
    }

    #[test]
    fn test_from_best() {
        let model = model(vec![0.5; 12]);
        assert_eq!(model.final_fitness, 42.0);
        assert_eq!(model.generation, 5);
        assert_eq!(model.genome.id(), GenomeId(17));
        assert_eq!(model.arena, GameConfig::default());

        let network = model.build_network().unwrap();
        let observation = Observation {
            paddle_y: 180.0,
            ball_y: 235.0,
            ball_distance_x: 320.0,
        };
        let outputs = network.activate(observation.to_inputs());
        assert!(outputs.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_json_round_trip() {
        let model = model(vec![0.25; 12]);
        let json = serde_json::to_string(&model).unwrap();
        let read: TrainedModel = serde_json::from_str(&json).unwrap();
        assert_eq!(read, model);
    }

    #[test]
    fn test_open_rejects_empty_hidden_layer() {
        let mut model = model(vec![0.0; 12]);
        model.network.hidden_layers = vec![0];
        let dir = std::env::temp_dir().join(format!("pongevo-model-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty-layer.json");
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();

        let err = TrainedModel::open(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid network in model pong"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_wrong_weight_count() {
        let err = model(vec![0.0; 5]).build_network().unwrap_err();
        assert!(err.to_string().contains("pong"));
    }
}
