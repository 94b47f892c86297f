//! Fixed-topology feed-forward network built from a genome.
//!
//! The topology is shared by the whole population and described by [`NetworkConfig`]:
//! three inputs, an optional stack of hidden layers, and three outputs. A genome supplies the
//! parameters, layer by layer, as `weights (outputs × inputs, row-major)` followed by
//! `biases (outputs)`.
//!
//! ```text
//! genome.weights = [ L0 weights | L0 biases | L1 weights | L1 biases | ... ]
//! ```
//!
//! Networks are stateless: [`FeedForwardNetwork::activate`] is a pure function of the inputs,
//! so the same genome always produces the same controller.

use serde::{Deserialize, Serialize};

use crate::genome::Genome;

/// Number of network inputs: own paddle y, ball y, horizontal distance to the ball.
pub const INPUT_COUNT: usize = 3;
/// Number of network outputs: one score per action (stay, up, down).
pub const OUTPUT_COUNT: usize = 3;

/// Activation function applied to every hidden and output node.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[default]
    #[display("tanh")]
    Tanh,
    #[display("sigmoid")]
    Sigmoid,
    #[display("relu")]
    Relu,
    #[display("identity")]
    Identity,
}

impl Activation {
    #[must_use]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Relu => x.max(0.0),
            Activation::Identity => x,
        }
    }
}

/// Network topology shared by every genome of a population.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Node count of each hidden layer, input side first. Empty means inputs feed the outputs
    /// directly.
    pub hidden_layers: Vec<usize>,
    pub activation: Activation,
}

impl NetworkConfig {
    /// `(inputs, outputs)` of each dense layer, input side first.
    pub fn layer_shapes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let sizes = || {
            std::iter::once(INPUT_COUNT)
                .chain(self.hidden_layers.iter().copied())
                .chain(std::iter::once(OUTPUT_COUNT))
        };
        sizes().zip(sizes().skip(1))
    }

    /// Length of the weight vector a genome must carry for this topology.
    ///
    /// ```
    /// use pongevo_evaluator::network::NetworkConfig;
    ///
    /// let direct = NetworkConfig::default();
    /// assert_eq!(direct.weight_count(), 3 * 3 + 3);
    ///
    /// let hidden = NetworkConfig { hidden_layers: vec![4], ..Default::default() };
    /// assert_eq!(hidden.weight_count(), (3 * 4 + 4) + (4 * 3 + 3));
    /// ```
    #[must_use]
    pub fn weight_count(&self) -> usize {
        self.layer_shapes()
            .map(|(inputs, outputs)| (inputs + 1) * outputs)
            .sum()
    }

    /// Checks that every hidden layer has at least one node.
    pub fn validate(&self) -> Result<(), NetworkConfigError> {
        match self.hidden_layers.iter().position(|&width| width == 0) {
            Some(layer) => Err(NetworkConfigError::EmptyLayer { layer }),
            None => Ok(()),
        }
    }
}

/// Rejected network topology.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NetworkConfigError {
    #[display("hidden layer {layer} has no nodes")]
    EmptyLayer { layer: usize },
}

/// A genome whose weight vector does not match the configured topology.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("genome {genome} has {actual} weights, topology expects {expected}")]
pub struct GenomeShapeError {
    pub genome: crate::genome::GenomeId,
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Clone)]
struct DenseLayer {
    inputs: usize,
    weights: Vec<f32>,
    biases: Vec<f32>,
}

impl DenseLayer {
    fn forward(&self, values: &[f32], activation: Activation) -> Vec<f32> {
        debug_assert_eq!(values.len(), self.inputs);
        self.weights
            .chunks_exact(self.inputs)
            .zip(&self.biases)
            .map(|(row, bias)| {
                let sum = row.iter().zip(values).map(|(w, v)| w * v).sum::<f32>();
                activation.apply(sum + bias)
            })
            .collect()
    }
}

/// Feed-forward network evaluated layer by layer.
#[derive(Debug, Clone)]
pub struct FeedForwardNetwork {
    layers: Vec<DenseLayer>,
    activation: Activation,
}

impl FeedForwardNetwork {
    /// Builds the network encoded by `genome` for the given topology.
    pub fn new(genome: &Genome, config: &NetworkConfig) -> Result<Self, GenomeShapeError> {
        let expected = config.weight_count();
        let mut rest = genome.weights();
        if rest.len() != expected {
            return Err(GenomeShapeError {
                genome: genome.id(),
                expected,
                actual: rest.len(),
            });
        }

        let layers = config
            .layer_shapes()
            .map(|(inputs, outputs)| {
                let (weights, tail) = rest.split_at(inputs * outputs);
                let (biases, tail) = tail.split_at(outputs);
                rest = tail;
                DenseLayer {
                    inputs,
                    weights: weights.to_vec(),
                    biases: biases.to_vec(),
                }
            })
            .collect();

        Ok(Self {
            layers,
            activation: config.activation,
        })
    }

    /// Propagates the inputs through every layer and returns one score per action.
    #[must_use]
    pub fn activate(&self, inputs: [f32; INPUT_COUNT]) -> [f32; OUTPUT_COUNT] {
        let values = self
            .layers
            .iter()
            .fold(inputs.to_vec(), |values, layer| {
                layer.forward(&values, self.activation)
            });
        let mut outputs = [0.0; OUTPUT_COUNT];
        outputs.copy_from_slice(&values);
        outputs
    }
}
