//! Genome identifiers and weight vectors.

use serde::{Deserialize, Serialize};

/// Identifier of a genome, unique within a training run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("#{_0}")]
pub struct GenomeId(pub u64);

/// An evolvable encoding of a paddle controller.
///
/// The weight vector is the flattened parameter list of a
/// [`FeedForwardNetwork`](crate::network::FeedForwardNetwork); its expected length is given by
/// [`NetworkConfig::weight_count`](crate::network::NetworkConfig::weight_count).
/// Fitness is not stored here: evaluators write it into a
/// [`FitnessLedger`](crate::fitness::FitnessLedger) keyed by [`GenomeId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    id: GenomeId,
    weights: Vec<f32>,
}

impl Genome {
    #[must_use]
    pub fn new(id: GenomeId, weights: Vec<f32>) -> Self {
        Self { id, weights }
    }

    #[must_use]
    pub fn id(&self) -> GenomeId {
        self.id
    }

    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_transparent_in_json() {
        let genome = Genome::new(GenomeId(12), vec![0.5, -1.0]);
        let json = serde_json::to_string(&genome).unwrap();
        assert_eq!(json, r#"{"id":12,"weights":[0.5,-1.0]}"#);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(GenomeId(3).to_string(), "#3");
    }
}
