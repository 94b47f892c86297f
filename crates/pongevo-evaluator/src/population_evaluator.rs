//! Evaluating a whole generation.
//!
//! [`GenomeEvaluator`] is the boundary between the evolutionary algorithm and the game: the
//! driver hands over the generation's genomes and a [`FitnessLedger`], and gets the ledger back
//! filled in. [`RoundRobinEvaluator`] fills it by playing every unordered pair of genomes once.

use pongevo_engine::{GameConfig, MatchSeed};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    fitness::FitnessLedger,
    genome::Genome,
    match_evaluator::{MatchEvaluator, MatchRules},
    network::{FeedForwardNetwork, GenomeShapeError, NetworkConfig},
};

/// Summary of one [`GenomeEvaluator::evaluate`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    pub matches: usize,
    /// Game ticks simulated over all matches.
    pub ticks: u64,
}

/// Assigns fitness to every genome of a generation.
pub trait GenomeEvaluator {
    /// Evaluates `genomes` and writes one fitness entry per genome into `ledger`.
    ///
    /// Every genome has an entry once this returns `Ok`, even if it scored nothing.
    fn evaluate(
        &mut self,
        genomes: &[Genome],
        network: &NetworkConfig,
        ledger: &mut FitnessLedger,
    ) -> Result<EvaluationReport, GenomeShapeError>;
}

/// Index pairs `(i, j)` with `i < j < n`, in row order.
///
/// ```
/// use pongevo_evaluator::population_evaluator::round_robin_pairs;
///
/// let pairs: Vec<_> = round_robin_pairs(3).collect();
/// assert_eq!(pairs, [(0, 1), (0, 2), (1, 2)]);
/// ```
pub fn round_robin_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Plays every genome against every later genome in the list, left against right.
///
/// Each match gets its own serve seed drawn from the evaluator's generator, so a seeded
/// evaluator reproduces the same fitness for the same genomes.
#[derive(Debug, Clone)]
pub struct RoundRobinEvaluator {
    evaluator: MatchEvaluator,
    rng: Pcg32,
}

impl RoundRobinEvaluator {
    #[must_use]
    pub fn new(game_config: GameConfig, rules: MatchRules) -> Self {
        Self {
            evaluator: MatchEvaluator::new(game_config, rules),
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    #[must_use]
    pub fn with_seed(game_config: GameConfig, rules: MatchRules, seed: u64) -> Self {
        Self {
            evaluator: MatchEvaluator::new(game_config, rules),
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl GenomeEvaluator for RoundRobinEvaluator {
    fn evaluate(
        &mut self,
        genomes: &[Genome],
        network: &NetworkConfig,
        ledger: &mut FitnessLedger,
    ) -> Result<EvaluationReport, GenomeShapeError> {
        let networks = genomes
            .iter()
            .map(|genome| FeedForwardNetwork::new(genome, network))
            .collect::<Result<Vec<_>, _>>()?;

        for genome in genomes {
            ledger.begin(genome.id());
        }

        let mut report = EvaluationReport::default();
        for (i, j) in round_robin_pairs(genomes.len()) {
            let seed: MatchSeed = self.rng.random();
            let (info, ticks) = self.evaluator.play(&networks[i], &networks[j], seed);
            let (left, right) = (genomes[i].id(), genomes[j].id());
            ledger.record_match(left, right, &info);
            tracing::debug!(
                %left,
                %right,
                left_hits = info.left_hits,
                right_hits = info.right_hits,
                left_score = info.left_score,
                right_score = info.right_score,
                ticks,
                "match finished"
            );
            report.matches += 1;
            report.ticks += ticks;
        }
        Ok(report)
    }
}
