//! Genetic algorithm over network weight vectors.
//!
//! Each generation goes through this cycle:
//!
//! 1. **Evaluate** - a [`GenomeEvaluator`](pongevo_evaluator::population_evaluator::GenomeEvaluator)
//!    fills a [`FitnessLedger`] for the generation's genomes
//! 2. **Rank** - [`Population::apply_fitness`] copies the ledger into the individuals and sorts
//!    them best first
//! 3. **Elitism** - the top `elite_count` genomes move on unchanged, keeping their ids
//! 4. **Tournament selection** - two parents are picked, each as the fittest of
//!    `tournament_size` random individuals
//! 5. **BLX-α crossover** and **Gaussian mutation** produce a child with a fresh [`GenomeId`]
//!
//! Fitness is recomputed every generation, elites included, because it depends on the
//! opponents a genome meets.

use pongevo_evaluator::{
    fitness::FitnessLedger,
    genome::{Genome, GenomeId},
};
use rand::{Rng, seq::IndexedRandom as _};
use rand_distr::Normal;

use crate::{
    config::{ConfigError, EvolverConfig},
    weights,
};

/// Hands out genome ids that are unique within a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenomeIdGenerator {
    next: u64,
}

impl GenomeIdGenerator {
    /// Generator whose first id is `next`.
    #[must_use]
    pub fn starting_at(next: GenomeId) -> Self {
        Self { next: next.0 }
    }

    /// Id the next call to [`Self::next_id`] will return.
    #[must_use]
    pub fn peek(&self) -> GenomeId {
        GenomeId(self.next)
    }

    pub fn next_id(&mut self) -> GenomeId {
        let id = GenomeId(self.next);
        self.next += 1;
        id
    }
}

/// A genome and the fitness it earned in the current generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Genome,
    fitness: f32,
}

impl Individual {
    /// An individual that has not been evaluated yet.
    #[must_use]
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: 0.0,
        }
    }

    #[must_use]
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    #[must_use]
    pub fn id(&self) -> GenomeId {
        self.genome.id()
    }

    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }
}

/// A genome that was evaluated but has no entry in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no fitness recorded for genome {genome}")]
pub struct MissingFitness {
    #[error(not(source))]
    pub genome: GenomeId,
}

/// The individuals of one generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// `count` individuals with weights uniform in `[-init_weight, init_weight]`.
    pub fn random<R>(
        count: usize,
        weight_count: usize,
        init_weight: f32,
        ids: &mut GenomeIdGenerator,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let individuals = (0..count)
            .map(|_| {
                let weights = weights::random(rng, init_weight, weight_count);
                Individual::new(Genome::new(ids.next_id(), weights))
            })
            .collect();
        Self { individuals }
    }

    #[must_use]
    pub fn from_genomes(genomes: Vec<Genome>) -> Self {
        Self {
            individuals: genomes.into_iter().map(Individual::new).collect(),
        }
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    #[must_use]
    pub fn genomes(&self) -> Vec<Genome> {
        self.individuals.iter().map(|ind| ind.genome.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Copies fitness from `ledger` and sorts the individuals by fitness, best first.
    ///
    /// The sort is stable, so individuals with equal fitness keep their evaluation order.
    pub fn apply_fitness(&mut self, ledger: &FitnessLedger) -> Result<(), MissingFitness> {
        for ind in &mut self.individuals {
            ind.fitness = ledger
                .fitness(ind.id())
                .ok_or(MissingFitness { genome: ind.id() })?;
        }
        self.individuals
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
        Ok(())
    }

    /// Highest-ranked individual. Meaningful after [`Self::apply_fitness`].
    #[must_use]
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }
}

/// Breeds the next generation from a ranked population.
#[derive(Debug, Clone)]
pub struct PopulationEvolver {
    pub elite_count: usize,
    pub tournament_size: usize,
    pub blx_alpha: f32,
    pub mutation_rate: f32,
    pub max_weight: f32,
    noise: Normal<f32>,
}

impl PopulationEvolver {
    pub fn new(config: &EvolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let noise =
            Normal::new(0.0, config.mutation_sigma).map_err(|_| ConfigError::NonPositive {
                field: "mutation_sigma",
                value: config.mutation_sigma,
            })?;
        Ok(Self {
            elite_count: config.elite_count,
            tournament_size: config.tournament_size,
            blx_alpha: config.blx_alpha,
            mutation_rate: config.mutation_rate,
            max_weight: config.max_weight,
            noise,
        })
    }

    /// Returns a population of the same size as `population`.
    ///
    /// `population` must be ranked by [`Population::apply_fitness`].
    pub fn evolve<R>(
        &self,
        population: &Population,
        ids: &mut GenomeIdGenerator,
        rng: &mut R,
    ) -> Population
    where
        R: Rng + ?Sized,
    {
        let parents = &population.individuals;
        debug_assert!(parents.is_sorted_by(|a, b| a.fitness >= b.fitness));

        let elite_count = self.elite_count.min(parents.len());
        let mut next = parents[..elite_count]
            .iter()
            .map(|ind| Individual::new(ind.genome.clone()))
            .collect::<Vec<_>>();

        while next.len() < parents.len() {
            let (Some(p1), Some(p2)) = (
                tournament_select(parents, self.tournament_size, rng),
                tournament_select(parents, self.tournament_size, rng),
            ) else {
                break;
            };

            let mut child = weights::blx_alpha(
                p1.genome.weights(),
                p2.genome.weights(),
                self.blx_alpha,
                self.max_weight,
                rng,
            );
            weights::mutate(
                &mut child,
                &self.noise,
                self.max_weight,
                self.mutation_rate,
                rng,
            );
            next.push(Individual::new(Genome::new(ids.next_id(), child)));
        }

        Population { individuals: next }
    }
}

/// Fittest of `tournament_size` distinct random individuals, or `None` if there are none.
fn tournament_select<'a, R>(
    population: &'a [Individual],
    tournament_size: usize,
    rng: &mut R,
) -> Option<&'a Individual>
where
    R: Rng + ?Sized,
{
    population
        .choose_multiple(rng, tournament_size)
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
}
