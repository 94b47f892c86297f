//! The evolutionary algorithm behind a capability interface.
//!
//! A [`PopulationDriver`] owns the current generation. The training loop asks it for the
//! genomes to evaluate, hands back the filled [`FitnessLedger`], and tells it to breed. The
//! [`GeneticDriver`] implementation uses [`PopulationEvolver`]; any other strategy can be
//! plugged into [`Trainer`](crate::trainer::Trainer) the same way.

use pongevo_evaluator::{
    fitness::FitnessLedger,
    genome::{Genome, GenomeId},
};
use rand_pcg::Pcg32;

use crate::{
    config::{ConfigError, TrainingConfig},
    genetic::{GenomeIdGenerator, Individual, MissingFitness, Population, PopulationEvolver},
};

pub trait PopulationDriver {
    /// Zero-based index of the generation returned by [`Self::genomes`].
    fn generation(&self) -> usize;

    /// Genomes of the current generation, in evaluation order.
    fn genomes(&self) -> Vec<Genome>;

    /// Merges the evaluated fitness into the current generation and returns it ranked best
    /// first.
    fn report_fitness(&mut self, ledger: &FitnessLedger) -> Result<&[Individual], MissingFitness>;

    /// Replaces the current generation with its offspring.
    fn breed(&mut self);

    /// Id the next new genome will get.
    fn next_genome_id(&self) -> GenomeId;
}

/// Elitist genetic algorithm with tournament selection, BLX-α crossover and Gaussian mutation.
#[derive(Debug, Clone)]
pub struct GeneticDriver {
    population: Population,
    evolver: PopulationEvolver,
    ids: GenomeIdGenerator,
    generation: usize,
    rng: Pcg32,
}

impl GeneticDriver {
    /// Starts from a random population sized and shaped by `config`.
    pub fn new(config: &TrainingConfig, mut rng: Pcg32) -> Result<Self, ConfigError> {
        let evolver = PopulationEvolver::new(&config.evolver)?;
        let mut ids = GenomeIdGenerator::default();
        let population = Population::random(
            config.population_size,
            config.network.weight_count(),
            config.evolver.init_weight,
            &mut ids,
            &mut rng,
        );
        Ok(Self {
            population,
            evolver,
            ids,
            generation: 0,
            rng,
        })
    }

    /// Continues from saved genomes. `generation` is the index of the generation they form.
    pub fn resume(
        config: &TrainingConfig,
        genomes: Vec<Genome>,
        next_genome_id: GenomeId,
        generation: usize,
        rng: Pcg32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            population: Population::from_genomes(genomes),
            evolver: PopulationEvolver::new(&config.evolver)?,
            ids: GenomeIdGenerator::starting_at(next_genome_id),
            generation,
            rng,
        })
    }
}

impl PopulationDriver for GeneticDriver {
    fn generation(&self) -> usize {
        self.generation
    }

    fn genomes(&self) -> Vec<Genome> {
        self.population.genomes()
    }

    fn report_fitness(&mut self, ledger: &FitnessLedger) -> Result<&[Individual], MissingFitness> {
        self.population.apply_fitness(ledger)?;
        Ok(self.population.individuals())
    }

    fn breed(&mut self) {
        self.population = self
            .evolver
            .evolve(&self.population, &mut self.ids, &mut self.rng);
        self.generation += 1;
    }

    fn next_genome_id(&self) -> GenomeId {
        self.ids.peek()
    }
}
