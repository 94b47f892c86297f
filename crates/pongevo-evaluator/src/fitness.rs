//! Per-generation fitness bookkeeping.

use std::collections::BTreeMap;

use pongevo_engine::GameInfo;

use crate::genome::GenomeId;

/// Accumulated fitness of each genome evaluated in one generation.
///
/// Entries are created with [`FitnessLedger::begin`] before a genome's first match, so a genome
/// that never touches the ball still shows up with a fitness of zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessLedger {
    entries: BTreeMap<GenomeId, f32>,
}

impl FitnessLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` with zero fitness unless it is already present.
    pub fn begin(&mut self, id: GenomeId) {
        self.entries.entry(id).or_insert(0.0);
    }

    pub fn add(&mut self, id: GenomeId, amount: f32) {
        *self.entries.entry(id).or_insert(0.0) += amount;
    }

    /// Credits each side of a finished match with its own paddle's hit count.
    #[expect(clippy::cast_precision_loss)]
    pub fn record_match(&mut self, left: GenomeId, right: GenomeId, info: &GameInfo) {
        self.add(left, info.left_hits as f32);
        self.add(right, info.right_hits as f32);
    }

    #[must_use]
    pub fn fitness(&self, id: GenomeId) -> Option<f32> {
        self.entries.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GenomeId, f32)> + '_ {
        self.entries.iter().map(|(id, fitness)| (*id, *fitness))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Genome with the highest fitness. Ties go to the smallest id.
    #[must_use]
    pub fn best(&self) -> Option<(GenomeId, f32)> {
        self.iter().fold(None, |best, (id, fitness)| match best {
            Some((_, best_fitness)) if best_fitness >= fitness => best,
            _ => Some((id, fitness)),
        })
    }
}
