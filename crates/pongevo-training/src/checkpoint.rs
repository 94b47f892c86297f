//! Resumable snapshots of a training run.
//!
//! A checkpoint is written after a generation has been evaluated and bred. It stores the
//! offspring that form the next generation, so resuming continues exactly where the run
//! stopped, apart from the random stream, which is re-derived from the configured seed.

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use pongevo_evaluator::genome::{Genome, GenomeId};
use serde::{Deserialize, Serialize};

use crate::{config::TrainingConfig, statistics::TrainingStatistics, trainer::BestGenome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Index of the last evaluated generation.
    pub generation: usize,
    pub config: TrainingConfig,
    /// Genomes of generation `generation + 1`, not evaluated yet.
    pub genomes: Vec<Genome>,
    pub next_genome_id: GenomeId,
    pub statistics: TrainingStatistics,
    pub best: Option<BestGenome>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CheckpointError {
    #[display("failed to access checkpoint {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("invalid checkpoint JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Checkpoint {
    /// `checkpoint-<generation>.json`, zero-padded so files sort by generation.
    ///
    /// ```
    /// use pongevo_training::checkpoint::Checkpoint;
    ///
    /// assert_eq!(Checkpoint::file_name(7), "checkpoint-0007.json");
    /// ```
    #[must_use]
    pub fn file_name(generation: usize) -> String {
        format!("checkpoint-{generation:04}.json")
    }

    /// Writes the checkpoint into `dir`, creating it if needed, and returns the file path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, CheckpointError> {
        let path = dir.join(Self::file_name(self.generation));
        let io_error = |source| CheckpointError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(io_error)?;
        let mut writer = BufWriter::new(File::create(&path).map_err(io_error)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            CheckpointError::Json {
                path: path.clone(),
                source,
            }
        })?;
        writeln!(writer).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
        Ok(path)
    }

    pub fn load(path: &Path) -> Result<Self, CheckpointError> {
        let file = File::open(path).map_err(|source| CheckpointError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CheckpointError::Json {
            path: path.to_owned(),
            source,
        })
    }
}
