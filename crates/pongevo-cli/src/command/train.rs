use std::path::PathBuf;

use anyhow::Context as _;
use pongevo_training::{checkpoint::Checkpoint, config::TrainingConfig, trainer::Trainer};

use crate::{
    model::trained_model::TrainedModel,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Training configuration (JSON). Missing fields take their default values
    #[arg(long, required_unless_present = "resume")]
    config: Option<PathBuf>,
    /// Override the generation limit of the configuration or checkpoint
    #[arg(long)]
    generations: Option<usize>,
    /// Output file for the best genome (stdout if not specified)
    #[arg(long)]
    best: Option<PathBuf>,
    /// Output file for per-generation statistics
    #[arg(long)]
    stats: Option<PathBuf>,
    /// Directory receiving a checkpoint after every generation
    #[arg(long)]
    checkpoint_dir: Option<PathBuf>,
    /// Checkpoint to continue training from
    #[arg(long, conflicts_with = "config")]
    resume: Option<PathBuf>,
    /// Name recorded in the best genome file
    #[arg(long, default_value = "pongevo")]
    name: String,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let TrainArg {
        config,
        generations,
        best,
        stats,
        checkpoint_dir,
        resume,
        name,
    } = arg;

    let mut trainer = match (resume, config) {
        (Some(path), _) => {
            let checkpoint = Checkpoint::load(path)?;
            tracing::info!(
                path = %path.display(),
                generation = checkpoint.generation,
                "resuming from checkpoint"
            );
            Trainer::resume(checkpoint, *generations)
                .with_context(|| format!("Failed to resume from {}", path.display()))?
        }
        (None, Some(path)) => {
            let mut config: TrainingConfig = util::read_json_file("training config", path)?;
            if let Some(generations) = generations {
                config.max_generations = *generations;
            }
            Trainer::new(config)
                .with_context(|| format!("Invalid training config: {}", path.display()))?
        }
        (None, None) => anyhow::bail!("either --config or --resume is required"),
    };

    let config = trainer.config();
    tracing::info!(
        population = config.population_size,
        max_generations = config.max_generations,
        weights = config.network.weight_count(),
        seed = ?config.seed,
        start = trainer.generation(),
        "training started"
    );

    while !trainer.is_finished() {
        trainer.step()?;
        if let Some(dir) = checkpoint_dir
            && let Some(checkpoint) = trainer.checkpoint()
        {
            let path = checkpoint.save(dir)?;
            tracing::info!(path = %path.display(), "checkpoint saved");
        }
    }
    if let Some(reason) = trainer.stop_reason() {
        tracing::info!(
            %reason,
            generations = trainer.statistics().generations.len(),
            "training finished"
        );
    }

    let config = trainer.config().clone();
    let (statistics, best_genome) = trainer.into_results();
    let best_genome = best_genome.context("Training evaluated no generation")?;
    let model = TrainedModel::from_best(name.clone(), &best_genome, &config);

    let mut output = Output::from_output_path(best.clone())?;
    output.write_json(&model)?;
    tracing::info!(
        path = %output.display_path(),
        fitness = model.final_fitness,
        generation = model.generation,
        genome = %model.genome.id(),
        "best genome saved"
    );

    if let Some(path) = stats {
        Output::save_json(&statistics, Some(path.clone()))?;
        tracing::info!(path = %path.display(), "statistics saved");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use crate::command::{CommandArgs, Mode};

    use super::*;

    fn parse(args: &[&str]) -> TrainArg {
        match CommandArgs::try_parse_from(args).unwrap().mode {
            Mode::Train(arg) => arg,
            mode => panic!("expected train mode, got {mode:?}"),
        }
    }

    #[test]
    fn test_parse() {
        let arg = parse(&[
            "pongevo",
            "train",
            "--config",
            "train.json",
            "--generations",
            "5",
            "--checkpoint-dir",
            "checkpoints",
        ]);
        assert_eq!(arg.config, Some(PathBuf::from("train.json")));
        assert_eq!(arg.generations, Some(5));
        assert_eq!(arg.checkpoint_dir, Some(PathBuf::from("checkpoints")));
        assert_eq!(arg.name, "pongevo");
    }

    #[test]
    fn test_needs_config_or_checkpoint() {
        assert!(CommandArgs::try_parse_from(["pongevo", "train"]).is_err());
        assert_eq!(
            parse(&["pongevo", "train", "--resume", "checkpoint-0003.json"]).resume,
            Some(PathBuf::from("checkpoint-0003.json"))
        );
        assert!(
            CommandArgs::try_parse_from([
                "pongevo", "train", "--config", "a.json", "--resume", "b.json",
            ])
            .is_err()
        );
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("pongevo-train-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_run_writes_artifacts() {
        let dir = temp_dir("artifacts");
        let config_path = dir.join("train.json");
        std::fs::write(
            &config_path,
            r#"{ "population_size": 4, "max_generations": 2, "seed": 5 }"#,
        )
        .unwrap();

        let arg = TrainArg {
            config: Some(config_path),
            best: Some(dir.join("best.json")),
            stats: Some(dir.join("stats.json")),
            checkpoint_dir: Some(dir.join("checkpoints")),
            name: "test".to_owned(),
            ..TrainArg::default()
        };
        run(&arg).unwrap();

        let model = TrainedModel::open(dir.join("best.json")).unwrap();
        assert_eq!(model.name, "test");
        model.build_network().unwrap();
        let statistics: pongevo_training::statistics::TrainingStatistics =
            util::read_json_file("statistics", dir.join("stats.json")).unwrap();
        assert_eq!(statistics.generations.len(), 2);
        assert!(dir.join("checkpoints/checkpoint-0001.json").exists());

        // one more generation from the last checkpoint
        let arg = TrainArg {
            resume: Some(dir.join("checkpoints/checkpoint-0001.json")),
            generations: Some(3),
            best: Some(dir.join("best-resumed.json")),
            stats: Some(dir.join("stats-resumed.json")),
            ..TrainArg::default()
        };
        run(&arg).unwrap();
        let statistics: pongevo_training::statistics::TrainingStatistics =
            util::read_json_file("statistics", dir.join("stats-resumed.json")).unwrap();
        assert_eq!(statistics.generations.len(), 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let dir = temp_dir("invalid");
        let config_path = dir.join("train.json");
        std::fs::write(&config_path, r#"{ "population_size": 0 }"#).unwrap();
        let arg = TrainArg {
            config: Some(config_path),
            ..TrainArg::default()
        };
        let err = run(&arg).unwrap_err();
        assert!(err.to_string().contains("Invalid training config"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
