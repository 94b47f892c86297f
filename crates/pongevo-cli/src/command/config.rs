use std::path::PathBuf;

use pongevo_training::config::TrainingConfig;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// Output file path (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ConfigArg) -> anyhow::Result<()> {
    Output::save_json(&TrainingConfig::default(), arg.output.clone())
}
