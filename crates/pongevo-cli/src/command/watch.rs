use std::path::PathBuf;

use pongevo_evaluator::match_evaluator::MatchRules;

use crate::{
    command::versus::{FPS, LeftPlayer, VersusApp},
    model::trained_model::TrainedModel,
    tui::Tui,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct WatchArg {
    /// Trained model controlling the left paddle (JSON)
    #[arg(long)]
    model: PathBuf,
    /// Trained model controlling the right paddle (the left model if not specified)
    #[arg(long)]
    opponent: Option<PathBuf>,
}

pub(crate) fn run(arg: &WatchArg) -> anyhow::Result<()> {
    let left = TrainedModel::open(&arg.model)?;
    let right = match &arg.opponent {
        Some(path) => TrainedModel::open(path)?,
        None => left.clone(),
    };
    if right.arena != left.arena {
        tracing::warn!(
            left = %left.name,
            right = %right.name,
            "models were trained on different arenas, using the left one"
        );
    }

    let mut app = VersusApp::new(
        left.arena,
        MatchRules::default(),
        LeftPlayer::Model(left.build_network()?),
        right.build_network()?,
    )
    .names(left.name.clone(), right.name.clone());
    Tui::with_tick_rate(FPS).run(&mut app)?;

    let tally = app.tally();
    println!(
        "{} matches: {} {} - {} {} ({} without a point)",
        tally.matches, left.name, tally.left_wins, tally.right_wins, right.name, tally.unscored
    );
    Ok(())
}
