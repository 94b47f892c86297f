use std::path::PathBuf;

use pongevo_evaluator::match_evaluator::MatchRules;

use crate::{
    command::versus::{FPS, KeyboardController, LeftPlayer, VersusApp},
    model::trained_model::TrainedModel,
    tui::Tui,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Trained model controlling the right paddle (JSON)
    #[arg(long)]
    model: PathBuf,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let model = TrainedModel::open(&arg.model)?;
    let network = model.build_network()?;

    let mut app = VersusApp::new(
        model.arena,
        MatchRules::default(),
        LeftPlayer::Human(KeyboardController::default()),
        network,
    )
    .names("you".to_owned(), model.name.clone());
    Tui::with_tick_rate(FPS).run(&mut app)?;

    let tally = app.tally();
    println!(
        "{} matches: you {} - {} {}",
        tally.matches, tally.left_wins, tally.right_wins, model.name
    );
    Ok(())
}
