use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

use self::{config::ConfigArg, play::PlayArg, plot::PlotArg, train::TrainArg, watch::WatchArg};

mod config;
mod play;
mod plot;
mod train;
pub mod versus;
mod watch;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Train paddle controllers with the genetic algorithm
    Train(#[clap(flatten)] TrainArg),
    /// Play against a trained model
    Play(#[clap(flatten)] PlayArg),
    /// Watch trained models play each other
    Watch(#[clap(flatten)] WatchArg),
    /// Chart the fitness of a training run
    Plot(#[clap(flatten)] PlotArg),
    /// Print the default training configuration
    Config(#[clap(flatten)] ConfigArg),
}

impl Mode {
    fn is_interactive(&self) -> bool {
        matches!(self, Mode::Play(_) | Mode::Watch(_) | Mode::Plot(_))
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.mode.is_interactive());
    match &args.mode {
        Mode::Train(arg) => train::run(arg)?,
        Mode::Play(arg) => play::run(arg)?,
        Mode::Watch(arg) => watch::run(arg)?,
        Mode::Plot(arg) => plot::run(arg)?,
        Mode::Config(arg) => config::run(arg)?,
    }
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `info`). The TUI modes only let warnings
/// through so the alternate screen stays readable.
fn init_logging(interactive: bool) {
    let filter = if interactive {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_interactive_modes() {
        let parse = |args: &[&str]| CommandArgs::try_parse_from(args).unwrap().mode;
        assert!(!parse(&["pongevo", "train", "--config", "train.json"]).is_interactive());
        assert!(!parse(&["pongevo", "config"]).is_interactive());
        assert!(parse(&["pongevo", "play", "--model", "best.json"]).is_interactive());
        assert!(parse(&["pongevo", "watch", "--model", "best.json"]).is_interactive());
        assert!(parse(&["pongevo", "plot", "--stats", "stats.json"]).is_interactive());
    }

    #[test]
    fn test_mode_is_required() {
        assert!(CommandArgs::try_parse_from(["pongevo"]).is_err());
    }
}
