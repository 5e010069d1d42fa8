mod config;
mod console;
mod game_runner;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{Difficulty, TicTacToeSession};
use common::{log, logger};

use config::{default_config_path, get_config_manager};
use game_runner::run_game;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Intermediate,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Opponent strength; overrides the config file.
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed for the easy opponent's random moves.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    /// Log engine activity to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(config_path.clone());
    let mut config = config_manager.get_config()?;

    if let Some(difficulty) = args.difficulty {
        config.session.difficulty = difficulty.into();
    }
    if args.seed.is_some() {
        config.session.seed = args.seed;
    }

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", config_path.display());
    }

    let mut session = TicTacToeSession::new(config.session);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_game(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
