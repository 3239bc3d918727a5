mod config;
mod offline;
mod ui;

use std::io;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, FirstPlayer, MinimaxBot};
use common::{log, logger};

use config::get_config_manager;
use offline::TicTacToeRunner;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax bot")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    computer_first: bool,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if let Some(size) = args.size {
        config.game.board_size = size;
    }
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if args.computer_first {
        config.game.first_player = FirstPlayer::Computer;
    }
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose_logging);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", config_manager.file_path());
    }

    let game = &config.game;
    if !game.search_is_tractable() {
        log!(
            "Warning: exhaustive search on a {}x{} board may take a very long time",
            game.board_size,
            game.board_size
        );
    }

    let rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    log!("Starting session with seed {}", rng.seed());

    let bot = MinimaxBot::new(game.board_size, game.difficulty);
    let mut runner = TicTacToeRunner::new(
        io::stdin().lock(),
        io::stdout().lock(),
        bot,
        game.first_player,
        rng,
    );
    runner.run()?;

    log!("Session finished: {}", runner.stats());
    Ok(())
}
