mod config;
mod input;
mod render;
mod runner;
mod stats;

use std::path::Path;
use std::time::Duration;

use clap::{Parser, Subcommand};
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, Side, TicTacToeSession, TicTacToeSessionSettings};
use common::history::{GameMode, load_history, save_history};
use common::{log, log_debug, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use runner::{PlayOptions, run_matches, run_watch};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against the computer or a friend")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the computer (default) or another person at this terminal.
    Play {
        #[arg(long)]
        two_player: bool,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        side: Option<Side>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Store the current options as the new defaults.
        #[arg(long)]
        save: bool,
    },
    /// Let two bots play each other.
    Watch {
        #[arg(long, default_value = "hard")]
        x: Difficulty,
        #[arg(long, default_value = "easy")]
        o: Difficulty,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show results recorded in the match history.
    Stats {
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(&args.config);
    let config = config_manager.get_config()?;

    match args.command.unwrap_or(Command::Play {
        two_player: false,
        difficulty: None,
        side: None,
        name: None,
        seed: None,
        save: false,
    }) {
        Command::Play {
            two_player,
            difficulty,
            side,
            name,
            seed,
            save,
        } => {
            let config = Config {
                player_name: name.unwrap_or(config.player_name),
                difficulty: difficulty.unwrap_or(config.difficulty),
                human_side: side.unwrap_or(config.human_side),
                ..config
            };
            if save {
                config_manager.set_config(&config)?;
                log!("Saved settings to {}", args.config);
            }
            play(&config, two_player, seed)
        }
        Command::Watch { x, o, games, seed } => watch(&config, x, o, games, seed),
        Command::Stats { name } => {
            let history = load_history(Path::new(&config.history_file))?;
            let name = name.unwrap_or(config.player_name);
            stats::write_stats(&history, &name, &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> SessionRng {
    seed.map_or_else(SessionRng::from_random, SessionRng::new)
}

fn play(config: &Config, two_player: bool, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if two_player {
        GameMode::TwoPlayer
    } else {
        GameMode::VsAi
    };

    let settings = TicTacToeSessionSettings {
        mode,
        player_name: config.player_name.clone(),
        human_side: config.human_side,
        difficulty: config.difficulty,
        opponent_difficulty: config.difficulty,
    };
    let mut session = TicTacToeSession::new("local".to_string(), settings, make_rng(seed));
    log_debug!("Starting {} as {}", mode, config.player_name);

    let history_path = Path::new(&config.history_file);
    let options = PlayOptions {
        bot_delay: Duration::from_millis(config.bot_delay_ms),
    };

    let stdin = std::io::stdin();
    run_matches(
        &mut session,
        &mut stdin.lock(),
        &mut std::io::stdout().lock(),
        &options,
        |finished| {
            let Some(record) = finished.match_record() else {
                return;
            };
            let saved = load_history(history_path).and_then(|mut history| {
                history.push(record);
                save_history(history_path, &history)
            });
            if let Err(e) = saved {
                log!("Failed to save match result: {}", e);
            }
        },
    )?;

    Ok(())
}

fn watch(
    config: &Config,
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = TicTacToeSessionSettings {
        mode: GameMode::AiVsAi,
        player_name: config.player_name.clone(),
        human_side: Side::X,
        difficulty: x,
        opponent_difficulty: o,
    };
    let mut session = TicTacToeSession::new("watch".to_string(), settings, make_rng(seed));
    let options = PlayOptions {
        bot_delay: Duration::from_millis(config.bot_delay_ms),
    };
    run_watch(&mut session, games, &mut std::io::stdout().lock(), &options)?;
    Ok(())
}
