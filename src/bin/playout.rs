use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::ai::RandomAgent;
use connect_four::arena::{self, MatchStats};
use connect_four::config::AppConfig;
use connect_four::game::{ConnectFour, GameState, Player};

/// Replay a Connect Four move list or play out random games.
#[derive(Parser)]
#[command(name = "playout", about = "Replay or simulate Connect Four games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of random games
    #[arg(long)]
    games: Option<usize>,

    /// Override the random agents' seed
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated columns to replay instead of playing random games
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print every move of a replay as it is played
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.playout.games = games;
    }
    if let Some(seed) = cli.seed {
        config.playout.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    match cli.moves {
        Some(moves) => run_replay(&config, &moves, cli.verbose),
        None => run_batch(&config),
    }
}

fn run_replay(config: &AppConfig, moves: &[usize], verbose: bool) -> Result<()> {
    let mut engine = ConnectFour::with_config(config.board.clone())
        .context("building board from config")?;

    if verbose {
        engine.add_observer(|state: &GameState| {
            println!(
                "Move {:>2} | to play: {} | status: {}",
                state.moves_made(),
                state.current_player(),
                state.status()
            );
        });
    }

    let result = arena::replay(&mut engine, moves);

    println!("{}", engine.state().board());
    println!(
        "Moves made: {} | Player: {} | Status: {}",
        engine.moves_made(),
        engine.current_player(),
        engine.status()
    );

    result.with_context(|| format!("replaying move {}", engine.moves_made() + 1))?;
    Ok(())
}

fn run_batch(config: &AppConfig) -> Result<()> {
    let playout = &config.playout;
    let (mut p1, mut p2) = match playout.seed {
        Some(seed) => (
            RandomAgent::with_seed(seed),
            RandomAgent::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomAgent::new(), RandomAgent::new()),
    };
    let mut engine = ConnectFour::with_config(config.board.clone())
        .context("building board from config")?;
    let mut stats = MatchStats::with_capacity(playout.stats_window);
    let window = playout.stats_window;

    println!(
        "Playing {} random games on a {}x{} board (connect {})...",
        playout.games, config.board.rows, config.board.cols, config.board.connect
    );
    println!("-------------------------------------------");

    for game in 1..=playout.games {
        engine.reset();
        let record = arena::play_game(&mut engine, &mut p1, &mut p2)
            .with_context(|| format!("playing game {game}"))?;
        stats.record(&record);

        if game % playout.log_interval == 0 {
            println!(
                "Game {}/{} | P1: {:.1}% | P2: {:.1}% | tie: {:.1}% | avg_len: {:.1}",
                game,
                playout.games,
                stats.win_rate(Player::P1, window) * 100.0,
                stats.win_rate(Player::P2, window) * 100.0,
                stats.tie_rate(window) * 100.0,
                stats.average_game_length(window),
            );
        }
    }

    println!("-------------------------------------------");
    println!(
        "Finished {} games. P1 wins: {} | P2 wins: {} | ties: {}",
        stats.total_games(),
        stats.wins(Player::P1),
        stats.wins(Player::P2),
        stats.ties()
    );
    Ok(())
}
