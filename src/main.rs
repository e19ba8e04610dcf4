use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use minimax_connect_four::ai::{
    minimax::{INFINITY, NEG_INFINITY},
    Agent, Difficulty, MinimaxAgent, RandomAgent, SearchStats, Searcher, MAX_DEPTH,
};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::{GameOutcome, GameState, Player};
use minimax_connect_four::ui::Console;

/// Play Connect Four against a minimax engine.
#[derive(Parser)]
#[command(name = "connect-four", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game in the terminal (default)
    Play {
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Let the AI drop the first piece
        #[arg(long)]
        ai_first: bool,
    },
    /// Search a position given as 0-based column digits, human moving first
    Analyze {
        #[arg(default_value = "")]
        moves: String,

        /// Override the search depth
        #[arg(long)]
        depth: Option<u32>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pit the minimax agent against a random agent
    Selfplay {
        #[arg(long, default_value_t = 20)]
        games: usize,

        /// Override the search depth
        #[arg(long)]
        depth: Option<u32>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[derive(serde::Serialize)]
struct Analysis {
    moves: String,
    to_move: Player,
    depth: u32,
    outcome: Option<GameOutcome>,
    column: Option<usize>,
    score: i64,
    stats: SearchStats,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play {
        difficulty: None,
        ai_first: false,
    }) {
        Command::Play {
            difficulty,
            ai_first,
        } => {
            if let Some(difficulty) = difficulty {
                config.search.difficulty = difficulty;
                config.search.depth = None;
            }
            if ai_first {
                config.game.human_first = false;
            }
            play(&config)
        }
        Command::Analyze { moves, depth, json } => {
            apply_depth(&mut config, depth)?;
            analyze(&config, &moves, json)
        }
        Command::Selfplay { games, depth, seed } => {
            apply_depth(&mut config, depth)?;
            selfplay(&config, games, seed);
            Ok(())
        }
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml()?);
            Ok(())
        }
    }
}

fn apply_depth(config: &mut AppConfig, depth: Option<u32>) -> Result<()> {
    if let Some(depth) = depth {
        if depth == 0 || depth > MAX_DEPTH {
            bail!("depth must be in 1..={MAX_DEPTH}, got {depth}");
        }
        config.search.depth = Some(depth);
    }
    Ok(())
}

fn play(config: &AppConfig) -> Result<()> {
    log::info!(
        "starting game at depth {}",
        config.search.effective_depth()
    );
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config);
    console.run().context("console I/O failed")
}

fn analyze(config: &AppConfig, moves: &str, json: bool) -> Result<()> {
    let state = GameState::from_moves(moves).with_context(|| format!("parsing moves {moves:?}"))?;
    let depth = config.search.effective_depth();
    let mut searcher = Searcher::new(config.search.terminal_scores());
    let maximizing = state.current_player() == Player::Ai;
    let result = searcher.minimax(state.board(), depth, NEG_INFINITY, INFINITY, maximizing);

    let analysis = Analysis {
        moves: moves.to_string(),
        to_move: state.current_player(),
        depth,
        outcome: state.outcome(),
        column: result.column,
        score: result.score,
        stats: searcher.stats(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}\n", state.board());
    match (analysis.outcome, analysis.column) {
        (Some(GameOutcome::Winner(player)), _) => println!("Game over: {} won.", player.name()),
        (Some(GameOutcome::Draw), _) => println!("Game over: draw."),
        (None, Some(col)) => println!(
            "{} to move, best column {} (score {}, depth {}, {} nodes)",
            analysis.to_move.name(),
            col + 1,
            analysis.score,
            depth,
            analysis.stats.nodes
        ),
        (None, None) => println!("No move found (score {}).", analysis.score),
    }
    Ok(())
}

fn selfplay(config: &AppConfig, games: usize, seed: Option<u64>) {
    let mut minimax = MinimaxAgent::from_config(&config.search);
    let (mut wins, mut losses, mut draws) = (0, 0, 0);

    for game in 0..games {
        let mut random = match seed {
            Some(seed) => RandomAgent::with_seed(seed.wrapping_add(game as u64)),
            None => RandomAgent::new(),
        };
        let first = if game % 2 == 0 { Player::Ai } else { Player::Human };
        let mut state = GameState::initial(first);

        while !state.is_terminal() {
            let action = match state.current_player() {
                Player::Ai => minimax.select_action(&state),
                Player::Human => random.select_action(&state),
            };
            let Some(col) = action else { break };
            if let Err(err) = state.play(col) {
                log::error!("game {game}: agent picked column {col}: {err}");
                break;
            }
        }

        match state.outcome() {
            Some(GameOutcome::Winner(Player::Ai)) => wins += 1,
            Some(GameOutcome::Winner(Player::Human)) => losses += 1,
            _ => draws += 1,
        }
        log::info!("game {}: {:?}", game + 1, state.outcome());
    }

    println!(
        "{} (depth {}) vs Random: {wins} wins, {losses} losses, {draws} draws",
        minimax.name(),
        minimax.depth()
    );
}
