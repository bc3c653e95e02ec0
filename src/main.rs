//! Pente in the terminal
//!
//! `pente play` pits a human against the AI over stdin; `pente compare`
//! searches one position with both variants and prints time and node counts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use pente::search::Searcher;
use pente::{
    AiController, BoardSizeError, ConfigError, EvaluatorKind, GameState, InvalidMove, Outcome, Player,
    SearchConfig, SearchVariant, BOARD_SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "pente", version, about = "Pente rule engine and minimax / alpha-beta opponent")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the AI; enter moves as `row col`, `quit` to leave
    Play {
        /// Board size
        #[arg(long, default_value_t = BOARD_SIZE)]
        size: usize,
        /// Side the AI plays (1 moves first)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
        ai: u8,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Compare minimax and alpha-beta on the same position, depth by depth
    Compare {
        /// Board size
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Deepest depth to compare
        #[arg(long, default_value_t = 3)]
        depth: u32,
        /// Opening moves played alternately before searching, as `row,col`
        #[arg(long = "move", value_name = "ROW,COL")]
        moves: Vec<String>,
        /// Evaluator used by both variants
        #[arg(long, default_value = "full")]
        evaluator: EvaluatorKind,
        /// Candidates expanded per node, every empty cell if unset
        #[arg(long)]
        candidate_limit: Option<usize>,
    },
}

/// Search options; flags override values from `--config`.
#[derive(Args, Debug)]
struct SearchArgs {
    /// TOML search configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(long)]
    variant: Option<SearchVariant>,
    #[arg(long)]
    evaluator: Option<EvaluatorKind>,
    #[arg(long)]
    depth: Option<u32>,
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,
    #[arg(long)]
    candidate_limit: Option<usize>,
}

impl SearchArgs {
    fn resolve(&self) -> Result<SearchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_path(path)?,
            None => SearchConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(evaluator) = self.evaluator {
            config.evaluator = evaluator;
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(ms) = self.time_limit_ms {
            config.time_limit = Duration::from_millis(ms);
        }
        if self.candidate_limit.is_some() {
            config.candidate_limit = self.candidate_limit;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    BoardSize(#[from] BoardSizeError),
    #[error("illegal move: {0}")]
    Move(#[from] InvalidMove),
    #[error("cannot parse `{0}` as a move")]
    Coordinate(String),
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.cmd {
        Command::Play { size, ai, search } => {
            let ai_player = if ai == 1 { Player::One } else { Player::Two };
            search
                .resolve()
                .map_err(CliError::from)
                .and_then(|config| play(size, ai_player, config))
        }
        Command::Compare {
            size,
            depth,
            moves,
            evaluator,
            candidate_limit,
        } => compare(size, depth, &moves, evaluator, candidate_limit),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Parse `row col` or `row,col`.
fn parse_coordinate(input: &str) -> Result<(i32, i32), CliError> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let bad = || CliError::Coordinate(input.to_string());
    let row = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let col = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((row, col))
}

fn print_state(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", state.board())?;
    writeln!(
        out,
        "captures: X {}  O {}",
        state.captures(Player::One),
        state.captures(Player::Two)
    )
}

fn play(size: usize, ai_player: Player, config: SearchConfig) -> Result<(), CliError> {
    let mut state = GameState::new(size)?;
    let ai = AiController::new(ai_player, config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    loop {
        print_state(&mut out, &state)?;

        if let Some(outcome) = state.outcome() {
            match outcome {
                Outcome::Win(player) if player == ai_player => writeln!(out, "The AI wins.")?,
                Outcome::Win(_) => writeln!(out, "You win!")?,
                Outcome::Draw => writeln!(out, "Board full: draw.")?,
            }
            return Ok(());
        }

        if state.current_player() == ai_player {
            let result = ai.get_move_with_stats(&mut state);
            let Some(pos) = result.best_move else {
                writeln!(out, "The AI has no move.")?;
                return Ok(());
            };
            state.play(pos)?;
            writeln!(
                out,
                "AI plays {} {} (depth {}, {} nodes, {} ms{})",
                pos.row,
                pos.col,
                result.depth,
                result.nodes(),
                result.elapsed.as_millis(),
                if result.timed_out { ", out of time" } else { "" }
            )?;
            continue;
        }

        write!(out, "{} (row col)> ", state.current_player())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        match parse_coordinate(input).map(|(row, col)| state.make_move(row, col)) {
            Ok(Ok(pairs)) if pairs > 0 => writeln!(out, "Captured {} pair(s).", pairs)?,
            Ok(Ok(_)) => {}
            Ok(Err(err)) => writeln!(out, "Invalid move: {}", err)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
}

fn compare(
    size: usize,
    max_depth: u32,
    moves: &[String],
    evaluator: EvaluatorKind,
    candidate_limit: Option<usize>,
) -> Result<(), CliError> {
    let mut state = GameState::new(size)?;
    for mv in moves {
        let (row, col) = parse_coordinate(mv)?;
        state.make_move(row, col)?;
    }
    let player = state.current_player();
    let mut out = io::stdout().lock();

    print_state(&mut out, &state)?;
    writeln!(out, "searching for {}", player)?;
    writeln!(
        out,
        "{:>5}  {:<10} {:>8} {:>12} {:>10} {:>10}  {}",
        "depth", "variant", "move", "nodes", "cutoffs", "ms", "score"
    )?;

    let eval = evaluator.build();
    let captures = state.capture_counts();
    for depth in 1..=max_depth.max(1) {
        for variant in [SearchVariant::Minimax, SearchVariant::AlphaBeta] {
            let mut searcher = Searcher::new(eval.as_ref(), variant, candidate_limit);
            let start = Instant::now();
            let result = searcher.search_root(state.board_mut(), player, captures, depth, None);
            let elapsed = start.elapsed();
            let stats = searcher.stats();
            let mv = result
                .best_move
                .map_or_else(|| "-".to_string(), |p| format!("{},{}", p.row, p.col));
            writeln!(
                out,
                "{:>5}  {:<10} {:>8} {:>12} {:>10} {:>10}  {}",
                depth,
                variant.to_string(),
                mv,
                stats.nodes,
                stats.cutoffs,
                elapsed.as_millis(),
                result.score
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("3 4").unwrap(), (3, 4));
        assert_eq!(parse_coordinate("3,4").unwrap(), (3, 4));
        assert_eq!(parse_coordinate(" -1  7 ").unwrap(), (-1, 7));
        assert!(parse_coordinate("3").is_err());
        assert!(parse_coordinate("a b").is_err());
        assert!(parse_coordinate("1 2 3").is_err());
    }

    #[test]
    fn test_search_args_override_defaults() {
        let args = SearchArgs {
            config: None,
            variant: Some(SearchVariant::Minimax),
            evaluator: None,
            depth: Some(4),
            time_limit_ms: Some(250),
            candidate_limit: None,
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.variant, SearchVariant::Minimax);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.time_limit, Duration::from_millis(250));
        assert_eq!(config.candidate_limit, SearchConfig::default().candidate_limit);
    }

    #[test]
    fn test_search_args_reject_zero_depth() {
        let args = SearchArgs {
            config: None,
            variant: None,
            evaluator: None,
            depth: Some(0),
            time_limit_ms: None,
            candidate_limit: None,
        };
        assert!(matches!(args.resolve(), Err(ConfigError::InvalidDepth)));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["pente", "compare", "--depth", "2", "--move", "4,4"]).unwrap();
        assert!(matches!(cli.cmd, Command::Compare { depth: 2, .. }));
        let cli = Cli::try_parse_from(["pente", "play", "--ai", "1", "--variant", "minimax"]).unwrap();
        assert!(matches!(cli.cmd, Command::Play { ai: 1, .. }));
        assert!(Cli::try_parse_from(["pente", "play", "--ai", "3"]).is_err());
    }
}
