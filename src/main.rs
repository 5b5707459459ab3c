use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use slider_ida::{
    input::{parse_puzzle, PuzzleInput},
    render::{render_board, render_outcome, RenderOptions},
    search::DEFAULT_MAX_F,
    Board, GoalModel, Heuristic, SearchConfig, Solver,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Optimal sliding-tile puzzle solver (IDA*)", long_about = None)]
struct Args {
    /// Puzzle file: element count, blank goal index (-1 for last), then the
    /// tiles in row-major order. Read from stdin when omitted.
    #[arg(conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random solvable puzzle of this width instead of reading one
    #[arg(long, value_name = "SIZE", value_parser = clap::value_parser!(u16).range(1..=8))]
    random: Option<u16>,

    /// Seed for the random puzzle
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Scramble with this many random moves from the goal instead of shuffling
    #[arg(long, value_name = "STEPS", requires = "random")]
    scramble: Option<usize>,

    /// Goal index of the blank for a random puzzle (default: last cell)
    #[arg(long, value_name = "INDEX", requires = "random")]
    blank_goal: Option<usize>,

    /// Give up once the threshold reaches this f-value
    #[arg(long, default_value_t = DEFAULT_MAX_F)]
    max_f: u32,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Never generate the move that undoes the previous one
    #[arg(long)]
    prune_reversals: bool,

    /// Print only move labels
    #[arg(long)]
    no_boards: bool,

    /// Print only boards
    #[arg(long)]
    no_directions: bool,

    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    LinearConflict,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::LinearConflict => Heuristic::LinearConflict,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn read_puzzle(args: &Args) -> Result<PuzzleInput> {
    if let Some(size) = args.random {
        let goal = GoalModel::new(usize::from(size), args.blank_goal)?;
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = match args.scramble {
            Some(steps) => Board::scrambled(goal.board(), steps, &mut rng),
            None => Board::shuffled(goal.board(), &mut rng),
        };
        return Ok(PuzzleInput { board, goal });
    }

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle from {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read puzzle from stdin")?;
            text
        }
    };
    Ok(parse_puzzle(&text)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let PuzzleInput { board, goal } = read_puzzle(&args)?;

    let config = SearchConfig {
        max_f: args.max_f,
        heuristic: args.heuristic.into(),
        prune_reversals: args.prune_reversals,
    };
    let options = RenderOptions {
        boards: !args.no_boards,
        directions: !args.no_directions,
        color: match args.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_tty(),
        },
    };

    let mut stdout = io::stdout().lock();
    if args.random.is_some() && options.boards {
        render_board(&mut stdout, &board, options.color)?;
    }

    let mut solver = Solver::new(goal, config);
    let outcome = solver.solve(&board)?;
    let stats = solver.stats();
    info!(
        iterations = stats.iterations,
        nodes = stats.nodes_generated,
        threshold = stats.threshold,
        "search finished"
    );

    render_outcome(&mut stdout, &outcome, &options)?;
    Ok(())
}
