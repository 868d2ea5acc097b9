//! Command-line driver: reads a point file, solves, prints the route.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use u_turnroute::generate::random_points;
use u_turnroute::io::{format_points, format_route, parse_points};
use u_turnroute::solver::{build_solver, SolverConfig, Strategy};

#[derive(Parser)]
#[command(name = "turnroute")]
#[command(about = "Shortest routes through points with turns of at least 90 degrees")]
#[command(version)]
struct Cli {
    /// Log solver statistics (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the instance in a point file (one point per line)
    Solve {
        /// Point file
        file: PathBuf,

        /// Required point dimension (default: taken from the first line)
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Search strategy
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Prefix length for the prefix strategy
        #[arg(short = 'k', long)]
        prefix_size: Option<usize>,

        /// Largest instance solved exactly by the auto strategy
        #[arg(long)]
        exact_threshold: Option<usize>,

        /// Time limit in milliseconds (0 = unlimited)
        #[arg(short, long)]
        time_limit_ms: Option<u64>,

        /// JSON solver configuration; flags override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a random instance in the input format
    Generate {
        /// Number of points
        #[arg(short = 'n', long)]
        count: usize,

        /// Point dimension
        #[arg(short, long, default_value = "2")]
        dimension: usize,

        /// Coordinates are drawn from [-extent, extent)
        #[arg(short, long, default_value = "100")]
        extent: f64,

        /// Random seed for reproducibility
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Exact up to the threshold, paired-start greedy above
    Auto,
    /// All permutations
    BruteForce,
    /// All permutations up to reversal
    FixedEndpoints,
    /// Recursive enumeration without pruning
    Backtracking,
    /// Recursive enumeration with pruning
    BranchAndBound,
    /// Single greedy pass
    NearestNeighbor,
    /// Greedy pass from every start point
    MultiStart,
    /// Greedy pass from every ordered start pair
    PairedStart,
    /// Greedy pass from every valid k-prefix
    PrefixStart,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::BruteForce => Strategy::BruteForce,
            StrategyArg::FixedEndpoints => Strategy::FixedEndpoints,
            StrategyArg::Backtracking => Strategy::Backtracking,
            StrategyArg::BranchAndBound => Strategy::BranchAndBound,
            StrategyArg::NearestNeighbor => Strategy::NearestNeighbor,
            StrategyArg::MultiStart => Strategy::MultiStart,
            StrategyArg::PairedStart => Strategy::PairedStart,
            StrategyArg::PrefixStart => Strategy::PrefixStart,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve {
            file,
            dimension,
            strategy,
            prefix_size,
            exact_threshold,
            time_limit_ms,
            config,
            json,
        } => {
            let mut solver_config = match config {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading config {}", path.display()))?;
                    serde_json::from_str::<SolverConfig>(&text)
                        .with_context(|| format!("parsing config {}", path.display()))?
                }
                None => SolverConfig::default(),
            };
            if let Some(s) = strategy {
                solver_config = solver_config.with_strategy(s.into());
            }
            if let Some(k) = prefix_size {
                solver_config = solver_config.with_prefix_size(k);
            }
            if let Some(t) = exact_threshold {
                solver_config = solver_config.with_exact_threshold(t);
            }
            if let Some(ms) = time_limit_ms {
                solver_config = solver_config.with_time_limit(ms);
            }
            solve(&file, dimension, &solver_config, json)
        }

        Commands::Generate {
            count,
            dimension,
            extent,
            seed,
        } => {
            if dimension == 0 {
                anyhow::bail!("dimension must be at least 1");
            }
            let points = random_points(count, dimension, extent, seed)?;
            print!("{}", format_points(&points));
            Ok(())
        }
    }
}

fn solve(file: &Path, dimension: Option<usize>, config: &SolverConfig, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading points from {}", file.display()))?;
    let points =
        parse_points(&text, dimension).with_context(|| format!("parsing {}", file.display()))?;
    tracing::info!(file = %file.display(), points = points.len(), "loaded instance");

    let solver = build_solver(config, points.len())?;
    let started = Instant::now();
    let outcome = solver.solve_with_stats(&points)?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if json {
        let report = serde_json::json!({
            "strategy": solver.name(),
            "exact": config.resolve(points.len()).is_exact(),
            "points": points.len(),
            "route": outcome.route,
            "length": outcome.route.as_ref().map(|r| r.length()),
            "stats": outcome.stats,
            "elapsed_ms": elapsed_ms,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &outcome.route {
        Some(route) => {
            println!("Route ({}):", solver.name());
            print!("{}", format_route(route));
            println!("Length = {}", route.length());
        }
        None => println!("no feasible route ({})", solver.name()),
    }
    println!("Time: {elapsed_ms} ms");
    Ok(())
}
