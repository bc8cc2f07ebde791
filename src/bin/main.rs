//! kernsum Command Line Interface
//!
//! A command-line harness for running and comparing the dense Gaussian
//! kernel summation engines on randomly generated inputs.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use kernsum::core::{Result, SummationStrategy, DIM};
use kernsum::data;
use kernsum::report::RunReport;
use kernsum::utils::stats;
use kernsum::KernelSum;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "kernsum")]
#[command(about = "Dense symmetric Gaussian kernel summation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one summation over random inputs and report time and checksum
    Run(RunArgs),
    /// Run both engines on identical inputs and report their deviation
    Compare(CompareArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Number of feature vectors
    #[arg(short, long, default_value = "5000")]
    n: usize,

    /// RNG seed for input generation
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Pair enumeration strategy
    #[arg(long, default_value = "blocked")]
    strategy: CliStrategy,

    /// Block size for the blocked strategy
    #[arg(short, long, default_value = "10")]
    block_size: usize,

    /// Write a JSON run report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CompareArgs {
    /// Number of feature vectors
    #[arg(short, long, default_value = "1000")]
    n: usize,

    /// RNG seed for input generation
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Block size for the blocked engine
    #[arg(short, long, default_value = "10")]
    block_size: usize,

    /// Relative deviation above which the engines are flagged as diverging
    #[arg(short, long, default_value = "1e-9")]
    tolerance: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliStrategy {
    /// Row-at-a-time symmetric double loop
    #[value(name = "direct")]
    Direct,
    /// Cache-blocked enumeration
    #[value(name = "blocked")]
    Blocked,
}

impl From<CliStrategy> for SummationStrategy {
    fn from(cli_strategy: CliStrategy) -> Self {
        match cli_strategy {
            CliStrategy::Direct => SummationStrategy::Direct,
            CliStrategy::Blocked => SummationStrategy::Blocked,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Run(args) => run_command(args),
        Commands::Compare(args) => compare_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(args: RunArgs) -> Result<()> {
    let strategy: SummationStrategy = args.strategy.into();
    info!(
        "Running {strategy:?} summation: n={}, dim={DIM}, seed={}",
        args.n, args.seed
    );

    let mut rng = data::seeded_rng(args.seed);
    let features = data::random_feature_set(args.n, &mut rng);
    let coefficients = data::random_coefficients(args.n, &mut rng);

    let summation = KernelSum::new()
        .with_strategy(strategy)
        .with_block_size(args.block_size);

    let start = Instant::now();
    let accumulator = summation.compute(&features, &coefficients)?;
    let elapsed = start.elapsed().as_secs_f64();

    let checksum = stats::checksum(&accumulator);
    let summary = stats::summarize(&accumulator);
    info!(
        "Accumulator range: [{:.6}, {:.6}], mean {:.6}",
        summary.min, summary.max, summary.mean
    );

    println!("Time: {elapsed:.6} s");
    println!("Checksum: {checksum:.10e}");

    if let Some(path) = args.output {
        let block_size = match strategy {
            SummationStrategy::Direct => None,
            SummationStrategy::Blocked => Some(args.block_size),
        };
        let report = RunReport::new(
            strategy, args.n, DIM, block_size, args.seed, elapsed, checksum,
        );
        report.save_to_file(&path)?;
        info!("Report written to {path:?}");
    }

    Ok(())
}

fn compare_command(args: CompareArgs) -> Result<()> {
    info!(
        "Comparing engines: n={}, dim={DIM}, seed={}, block_size={}",
        args.n, args.seed, args.block_size
    );

    let mut rng = data::seeded_rng(args.seed);
    let features = data::random_feature_set(args.n, &mut rng);
    let coefficients = data::random_coefficients(args.n, &mut rng);

    let direct = KernelSum::new()
        .with_strategy(SummationStrategy::Direct)
        .compute(&features, &coefficients)?;
    let blocked = KernelSum::new()
        .with_strategy(SummationStrategy::Blocked)
        .with_block_size(args.block_size)
        .compute(&features, &coefficients)?;

    let deviation = stats::max_relative_deviation(&direct, &blocked);

    println!("Direct checksum:  {:.10e}", stats::checksum(&direct));
    println!("Blocked checksum: {:.10e}", stats::checksum(&blocked));
    println!("Max relative deviation: {deviation:.3e}");

    if deviation > args.tolerance {
        warn!(
            "Deviation {deviation:.3e} exceeds tolerance {:.3e}",
            args.tolerance
        );
    }

    Ok(())
}
