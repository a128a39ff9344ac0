//! Times every sort in the crate on seeded random input and checks the results.
//!
//! Run with `cargo run --release --features harness --bin classort-bench`.

use anyhow::{Result, bail};
use clap::Parser;
use classort::harness::{Algorithm, Harness, HarnessConfig};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Benchmarks classic sorting algorithms", long_about = None)]
struct Args {
    /// Keys per buffer.
    #[arg(long, default_value_t = 3000)]
    len: usize,

    /// Timed rounds per algorithm.
    #[arg(long, default_value_t = 100)]
    rounds: usize,

    /// Keys are drawn from 0..BOUND.
    #[arg(long, default_value_t = 1000)]
    bound: i32,

    /// Generator seed; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the quadratic sorts.
    #[arg(long)]
    skip_quadratic: bool,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Seed {seed}, {} keys x {} rounds", args.len, args.rounds);

    let config = HarnessConfig::default()
        .with_len(args.len)
        .with_rounds(args.rounds)
        .with_bound(args.bound)
        .with_seed(seed);
    let mut harness = Harness::new(config);

    let mut failed = Vec::new();
    for algorithm in Algorithm::ALL {
        let quadratic = matches!(
            algorithm,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        );
        if args.skip_quadratic && quadratic {
            continue;
        }
        let report = harness.measure(algorithm)?;
        if !report.sorted {
            failed.push(algorithm.name());
        }
    }

    let searches = harness.check_searches();
    if !searches.iterative {
        failed.push("BinarySearchIterative");
    }
    if !searches.recursive {
        failed.push("BinarySearchRecursive");
    }

    if !failed.is_empty() {
        bail!("Not working: {}", failed.join(", "));
    }
    Ok(())
}
