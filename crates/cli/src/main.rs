//! # rsqrt-bench
//!
//! Compares the bit hack, hardware and reference reciprocal square root
//! estimators: prints all three for one input, then times each over a large
//! seeded random sample.
//!
//! With no arguments every setting takes its built-in default.

mod driver;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

use driver::{BenchConfig, DEFAULT_COUNT, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SEED, DEMO_INPUT};

/// Accuracy and throughput benchmark for reciprocal square root estimators
#[derive(Parser, Debug)]
#[command(name = "rsqrt-bench")]
#[command(about = "Benchmark the Quake, SIMD and std::sqrt reciprocal square roots")]
#[command(version)]
struct Cli {
    /// Number of random samples to time
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Lower bound of the sample range (inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN)]
    min: f32,

    /// Upper bound of the sample range (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX)]
    max: f32,

    /// Random seed used for sample generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Input for the side-by-side precision demonstration
    #[arg(long, default_value_t = DEMO_INPUT)]
    input: f32,

    /// Skip the Newton-Raphson step after the hardware estimate
    #[arg(long)]
    no_refine: bool,

    /// Print max and mean relative error against std::sqrt after the timings
    #[arg(long)]
    accuracy: bool,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            count: self.count,
            min: self.min,
            max: self.max,
            seed: self.seed,
            input: self.input,
            refine: !self.no_refine,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let report = driver::run(&cli.config()).context("Benchmark failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &report, cli.accuracy).context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
