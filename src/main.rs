// Fibonacci + trial-division prime check over a fixed list of inputs.
// Results go to stdout, logs to stderr (RUST_LOG).

use std::io;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use fib_prime::{fibonacci, Error, Report, DEFAULT_INPUTS};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "fib_prime")]
#[command(about = "Compute Fibonacci numbers and check them for primality", long_about = None)]
struct Cli {
    /// Fibonacci indices to compute (default: 5 10 15 20)
    #[arg(allow_negative_numbers = true)]
    inputs: Vec<i64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let inputs = if cli.inputs.is_empty() {
        DEFAULT_INPUTS.to_vec()
    } else {
        cli.inputs
            .iter()
            .map(|&n| fibonacci::index(n))
            .collect::<Result<Vec<_>, _>>()?
    };

    let start = Instant::now();
    let report = Report::compute(&inputs);
    info!(
        inputs = inputs.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "report computed"
    );

    let stdout = io::stdout().lock();
    match cli.format {
        Format::Text => report.write_text(stdout)?,
        Format::Json => report.write_json(stdout)?,
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
