//! sim-report CLI
//!
//! Usage:
//!   sim-report --input simulation.log --output report.xml
//!
//! Log verbosity follows RUST_LOG (default: info).

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sim_report::Config;

#[derive(Parser)]
#[command(name = "sim-report")]
#[command(version = "0.1.0")]
#[command(about = "Summarize a mining simulation log into an XML report", long_about = None)]
struct Cli {
  /// Simulation log to read
  #[arg(short, long)]
  input: PathBuf,

  /// XML report to write
  #[arg(short, long)]
  output: PathBuf,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .with_writer(std::io::stderr)
    .compact()
    .init();

  let config = Config::default();
  info!("Reading log: {}", cli.input.display());

  sim_report::run(&cli.input, &cli.output, &config).with_context(|| {
    format!(
      "failed to build report from {} into {}",
      cli.input.display(),
      cli.output.display()
    )
  })?;

  info!("Report written: {}", cli.output.display());
  Ok(())
}
