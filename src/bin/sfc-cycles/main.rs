//! sfc-cycles CLI: census of the sfc8 seed space.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod scan;
mod walk;

#[derive(Debug, Parser)]
#[command(name = "sfc-cycles")]
#[command(about = "Characterize the cycle structure of the sfc8 seed space", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Walk a seed range and report every seed that reaches a new cycle
    Scan(scan::ScanArgs),
    /// Measure a single seed without the cycle cache
    Walk(walk::WalkArgs),
}

/// Parse a seed like "0x010203", "0X10203", "66051" or "0x01_02_03"
fn parse_seed(s: &str) -> Result<u32, String> {
    let s = s.trim().replace('_', "");

    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };

    parsed.map_err(|_| {
        format!(
            "Invalid seed: '{}'. Use decimal or 0x-prefixed hexadecimal",
            s
        )
    })
}

/// `RUST_LOG` directives if present and valid, otherwise `info`
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan(args) => scan::run(args),
        Command::Walk(args) => walk::run(args),
    }
}
