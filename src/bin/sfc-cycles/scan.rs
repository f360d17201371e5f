//! CLI handler for the `scan` command.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use sfc_cycles::{
    CsvReport, Discovery, Engine, EngineConfig, ScanSummary, Sfc8, StateModel,
    DEFAULT_CACHE_SLOTS, SFC8_SEED_SPACE,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::parse_seed;

/// Walk a seed range and report seeds that reach a new cycle.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// First seed to examine (decimal or 0x-prefixed hex)
    #[arg(long, default_value = "0", value_parser = parse_seed)]
    pub start: u32,

    /// End of the seed range, exclusive (at most 0x1000000)
    #[arg(long, default_value = "0x1000000", value_parser = parse_seed)]
    pub end: u32,

    /// Number of discovered cycles to keep (each costs 512 MiB)
    #[arg(long, default_value_t = DEFAULT_CACHE_SLOTS)]
    pub cache_slots: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also report seeds whose state was already on a known cycle
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// `seed,length` rows with hex seeds (default)
    Csv,
    /// One JSON object per line
    Jsonl,
}

/// Destination for report rows.
enum Sink {
    Csv(CsvReport<Box<dyn Write>>),
    Jsonl(Box<dyn Write>),
}

impl Sink {
    fn new(format: FormatArg, out: Box<dyn Write>) -> Result<Self> {
        Ok(match format {
            FormatArg::Csv => Self::Csv(CsvReport::new(out)?),
            FormatArg::Jsonl => Self::Jsonl(out),
        })
    }

    fn write(&mut self, discovery: &Discovery) -> Result<()> {
        match self {
            Self::Csv(report) => report.write(discovery)?,
            Self::Jsonl(out) => {
                serde_json::to_writer(&mut *out, discovery)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        match self {
            Self::Csv(report) => {
                report.finish()?;
            }
            Self::Jsonl(mut out) => out.flush()?,
        }
        Ok(())
    }
}

/// Run the scan command.
pub fn run(args: ScanArgs) -> Result<()> {
    if args.end > SFC8_SEED_SPACE {
        bail!(
            "--end 0x{:X} is past the seed space; seeds only use their low 24 bits (max 0x{:X})",
            args.end,
            SFC8_SEED_SPACE
        );
    }
    if args.start > args.end {
        bail!(
            "--start 0x{:X} is after --end 0x{:X}",
            args.start,
            args.end
        );
    }

    let config = EngineConfig::default().with_cache_slots(args.cache_slots);
    info!(
        start = args.start,
        end = args.end,
        cache_slots = config.cache_slots,
        peak_bytes = config.peak_memory(Sfc8.state_bits()),
        "starting scan"
    );

    let mut engine =
        Engine::new(Sfc8, config).context("Couldn't allocate memory for state array")?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut sink = Sink::new(args.format, out)?;

    let mut summary = ScanSummary::default();
    for result in engine.scan(args.start..args.end) {
        let discovery = result.context("Couldn't allocate more memory for state array")?;
        summary.record(&discovery);
        if args.all || !discovery.known {
            sink.write(&discovery)?;
        }
    }
    sink.finish()?;

    let stats = engine.stats();
    info!(
        seeds = summary.seeds,
        novel = summary.novel,
        known = summary.known,
        longest = summary.longest,
        walks = stats.walks,
        steps = stats.steps,
        retained = stats.retained,
        evicted = stats.evicted,
        "scan complete"
    );

    if let Some(path) = &args.output {
        eprintln!(
            "✓ Wrote {} new cycles for {} seeds to {}",
            summary.novel,
            summary.seeds,
            path.display()
        );
    }

    Ok(())
}
