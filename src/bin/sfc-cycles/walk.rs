//! CLI handler for the `walk` command.

use anyhow::{Context, Result};
use clap::Parser;
use sfc_cycles::report::{format_row, CSV_HEADER};
use sfc_cycles::{cycle_shape, Engine, EngineConfig, Sfc8, StateModel};
use tracing::{info, warn};

use crate::parse_seed;

/// Measure a single seed without the cycle cache.
#[derive(Debug, Parser)]
pub struct WalkArgs {
    /// Seed to walk (decimal or 0x-prefixed hex)
    #[arg(value_parser = parse_seed)]
    pub seed: u32,

    /// Also split the length into tail and period (Brent, no extra memory)
    #[arg(long)]
    pub shape: bool,
}

/// Run the walk command.
pub fn run(args: WalkArgs) -> Result<()> {
    let mut engine = Engine::new(Sfc8, EngineConfig::default().with_cache_slots(1))
        .context("Couldn't allocate memory for state array")?;

    let state = Sfc8.seed_state(args.seed);
    info!(seed = args.seed, ?state, "walking");
    let length = engine.walk(state)?;

    if !args.shape {
        println!("{}", CSV_HEADER);
        println!("{}", format_row(args.seed, length));
        return Ok(());
    }

    let shape = cycle_shape(&Sfc8, state, Sfc8.state_space())
        .context("Trajectory did not repeat within the state space")?;
    if shape.first_repeat() != length {
        warn!(
            length,
            tail = shape.tail,
            period = shape.period,
            "walk and shape disagree"
        );
    }

    println!("{},tail,period", CSV_HEADER);
    println!(
        "{},{},{}",
        format_row(args.seed, length),
        shape.tail,
        shape.period
    );
    Ok(())
}
