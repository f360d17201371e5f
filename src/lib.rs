//! # sfc-cycles
//!
//! Cycle-structure census for small pseudorandom generators.
//!
//! For every seed in a range, find how many steps the generator takes from
//! that seed's initial state until it revisits a state, and report only the
//! seeds that land on a cycle not seen before.
//!
//! ## Module Organization
//!
//! - [`state`] - Generator state models ([`Sfc8`] and the [`StateModel`] trait)
//! - [`bits`] - Dense bit-per-state membership set
//! - [`cache`] - Bounded top-K-by-length cache of discovered cycles
//! - [`engine`] - Per-seed walker tying the set and the cache together
//! - [`scan`] - Seed-range driver
//! - [`report`] - `seed,length` CSV output
//! - [`shape`] - Constant-memory tail/period measurement (Brent)
//!
//! ## Quick Start
//!
//! ```
//! use sfc_cycles::{Engine, EngineConfig, StateModel};
//!
//! // A 4-bit toy generator: x -> 3x + 1 (mod 16)
//! struct Affine;
//!
//! impl StateModel for Affine {
//!     type State = u8;
//!     fn state_bits(&self) -> u32 { 4 }
//!     fn seed_state(&self, seed: u32) -> u8 { seed as u8 & 0xF }
//!     fn advance(&self, s: &mut u8) { *s = (*s * 3 + 1) & 0xF }
//!     fn encode(&self, s: &u8) -> u32 { u32::from(*s) }
//! }
//!
//! let mut engine = Engine::new(Affine, EngineConfig::default()).unwrap();
//! let first = engine.discover(0).unwrap();
//! assert!(!first.known);
//!
//! // Seed 1 is on the same cycle as seed 0
//! let second = engine.discover(1).unwrap();
//! assert!(second.known);
//! assert_eq!(second.length, first.length);
//! ```
//!
//! ## Memory
//!
//! A membership set has one bit per encoded state: 512 MiB for the 32-bit
//! sfc8 state. The engine holds one scratch set plus up to
//! [`EngineConfig::cache_slots`] retained sets, so the default configuration
//! peaks at 4 GiB for sfc8.
//!
//! ## Features
//!
//! - `serde` - Serialization for configuration and results
//! - `cli` - The `sfc-cycles` binary
//! - `huge-tests` - Full-width sfc8 tests (several GiB of RAM)

// =============================================================================
// Core modules
// =============================================================================

/// Generator state models.
pub mod state;

/// Bit-level storage for visited states.
pub mod bits;

/// Retained cycles.
pub mod cache;

/// Per-seed discovery.
pub mod engine;

/// Engine configuration.
pub mod config;

/// Error types.
pub mod error;

// =============================================================================
// Driver and diagnostics
// =============================================================================

/// Seed-range driver.
pub mod scan;

/// CSV report output.
pub mod report;

/// Brent tail/period measurement.
pub mod shape;

// =============================================================================
// Public re-exports
// =============================================================================

pub use bits::MembershipSet;
pub use cache::{Admission, CachedCycle, CycleCache, DEFAULT_CACHE_SLOTS};
pub use config::EngineConfig;
pub use engine::{Discovery, Engine, EngineStats};
pub use error::{Error, Result};
pub use report::CsvReport;
pub use scan::{Scan, ScanSummary};
pub use shape::{cycle_shape, CycleShape};
pub use state::{Sfc8, Sfc8State, StateModel, SFC8_INITIAL_COUNTER, SFC8_SEED_SPACE};
