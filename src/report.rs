//! Comma-separated census report.
//!
//! ```text
//! seed,length
//! 0x000000,1234
//! 0x000001,5678
//! ```
//!
//! Seeds are uppercase hexadecimal, zero-padded to six digits; lengths are
//! decimal step counts.

use std::io::Write;

use crate::engine::Discovery;
use crate::error::Result;

/// Header line of a CSV report.
pub const CSV_HEADER: &str = "seed,length";

/// Writes discoveries as CSV rows.
///
/// The header is written on construction. Rows are written for whatever the
/// caller passes in; filtering out known seeds is the caller's job (see
/// [`Scan::novel`](crate::Scan::novel)).
pub struct CsvReport<W: Write> {
    out: W,
    rows: u64,
}

impl<W: Write> CsvReport<W> {
    /// Start a report, writing the header line.
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{}", CSV_HEADER)?;
        Ok(Self { out, rows: 0 })
    }

    /// Append one row.
    pub fn write(&mut self, discovery: &Discovery) -> Result<()> {
        writeln!(self.out, "{}", format_row(discovery.seed, discovery.length))?;
        self.rows += 1;
        Ok(())
    }

    /// Number of rows written, header excluded.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Format one report row without the trailing newline.
pub fn format_row(seed: u32, length: u64) -> String {
    format!("0x{:06X},{}", seed, length)
}
