//! Mining simulation log report: single-pass scanner + report builder.
//!
//! Reads a timestamped simulation log (worker mining, lorry transport, ferry
//! crossings), aggregates per-worker, per-lorry and global statistics keyed by
//! id, and renders them as a compact XML document.
//!
//! Pure computation + two file handles; nothing is written unless the whole
//! log scanned and every average could be computed.

pub mod classify;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod timestamp;
pub mod types;
pub mod xml;

use std::path::Path;

pub use config::Config;
pub use error::ReportError;
pub use report::build_report;
pub use scanner::{scan, scan_file, Scanner};
pub use types::{AggregateState, LogEvent, SimulationReport};

/// Scan `input`, build the report and write it to `output` (no partial files).
pub fn run(input: &Path, output: &Path, config: &Config) -> Result<SimulationReport, ReportError> {
  let state = scan_file(input, config)?;
  let report = build_report(&state, config)?;
  let document = xml::render(&report, config);
  std::fs::write(output, document).map_err(|e| ReportError::io(output, e))?;
  report::log_summary(&state, &report);
  Ok(report)
}
