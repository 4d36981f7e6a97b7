//! Classify raw log lines into typed events.
//!
//! Each event kind is a fixed English sentence. The marker picks the kind;
//! fields are read from fixed token positions of that sentence:
//!
//! ```text
//! <date> <time> Worker <id> mined a resource in <ms> ms
//! <date> <time> Worker <id> mined an entire block in <ms> ms
//! <date> <time> Worker <id> is loading lorry <lorry>
//! <date> <time> Lorry <id> is full and ready to depart, filled in <ms> ms
//! <date> <time> Lorry <id> arrived at ferry after <ms> ms
//! <date> <time> Lorry <id> arrived at destination after <ms> ms
//! <date> <time> Ferry departed after waiting <ms> ms
//! ```
//!
//! Markers are plain substrings: `loading` also hits "unloading" and
//! `Ferry` + `departed` hits any line with both words. Such a line must still
//! fit the template at the fixed positions, or the run fails.

use crate::config::Config;
use crate::error::ReportError;
use crate::timestamp::parse_line_timestamp;
use crate::types::LogEvent;

pub const RESOURCE_MINED: &str = "mined a resource";
pub const BLOCK_MINED: &str = "mined an entire block";
pub const WORKER_LOADING: &str = "loading";
pub const LORRY_READY: &str = "ready to depart";
pub const LORRY_AT_FERRY: &str = "arrived at ferry";
pub const LORRY_AT_DESTINATION: &str = "arrived at destination";
pub const FERRY: &str = "Ferry";
pub const FERRY_DEPARTED: &str = "departed";

const ID: usize = 3;
const RESOURCE_DURATION: usize = 8;
const BLOCK_DURATION: usize = 9;
const LOADED_LORRY: usize = 6;
const FILL_DURATION: usize = 12;
const LEG_DURATION: usize = 8;
const FERRY_WAIT: usize = 6;

/// Classify one line. `line` is the 1-based line number used in errors.
///
/// Markers are checked independently, so a line can yield more than one
/// event; they come back in marker-table order. Noise lines yield none.
pub fn classify(text: &str, line: usize, config: &Config) -> Result<Vec<LogEvent>, ReportError> {
  let tokens: Vec<&str> = text.split_whitespace().collect();
  let mut events = Vec::new();

  if text.contains(RESOURCE_MINED) {
    events.push(LogEvent::ResourceMined {
      worker: token(&tokens, ID, line, "worker id")?.to_string(),
      duration_ms: number(&tokens, RESOURCE_DURATION, line, "mining duration")?,
    });
  }
  if text.contains(BLOCK_MINED) {
    events.push(LogEvent::BlockMined {
      worker: token(&tokens, ID, line, "worker id")?.to_string(),
      duration_ms: number(&tokens, BLOCK_DURATION, line, "block duration")?,
    });
  }
  if text.contains(WORKER_LOADING) {
    events.push(LogEvent::WorkerLoading {
      worker: token(&tokens, ID, line, "worker id")?.to_string(),
      lorry: tokens.get(LOADED_LORRY).map(|t| t.to_string()),
      at: parse_line_timestamp(&tokens, line, config)?,
    });
  }
  if text.contains(LORRY_READY) {
    events.push(LogEvent::LorryReady {
      lorry: token(&tokens, ID, line, "lorry id")?.to_string(),
      time_to_fill: token(&tokens, FILL_DURATION, line, "fill duration")?.to_string(),
    });
  }
  if text.contains(LORRY_AT_FERRY) {
    events.push(LogEvent::LorryAtFerry {
      lorry: token(&tokens, ID, line, "lorry id")?.to_string(),
      duration_ms: number(&tokens, LEG_DURATION, line, "ferry leg duration")?,
    });
  }
  if text.contains(LORRY_AT_DESTINATION) {
    events.push(LogEvent::LorryAtDestination {
      lorry: token(&tokens, ID, line, "lorry id")?.to_string(),
      duration_ms: number(&tokens, LEG_DURATION, line, "destination leg duration")?,
      at: parse_line_timestamp(&tokens, line, config)?,
    });
  }
  if text.contains(FERRY) && text.contains(FERRY_DEPARTED) {
    events.push(LogEvent::FerryDeparted {
      wait_ms: number(&tokens, FERRY_WAIT, line, "ferry wait")?,
    });
  }

  Ok(events)
}

fn token<'a>(
  tokens: &[&'a str],
  index: usize,
  line: usize,
  field: &'static str,
) -> Result<&'a str, ReportError> {
  tokens
    .get(index)
    .copied()
    .ok_or(ReportError::MissingToken { line, field })
}

fn number(tokens: &[&str], index: usize, line: usize, field: &'static str) -> Result<f64, ReportError> {
  let raw = token(tokens, index, line, field)?;
  raw.parse::<f64>().map_err(|_| ReportError::InvalidNumber {
    line,
    field,
    value: raw.to_string(),
  })
}
