//! Log scanner: one forward pass over the log, folding events into aggregate state.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::classify;
use crate::config::Config;
use crate::error::ReportError;
use crate::timestamp::{elapsed_ms, parse_line_timestamp};
use crate::types::*;

/// Holds the running accumulators while lines are fed in order.
pub struct Scanner {
  config: Config,
  start: Option<NaiveDateTime>,
  end: Option<NaiveDateTime>,
  workers: HashMap<String, WorkerRecord>,
  lorries: HashMap<String, LorryRecord>,
  counters: GlobalCounters,
  lines_read: usize,
  lines_ignored: usize,
}

impl Scanner {
  pub fn new(config: Config) -> Self {
    Self {
      config,
      start: None,
      end: None,
      workers: HashMap::new(),
      lorries: HashMap::new(),
      counters: GlobalCounters::default(),
      lines_read: 0,
      lines_ignored: 0,
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Feed the next line of the log.
  ///
  /// The first line only has to carry a timestamp: it opens the simulation
  /// window whatever its event kind.
  pub fn process_line(&mut self, text: &str) -> Result<(), ReportError> {
    self.lines_read += 1;
    let line = self.lines_read;

    if self.start.is_none() {
      let tokens: Vec<&str> = text.split_whitespace().collect();
      self.start = Some(parse_line_timestamp(&tokens, line, &self.config)?);
    }

    let events = classify::classify(text, line, &self.config)?;
    if events.is_empty() {
      self.lines_ignored += 1;
      return Ok(());
    }

    for event in events {
      debug!(line, kind = event.kind(), "event");
      self.apply(event, line)?;
    }
    Ok(())
  }

  fn apply(&mut self, event: LogEvent, line: usize) -> Result<(), ReportError> {
    match event {
      LogEvent::ResourceMined { worker, duration_ms } => {
        self.counters.resources.record(duration_ms);
        let record = self
          .workers
          .entry(worker)
          .or_insert_with_key(|id| WorkerRecord::new(id));
        record.resource_count += 1;
        record.mining_time_ms += duration_ms;
      }
      LogEvent::BlockMined { worker, duration_ms } => {
        debug!(line, worker = %worker, duration_ms, "block mined");
        self.counters.blocks.record(duration_ms);
      }
      LogEvent::WorkerLoading { worker, lorry, at } => {
        debug!(line, worker = %worker, lorry = ?lorry, "worker loading");
        let start = self.start.ok_or(ReportError::EmptyLog)?;
        let record = self
          .workers
          .get_mut(&worker)
          .ok_or_else(|| ReportError::UnknownWorker {
            line,
            id: worker.clone(),
          })?;
        // Last loading wins.
        record.work_time_ms = elapsed_ms(start, at);
        record.mining_time_ms += self.config.put_into_lorry_ms;
      }
      LogEvent::LorryReady { lorry, time_to_fill } => {
        if self.lorries.contains_key(&lorry) {
          warn!(line, lorry = %lorry, "lorry already ready to depart; keeping first fill time");
        } else {
          let record = LorryRecord::new(&lorry, &time_to_fill);
          self.lorries.insert(lorry, record);
        }
      }
      LogEvent::LorryAtFerry { lorry, duration_ms } => {
        self.lorry_mut(&lorry, line)?.transport_time_ms += duration_ms;
      }
      LogEvent::LorryAtDestination { lorry, duration_ms, at } => {
        self.lorry_mut(&lorry, line)?.transport_time_ms += duration_ms;
        self.end = Some(at);
      }
      LogEvent::FerryDeparted { wait_ms } => {
        self.counters.ferry.record(wait_ms);
      }
    }
    Ok(())
  }

  fn lorry_mut(&mut self, id: &str, line: usize) -> Result<&mut LorryRecord, ReportError> {
    self.lorries.get_mut(id).ok_or_else(|| ReportError::UnknownLorry {
      line,
      id: id.to_string(),
    })
  }

  /// Close the pass. Fails if no line was ever fed.
  pub fn finish(self) -> Result<AggregateState, ReportError> {
    let start = self.start.ok_or(ReportError::EmptyLog)?;
    Ok(AggregateState {
      workers: self.workers,
      lorries: self.lorries,
      counters: self.counters,
      window: SimulationWindow {
        start,
        end: self.end,
      },
      lines_read: self.lines_read,
      lines_ignored: self.lines_ignored,
    })
  }
}

/// Scan a whole log from a reader.
pub fn scan<R: BufRead>(reader: R, config: &Config) -> Result<AggregateState, ReportError> {
  scan_from(reader, Path::new("<log>"), config)
}

/// Open `path` and scan it.
pub fn scan_file(path: &Path, config: &Config) -> Result<AggregateState, ReportError> {
  let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
  scan_from(BufReader::new(file), path, config)
}

fn scan_from<R: BufRead>(reader: R, source: &Path, config: &Config) -> Result<AggregateState, ReportError> {
  let mut scanner = Scanner::new(config.clone());
  for line in reader.lines() {
    let text = line.map_err(|e| ReportError::io(source, e))?;
    scanner.process_line(&text)?;
  }
  scanner.finish()
}
