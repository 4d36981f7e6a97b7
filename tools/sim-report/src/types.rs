//! Core types: classified log events, aggregate state, report model.

use chrono::NaiveDateTime;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Classified events (one per matched marker)
// ---------------------------------------------------------------------------

/// A log line reduced to the fields its sentence template carries.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
  ResourceMined { worker: String, duration_ms: f64 },
  BlockMined { worker: String, duration_ms: f64 },
  WorkerLoading {
    worker: String,
    lorry: Option<String>,
    at: NaiveDateTime,
  },
  LorryReady { lorry: String, time_to_fill: String },
  LorryAtFerry { lorry: String, duration_ms: f64 },
  LorryAtDestination {
    lorry: String,
    duration_ms: f64,
    at: NaiveDateTime,
  },
  FerryDeparted { wait_ms: f64 },
}

impl LogEvent {
  pub fn kind(&self) -> &'static str {
    match self {
      Self::ResourceMined { .. } => "resource_mined",
      Self::BlockMined { .. } => "block_mined",
      Self::WorkerLoading { .. } => "worker_loading",
      Self::LorryReady { .. } => "lorry_ready",
      Self::LorryAtFerry { .. } => "lorry_at_ferry",
      Self::LorryAtDestination { .. } => "lorry_at_destination",
      Self::FerryDeparted { .. } => "ferry_departed",
    }
  }
}

// ---------------------------------------------------------------------------
// Aggregate state (built by one pass of the scanner)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct WorkerRecord {
  pub id: String,
  pub resource_count: u64,
  /// Elapsed ms from simulation start to this worker's last loading event.
  pub work_time_ms: f64,
  /// Sum of this worker's per-resource mining durations.
  pub mining_time_ms: f64,
}

impl WorkerRecord {
  pub fn new(id: &str) -> Self {
    Self {
      id: id.to_string(),
      resource_count: 0,
      work_time_ms: 0.0,
      mining_time_ms: 0.0,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LorryRecord {
  pub id: String,
  /// Fill duration token, copied verbatim from the log.
  pub time_to_fill: String,
  pub transport_time_ms: f64,
}

impl LorryRecord {
  pub fn new(id: &str, time_to_fill: &str) -> Self {
    Self {
      id: id.to_string(),
      time_to_fill: time_to_fill.to_string(),
      transport_time_ms: 0.0,
    }
  }
}

/// Count + summed duration of one kind of timed event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
  pub count: u64,
  pub total_ms: f64,
}

impl Tally {
  pub fn record(&mut self, duration_ms: f64) {
    self.count += 1;
    self.total_ms += duration_ms;
  }

  /// `total / count`, or `None` when nothing was recorded.
  pub fn average(&self) -> Option<f64> {
    if self.count == 0 {
      None
    } else {
      Some(self.total_ms / self.count as f64)
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobalCounters {
  pub blocks: Tally,
  pub resources: Tally,
  pub ferry: Tally,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationWindow {
  pub start: NaiveDateTime,
  /// Timestamp of the last "arrived at destination" line.
  pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct AggregateState {
  pub workers: HashMap<String, WorkerRecord>,
  pub lorries: HashMap<String, LorryRecord>,
  pub counters: GlobalCounters,
  pub window: SimulationWindow,
  pub lines_read: usize,
  pub lines_ignored: usize,
}

// ---------------------------------------------------------------------------
// Report model (what the XML serializer writes)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AverageSummary {
  pub count: u64,
  /// Already rounded.
  pub average_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkerEntry {
  pub id: String,
  pub resources: u64,
  pub work_duration_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleEntry {
  pub id: String,
  pub load_time: String,
  /// Accumulated transport time plus the average ferry wait.
  pub transport_duration_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
  pub duration_ms: f64,
  pub blocks: AverageSummary,
  pub resources: AverageSummary,
  pub ferry: AverageSummary,
  pub workers: Vec<WorkerEntry>,
  pub vehicles: Vec<VehicleEntry>,
}
