//! Report builder: sort entities, derive averages, shape the output model.

use std::cmp::Ordering;

use tracing::info;

use crate::config::Config;
use crate::error::ReportError;
use crate::timestamp::elapsed_ms;
use crate::types::*;

/// Turn the finished aggregate state into the report model.
///
/// Fails with `InsufficientData` when any average would divide by zero or
/// no lorry ever reached its destination (no simulation end).
pub fn build_report(state: &AggregateState, config: &Config) -> Result<SimulationReport, ReportError> {
  let end = state
    .window
    .end
    .ok_or_else(|| ReportError::insufficient("destination arrivals"))?;
  let duration_ms = elapsed_ms(state.window.start, end);

  let blocks = summarize(&state.counters.blocks, "mined blocks", config)?;
  let resources = summarize(&state.counters.resources, "mined resources", config)?;
  let ferry_average = state
    .counters
    .ferry
    .average()
    .ok_or_else(|| ReportError::insufficient("ferry trips"))?;
  let ferry = AverageSummary {
    count: state.counters.ferry.count,
    average_ms: config.round_average(ferry_average),
  };

  let mut workers: Vec<&WorkerRecord> = state.workers.values().collect();
  workers.sort_by(|a, b| by_numeric_id(&a.id, &b.id));
  let workers = workers
    .into_iter()
    .map(|w| WorkerEntry {
      id: w.id.clone(),
      resources: w.resource_count,
      work_duration_ms: w.work_time_ms,
    })
    .collect();

  let mut lorries: Vec<&LorryRecord> = state.lorries.values().collect();
  lorries.sort_by(|a, b| by_numeric_id(&a.id, &b.id));
  let vehicles = lorries
    .into_iter()
    .map(|l| VehicleEntry {
      id: l.id.clone(),
      load_time: l.time_to_fill.clone(),
      transport_duration_ms: l.transport_time_ms + ferry_average,
    })
    .collect();

  Ok(SimulationReport {
    duration_ms,
    blocks,
    resources,
    ferry,
    workers,
    vehicles,
  })
}

fn summarize(tally: &Tally, quantity: &'static str, config: &Config) -> Result<AverageSummary, ReportError> {
  let average = tally.average().ok_or_else(|| ReportError::insufficient(quantity))?;
  Ok(AverageSummary {
    count: tally.count,
    average_ms: config.round_average(average),
  })
}

/// Integer order on ids, ties ("7" vs "07") broken as text; non-numeric ids go last.
pub fn by_numeric_id(a: &str, b: &str) -> Ordering {
  match (a.parse::<u64>(), b.parse::<u64>()) {
    (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
    (Ok(_), Err(_)) => Ordering::Less,
    (Err(_), Ok(_)) => Ordering::Greater,
    (Err(_), Err(_)) => a.cmp(b),
  }
}

/// Log a short run summary.
pub fn log_summary(state: &AggregateState, report: &SimulationReport) {
  info!(
    lines = state.lines_read,
    ignored = state.lines_ignored,
    workers = report.workers.len(),
    vehicles = report.vehicles.len(),
    "scan complete"
  );
  info!(
    duration_ms = report.duration_ms,
    blocks = report.blocks.count,
    block_avg_ms = report.blocks.average_ms,
    resources = report.resources.count,
    resource_avg_ms = report.resources.average_ms,
    ferry_trips = report.ferry.count,
    ferry_avg_ms = report.ferry.average_ms,
    "simulation totals"
  );
  for entry in &report.workers {
    if let Some(worker) = state.workers.get(&entry.id) {
      info!(
        worker = %worker.id,
        resources = worker.resource_count,
        mining_ms = worker.mining_time_ms,
        work_ms = worker.work_time_ms,
        "worker"
      );
    }
  }
}
