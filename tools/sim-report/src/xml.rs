//! XML rendering of the report model (compact, no declaration).

use std::fmt::Write;

use crate::config::Config;
use crate::types::SimulationReport;

/// Minimal element tree; enough for the fixed report shape.
#[derive(Debug, Clone, Default)]
struct Element {
  name: &'static str,
  attrs: Vec<(&'static str, String)>,
  text: Option<String>,
  children: Vec<Element>,
}

impl Element {
  fn new(name: &'static str) -> Self {
    Self {
      name,
      ..Default::default()
    }
  }

  fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
    self.attrs.push((key, value.into()));
    self
  }

  fn text(mut self, value: impl Into<String>) -> Self {
    self.text = Some(value.into());
    self
  }

  fn child(mut self, child: Element) -> Self {
    self.children.push(child);
    self
  }

  fn write_to(&self, out: &mut String) {
    let _ = write!(out, "<{}", self.name);
    for (key, value) in &self.attrs {
      let _ = write!(out, " {}=\"{}\"", key, escape(value));
    }
    if self.text.is_none() && self.children.is_empty() {
      out.push_str(" />");
      return;
    }
    out.push('>');
    if let Some(text) = &self.text {
      out.push_str(&escape(text));
    }
    for child in &self.children {
      child.write_to(out);
    }
    let _ = write!(out, "</{}>", self.name);
  }
}

fn escape(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&apos;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

/// Render the full document.
pub fn render(report: &SimulationReport, config: &Config) -> String {
  let workers = report.workers.iter().fold(Element::new("Workers"), |parent, w| {
    parent.child(
      Element::new("Worker")
        .attr("id", w.id.as_str())
        .child(Element::new("resources").text(w.resources.to_string()))
        .child(Element::new("workDuration").text(config.duration(w.work_duration_ms))),
    )
  });

  let vehicles = report.vehicles.iter().fold(Element::new("Vehicles"), |parent, v| {
    parent.child(
      Element::new("Vehicle")
        .attr("id", v.id.as_str())
        .child(Element::new("loadTime").text(format!("{} {}", v.load_time, config.duration_unit)))
        .child(Element::new("transportDuration").text(config.duration(v.transport_duration_ms))),
    )
  });

  let root = Element::new("Simulation")
    .attr("duration", config.duration(report.duration_ms))
    .child(
      Element::new("blockAverageDuration")
        .attr("blocks", report.blocks.count.to_string())
        .text(config.duration(report.blocks.average_ms)),
    )
    .child(
      Element::new("resourceAverageDuration")
        .attr("resources", report.resources.count.to_string())
        .text(config.duration(report.resources.average_ms)),
    )
    .child(
      Element::new("ferryAverageWait")
        .attr("trips", report.ferry.count.to_string())
        .text(config.duration(report.ferry.average_ms)),
    )
    .child(workers)
    .child(vehicles);

  let mut out = String::new();
  root.write_to(&mut out);
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;

  fn report(workers: Vec<WorkerEntry>, vehicles: Vec<VehicleEntry>) -> SimulationReport {
    SimulationReport {
      duration_ms: 12000.0,
      blocks: AverageSummary {
        count: 1,
        average_ms: 3750.0,
      },
      resources: AverageSummary {
        count: 2,
        average_ms: 1250.5,
      },
      ferry: AverageSummary {
        count: 1,
        average_ms: 100.0,
      },
      workers,
      vehicles,
    }
  }

  #[test]
  fn renders_exact_document() {
    let xml = render(
      &report(
        vec![WorkerEntry {
          id: "1".into(),
          resources: 2,
          work_duration_ms: 6000.0,
        }],
        vec![VehicleEntry {
          id: "1".into(),
          load_time: "6000".into(),
          transport_duration_ms: 130.0,
        }],
      ),
      &Config::default(),
    );
    assert_eq!(
      xml,
      concat!(
        r#"<Simulation duration="12000 ms">"#,
        r#"<blockAverageDuration blocks="1">3750 ms</blockAverageDuration>"#,
        r#"<resourceAverageDuration resources="2">1250.5 ms</resourceAverageDuration>"#,
        r#"<ferryAverageWait trips="1">100 ms</ferryAverageWait>"#,
        r#"<Workers><Worker id="1"><resources>2</resources><workDuration>6000 ms</workDuration></Worker></Workers>"#,
        r#"<Vehicles><Vehicle id="1"><loadTime>6000 ms</loadTime><transportDuration>130 ms</transportDuration></Vehicle></Vehicles>"#,
        r#"</Simulation>"#,
      )
    );
  }

  #[test]
  fn empty_sections_self_close() {
    let xml = render(&report(vec![], vec![]), &Config::default());
    assert!(xml.contains("<Workers /><Vehicles />"));
    assert!(!xml.starts_with("<?xml"));
  }

  #[test]
  fn ids_are_escaped() {
    let xml = render(
      &report(
        vec![WorkerEntry {
          id: "a&\"b".into(),
          resources: 1,
          work_duration_ms: 0.0,
        }],
        vec![],
      ),
      &Config::default(),
    );
    assert!(xml.contains(r#"<Worker id="a&amp;&quot;b">"#));
  }
}
