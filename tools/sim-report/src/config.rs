//! Report configuration with sane defaults.

/// Formatting knobs shared by the scanner and the report builder.
#[derive(Debug, Clone)]
pub struct Config {
  /// chrono format of the first two tokens of every line ("date time").
  pub timestamp_format: String,
  /// Decimal digits kept by the three top-level averages.
  pub average_precision: u32,
  /// Unit suffix appended to every rendered duration.
  pub duration_unit: String,
  /// Fixed cost of putting one load into a lorry, added to the worker's
  /// mining time on every loading event.
  pub put_into_lorry_ms: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      timestamp_format: "%d.%m.%Y %H:%M:%S%.f".to_string(),
      average_precision: 3,
      duration_unit: "ms".to_string(),
      put_into_lorry_ms: 1000.0,
    }
  }
}

impl Config {
  /// Round `value` to `average_precision` decimal digits.
  pub fn round_average(&self, value: f64) -> f64 {
    let factor = 10f64.powi(self.average_precision as i32);
    (value * factor).round() / factor
  }

  /// Render a duration as "<value> <unit>".
  pub fn duration(&self, ms: f64) -> String {
    format!("{} {}", ms, self.duration_unit)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounds_to_three_digits_by_default() {
    let config = Config::default();
    assert_eq!(config.round_average(2.0 / 3.0), 0.667);
    assert_eq!(config.round_average(100.0), 100.0);
  }

  #[test]
  fn precision_is_tunable() {
    let config = Config {
      average_precision: 1,
      ..Config::default()
    };
    assert_eq!(config.round_average(1.26), 1.3);
  }

  #[test]
  fn durations_drop_trailing_zero_fraction() {
    let config = Config::default();
    assert_eq!(config.duration(130.0), "130 ms");
    assert_eq!(config.duration(0.5), "0.5 ms");
  }
}
