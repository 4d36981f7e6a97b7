//! Log timestamp parsing and elapsed-time math.

use chrono::NaiveDateTime;

use crate::config::Config;
use crate::error::ReportError;

/// Parse the leading "date time" pair of a tokenized line.
pub fn parse_line_timestamp(
  tokens: &[&str],
  line: usize,
  config: &Config,
) -> Result<NaiveDateTime, ReportError> {
  let (date, time) = match tokens {
    [date, time, ..] => (*date, *time),
    _ => return Err(ReportError::MissingToken { line, field: "timestamp" }),
  };
  let value = format!("{} {}", date, time);
  NaiveDateTime::parse_from_str(&value, &config.timestamp_format).map_err(|source| {
    ReportError::Timestamp {
      line,
      value,
      source,
    }
  })
}

/// Milliseconds from `from` to `to`; fractional, negative if `to` is earlier.
pub fn elapsed_ms(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
  let delta = to - from;
  match delta.num_microseconds() {
    Some(us) => us as f64 / 1000.0,
    None => delta.num_milliseconds() as f64,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(s: &str) -> NaiveDateTime {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    parse_line_timestamp(&tokens, 1, &Config::default()).unwrap()
  }

  #[test]
  fn parses_day_month_year_with_fraction() {
    let ts = parse("02.03.2024 10:15:30.250 Worker 1 mined a resource in 5 ms");
    assert_eq!(ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), "2024-03-02 10:15:30.250");
  }

  #[test]
  fn fraction_is_optional() {
    let ts = parse("02.03.2024 10:15:30 Simulation started");
    assert_eq!(ts.format("%H:%M:%S").to_string(), "10:15:30");
  }

  #[test]
  fn elapsed_keeps_sub_millisecond_precision() {
    let a = parse("01.01.2024 00:00:00.0000 x");
    let b = parse("01.01.2024 00:00:01.2505 x");
    assert!((elapsed_ms(a, b) - 1250.5).abs() < 1e-9);
  }

  #[test]
  fn elapsed_crosses_midnight() {
    let a = parse("31.12.2023 23:59:59.000 x");
    let b = parse("01.01.2024 00:00:01.000 x");
    assert!((elapsed_ms(a, b) - 2000.0).abs() < 1e-9);
  }

  #[test]
  fn malformed_timestamp_reports_line() {
    let tokens = ["2024-01-01", "00:00:00", "x"];
    let err = parse_line_timestamp(&tokens, 7, &Config::default()).unwrap_err();
    assert!(matches!(err, ReportError::Timestamp { line: 7, .. }));
  }

  #[test]
  fn single_token_line_is_missing_timestamp() {
    let err = parse_line_timestamp(&["header"], 1, &Config::default()).unwrap_err();
    assert!(matches!(err, ReportError::MissingToken { field: "timestamp", .. }));
  }
}
