//! Structured error types for scanning and reporting.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
  #[error("io: {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("log is empty: no start timestamp")]
  EmptyLog,

  #[error("line {line}: invalid timestamp {value:?}: {source}")]
  Timestamp {
    line: usize,
    value: String,
    #[source]
    source: chrono::ParseError,
  },

  #[error("line {line}: missing {field}")]
  MissingToken { line: usize, field: &'static str },

  #[error("line {line}: {field}: not a number: {value:?}")]
  InvalidNumber {
    line: usize,
    field: &'static str,
    value: String,
  },

  #[error("line {line}: worker {id} referenced before it mined anything")]
  UnknownWorker { line: usize, id: String },

  #[error("line {line}: lorry {id} referenced before it was ready to depart")]
  UnknownLorry { line: usize, id: String },

  #[error("insufficient data: no {quantity} recorded")]
  InsufficientData { quantity: &'static str },
}

impl ReportError {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }

  pub fn insufficient(quantity: &'static str) -> Self {
    Self::InsufficientData { quantity }
  }
}
