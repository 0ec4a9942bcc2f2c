//! Error types for bikesharelib

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which command-line value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputKind {
    City,
    Month,
    Day,
}

impl fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputKind::City => write!(
                f,
                "is not one of 'Chicago', 'New York City', 'Washington'"
            ),
            InvalidInputKind::Month => write!(
                f,
                "is either not a valid month or not included in the statistics (January to June)"
            ),
            InvalidInputKind::Day => write!(f, "is not a valid day of the week"),
        }
    }
}

/// Errors that can occur while loading, filtering or summarizing trips
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city, month or day selector was rejected
    #[error("'{value}' {kind}")]
    InvalidInput {
        kind: InvalidInputKind,
        value: String,
    },

    /// The city's data file could not be opened
    #[error("data file not found '{path}': {source}")]
    DataSourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required column is absent from the header row
    #[error("'{path}' has no '{column}' column")]
    MissingColumn { path: PathBuf, column: String },

    /// A cell could not be parsed
    #[error("line {line}: invalid {column} '{value}': {message}")]
    Parse {
        line: u64,
        column: String,
        value: String,
        message: String,
    },

    /// Malformed CSV structure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Nothing to compute a statistic from
    #[error("no data: {0}")]
    NoData(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BikeshareError {
    pub(crate) fn invalid(kind: InvalidInputKind, value: impl Into<String>) -> Self {
        BikeshareError::InvalidInput {
            kind,
            value: value.into(),
        }
    }

    /// True for errors a single report section recovers from.
    pub fn is_no_data(&self) -> bool {
        matches!(self, BikeshareError::NoData(_))
    }
}
