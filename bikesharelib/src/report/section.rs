//! Report sections that may be unavailable for a given table.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::BikeshareError;
use crate::Result;

/// A computed statistic, or the reason it could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Available(T),
    Unavailable { reason: String },
}

impl<T> Section<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Section::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Section::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            Section::Available(value) => Some(value),
            Section::Unavailable { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Section::Available(_) => None,
            Section::Unavailable { reason } => Some(reason),
        }
    }
}

impl<T> From<Result<T>> for Section<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Section::Available(value),
            Err(BikeshareError::NoData(reason)) => Section::Unavailable { reason },
            Err(other) => Section::Unavailable {
                reason: other.to_string(),
            },
        }
    }
}

/// A section together with the time it took to compute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    pub elapsed_secs: f64,
    pub section: Section<T>,
}

impl<T> Timed<T> {
    /// Run `compute`, recording how long it took.
    pub fn measure(name: &str, compute: impl FnOnce() -> Result<T>) -> Self {
        let started = Instant::now();
        let section = Section::from(compute());
        let elapsed_secs = started.elapsed().as_secs_f64();
        debug!(
            section = name,
            elapsed_secs,
            available = section.is_available(),
            "report section computed"
        );
        Self {
            elapsed_secs,
            section,
        }
    }
}
