//! Table-ready data structures for raw trip rows.
//!
//! `RawTable` is a presentation-ready structure that templates can iterate
//! directly or that can be serialized to JSON. It only formats values into
//! strings: which rows to show is decided by the pager.

use serde::{Deserialize, Serialize};

use crate::data::{columns, Schema, TripRecord};

use super::pager::Window;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (the record's position in its source file)
    pub label: String,
    /// One value per data column, ready for display
    pub values: Vec<String>,
}

/// Raw trip rows formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    /// Column headers: the label header followed by one per value column
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl RawTable {
    /// Format `records`, including the demographic columns `schema` carries.
    pub fn from_records(records: &[TripRecord], schema: Schema) -> Self {
        RawTable {
            headers: build_headers(schema),
            rows: records
                .iter()
                .map(|record| TableRow {
                    label: record.index.to_string(),
                    values: format_record(record, schema),
                })
                .collect(),
        }
    }

    /// Format one pager window.
    pub fn from_window(window: &Window<'_>, schema: Schema) -> Self {
        Self::from_records(window.rows, schema)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn build_headers(schema: Schema) -> Vec<String> {
    let mut headers: Vec<String> = std::iter::once("")
        .chain(columns::REQUIRED)
        .map(str::to_string)
        .collect();
    if schema.gender {
        headers.push(columns::GENDER.to_string());
    }
    if schema.birth_year {
        headers.push(columns::BIRTH_YEAR.to_string());
    }
    headers
}

/// Format a duration without a trailing `.0` for whole seconds.
fn format_duration(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{seconds:.0}")
    } else {
        seconds.to_string()
    }
}

fn format_record(record: &TripRecord, schema: Schema) -> Vec<String> {
    let blank = String::new;
    let mut values = vec![
        record.start_time.format(TIMESTAMP_FORMAT).to_string(),
        record.end_time.format(TIMESTAMP_FORMAT).to_string(),
        format_duration(record.trip_duration),
        record.start_station.clone(),
        record.end_station.clone(),
        record.user_type.clone().unwrap_or_else(blank),
    ];
    if schema.gender {
        values.push(record.gender.clone().unwrap_or_else(blank));
    }
    if schema.birth_year {
        values.push(
            record
                .birth_year
                .map(|year| year.to_string())
                .unwrap_or_else(blank),
        );
    }
    values
}
