//! Total and average trip duration.

use serde::Serialize;

use crate::data::TripTable;

/// Trip duration summary, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    /// Sum of all durations, rounded to 2 decimals
    pub total_seconds: f64,
    /// Mean duration rounded to 2 decimals; `None` when there are no trips
    pub mean_seconds: Option<f64>,
}

/// Round to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum and average the `Trip Duration` column.
///
/// An empty table has a total of `0.0` and no mean.
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let trip_count = table.len();
    let total: f64 = table.iter().map(|t| t.trip_duration).sum();
    let mean_seconds = (trip_count > 0).then(|| round2(total / trip_count as f64));

    DurationStats {
        trip_count,
        total_seconds: round2(total),
        mean_seconds,
    }
}
