//! Reporting: compute descriptive statistics over a filtered trip table.
//!
//! This module handles the fourth stage of the pipeline. Four reporters run in
//! a fixed order, each timed and each allowed to come back unavailable
//! without failing the others:
//!
//! 1. **Time**: most common month, weekday and start hour
//! 2. **Station**: most common start/end station and trip
//! 3. **Duration**: total and mean trip duration
//! 4. **Users**: user types, gender and birth year
//!
//! ## Example
//!
//! ```rust,ignore
//! use bikesharelib::report::build_report;
//!
//! let report = build_report(&filtered, &criteria);
//! if let Some(time) = report.time.section.as_available() {
//!     println!("Busiest month: {}", time.month_name);
//! }
//! ```

pub mod duration;
pub mod frequency;
pub mod section;
pub mod station;
pub mod time;
pub mod users;

use serde::Serialize;
use tracing::info;

use crate::data::TripTable;
use crate::query::FilterCriteria;

pub use duration::{duration_stats, round2, DurationStats};
pub use frequency::{Frequency, Tally};
pub use section::{Section, Timed};
pub use station::{station_stats, PopularTrips, StationStats, TripPair};
pub use time::{time_stats, TimeStats};
pub use users::{user_stats, BirthYearStats, UserStats};

/// The full statistics report for one filtered selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub criteria: FilterCriteria,
    /// Number of trips left after filtering
    pub trip_count: usize,
    pub time: Timed<TimeStats>,
    pub stations: Timed<StationStats>,
    pub durations: Timed<DurationStats>,
    pub users: Timed<UserStats>,
}

/// Run every reporter over `table`, in order.
pub fn build_report(table: &TripTable, criteria: &FilterCriteria) -> Report {
    info!(trips = table.len(), %criteria, "building report");

    let time = Timed::measure("time", || time_stats(table));
    let stations = Timed::measure("stations", || station_stats(table));
    let durations = Timed::measure("durations", || Ok(duration_stats(table)));
    let users = Timed::measure("users", || user_stats(table, criteria.city));

    Report {
        criteria: *criteria,
        trip_count: table.len(),
        time,
        stations,
        durations,
        users,
    }
}
