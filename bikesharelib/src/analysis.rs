//! High-level API: load, filter and report in one call.

use tracing::debug;

use crate::data::TripTable;
use crate::query::{filter_trips, FilterCriteria};
use crate::report::{build_report, Report};
use crate::source::{load_city, DataSource};
use crate::Result;

/// Options for a full analysis run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// City and month/day selectors
    pub criteria: FilterCriteria,
    /// Where the city files live
    pub data_source: DataSource,
}

impl ReportOptions {
    /// Options for `criteria`, reading from the current directory.
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            data_source: DataSource::default(),
        }
    }

    /// Replace the filter criteria.
    pub fn criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Read city files from `source`.
    pub fn data_source(mut self, source: DataSource) -> Self {
        self.data_source = source;
        self
    }
}

/// The filtered trips together with the report computed over them.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Trips matching the criteria, in source order
    pub table: TripTable,
    pub report: Report,
}

/// Load the selected city, apply the filters and build the report.
///
/// Load failures are returned as errors. Reporters never fail the run: a
/// statistic that cannot be computed shows up as an unavailable section.
///
/// # Example
///
/// ```rust
/// use bikesharelib::{analyze, DataSource, FilterCriteria, ReportOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(
///     dir.path().join("chicago.csv"),
///     "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n\
///      2017-01-02 08:00:00,2017-01-02 08:10:00,600,A St,B St,Subscriber,Female,1990\n\
///      2017-01-03 09:00:00,2017-01-03 09:05:00,300,B St,A St,Customer,,\n",
/// )
/// .unwrap();
///
/// let criteria = FilterCriteria::parse("chicago", "january", "monday").unwrap();
/// let options = ReportOptions::new(criteria).data_source(DataSource::new(dir.path()));
/// let analysis = analyze(&options).unwrap();
/// assert_eq!(analysis.report.trip_count, 1);
/// assert_eq!(analysis.table.rows()[0].start_station, "A St");
/// ```
pub fn analyze(options: &ReportOptions) -> Result<Analysis> {
    let loaded = load_city(&options.data_source, options.criteria.city)?;
    let table = filter_trips(&loaded, &options.criteria);
    debug!(loaded = loaded.len(), kept = table.len(), "selection ready");

    let report = build_report(&table, &options.criteria);
    Ok(Analysis { table, report })
}
