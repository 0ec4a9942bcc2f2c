//! # bikesharelib
//!
//! Descriptive statistics over bike-share trip records for Chicago, New York
//! City and Washington.
//!
//! ## Overview
//!
//! The library is a load → filter → aggregate pipeline. Each stage lives in
//! its own module and returns plain, serializable data with no terminal I/O:
//!
//! - **source**: resolve a city to its CSV file and load it
//! - **data**: trip records, the per-file schema and the trip table
//! - **query**: validated month/day criteria and the filter engine
//! - **report**: time, station, duration and user statistics
//! - **output**: the raw-data pager and table-ready raw rows
//!
//! ## Features
//!
//! - **Deterministic ties**: the most common value is the smallest among ties,
//!   and every busiest route is reported
//! - **Optional demographics**: cities without gender or birth year columns
//!   produce "unavailable" report sections instead of errors
//! - **Fail-fast loading**: a malformed cell aborts the load with its line,
//!   column and value
//!
//! ## Example
//!
//! ```rust
//! use bikesharelib::{analyze, DataSource, FilterCriteria, ReportOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(
//!     dir.path().join("washington.csv"),
//!     "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
//!      2017-03-06 17:00:00,2017-03-06 17:12:00,720,Union Station,Dupont Circle,Subscriber\n",
//! )
//! .unwrap();
//!
//! let criteria = FilterCriteria::parse("washington", "all", "all").unwrap();
//! let options = ReportOptions::new(criteria).data_source(DataSource::new(dir.path()));
//! let analysis = analyze(&options).unwrap();
//!
//! let time = analysis.report.time.section.as_available().unwrap();
//! assert_eq!(time.month_name, "March");
//!
//! let users = analysis.report.users.section.as_available().unwrap();
//! assert!(!users.genders.is_available());
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod report;
pub mod source;

pub use analysis::{analyze, Analysis, ReportOptions};
pub use data::{Schema, TripRecord, TripTable};
pub use error::{BikeshareError, InvalidInputKind};
pub use output::{run_pager, RawDataPager, RawTable, Window};
pub use query::{filter_trips, DayFilter, FilterCriteria, Month, MonthFilter};
pub use report::{build_report, Report, Section, Tally, Timed};
pub use source::{load_city, City, DataSource};

/// Result type for bikesharelib operations
pub type Result<T> = std::result::Result<T, BikeshareError>;
