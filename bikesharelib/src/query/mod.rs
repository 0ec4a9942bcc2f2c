//! Query processing: validate filter criteria and narrow the trip table.
//!
//! This module handles the third stage of the pipeline - turning raw user
//! input into validated selectors and applying them. It provides:
//!
//! - **Options**: `FilterCriteria`, `MonthFilter`, `DayFilter`
//! - **Filter**: `filter_trips`, a pure function returning a new table
//!
//! ## Example
//!
//! ```rust,ignore
//! use bikesharelib::query::{filter_trips, FilterCriteria};
//!
//! let criteria = FilterCriteria::parse("chicago", "january", "monday")?;
//! let filtered = filter_trips(&table, &criteria);
//! ```

pub mod filter;
pub mod options;

pub use filter::filter_trips;
pub use options::{DayFilter, FilterCriteria, Month, MonthFilter};
