//! Data model: trip records and the in-memory trip table.
//!
//! This module holds the types every other stage works on:
//!
//! - **TripRecord**: one trip with its derived month and weekday
//! - **Schema**: which optional demographic columns a city file carries
//! - **TripTable**: the ordered, immutable collection of trips
//!
//! ## Example
//!
//! ```rust
//! use bikesharelib::data::{Schema, TripRecord, TripTable};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2017, 1, 2).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2017, 1, 2).unwrap().and_hms_opt(8, 10, 0).unwrap();
//! let trip = TripRecord::new(0, start, end, 600.0, "Canal St", "Clark St");
//! assert_eq!(trip.day_of_week(), "Monday");
//!
//! let table = TripTable::new(Schema::basic(), vec![trip]);
//! assert_eq!(table.len(), 1);
//! ```

pub mod calendar;
pub mod table;
pub mod trip;

#[cfg(test)]
pub(crate) mod fixtures;

pub use calendar::{month_name, parse_weekday, weekday_name, MONTH_NAMES, WEEKDAYS};
pub use table::TripTable;
pub use trip::{columns, Schema, TripRecord};
