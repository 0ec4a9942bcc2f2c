//! Source loading: find and read a city's trip file.
//!
//! This module handles the first stage of the pipeline - turning a city
//! selector into an in-memory [`TripTable`](crate::data::TripTable). It provides:
//!
//! - **City resolution**: map a city to its fixed file name
//! - **Loading**: parse timestamps, numbers and optional demographic columns
//!
//! ## Example
//!
//! ```rust,ignore
//! use bikesharelib::source::{load_city, City, DataSource};
//!
//! let table = load_city(&DataSource::new("data"), City::Chicago)?;
//! ```

pub mod city;
pub mod loader;

pub use city::{City, DataSource};
pub use loader::{load_city, load_path, load_reader, parse_timestamp};
