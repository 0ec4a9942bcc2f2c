//! Output: page through raw rows and shape them for display.
//!
//! This module handles the last stage of the pipeline - revealing the filtered
//! trip table a few rows at a time. It provides:
//!
//! - **RawDataPager**: cursor state machine handing out fixed-size windows
//! - **run_pager**: interactive driver over any reader/writer pair
//! - **RawTable**: table-ready rows with formatted string cells
//!
//! RawTable is a pure presentation layer - it only formats data into strings.
//! Filtering and aggregation happen in the earlier stages.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bikesharelib::output::{RawDataPager, RawTable};
//!
//! for window in RawDataPager::new(table.rows()).windows() {
//!     let raw = RawTable::from_window(&window, table.schema());
//!     // raw.headers: ["", "Start Time", "End Time", ...]
//! }
//! ```

pub mod pager;
pub mod table;

pub use pager::{is_affirmative, run_pager, PagerState, RawDataPager, Window, Windows, WINDOW};
pub use table::{RawTable, TableRow};
