//! Trip records and the per-file schema.
//!
//! A [`TripRecord`] holds one row of a city's trip file. The calendar month
//! and weekday are derived from the start timestamp when the record is built
//! and cannot be set independently, so they always agree with `start_time`.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::calendar::weekday_name;

/// Column names, byte-for-byte as they appear in the source files.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    /// Columns every city file carries.
    pub const REQUIRED: [&str; 6] = [
        START_TIME,
        END_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];
}

/// Which optional demographic columns a trip file carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// File has a `Gender` column
    pub gender: bool,
    /// File has a `Birth Year` column
    pub birth_year: bool,
}

impl Schema {
    /// Schema with both demographic columns.
    pub fn full() -> Self {
        Self {
            gender: true,
            birth_year: true,
        }
    }

    /// Schema with no demographic columns.
    pub fn basic() -> Self {
        Self::default()
    }

    /// Detect the schema from a header row.
    pub fn from_columns<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut schema = Self::basic();
        for name in names {
            match name {
                columns::GENDER => schema.gender = true,
                columns::BIRTH_YEAR => schema.birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// One bike-share trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based position of the row in its source file
    pub index: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip length in seconds
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    /// Subscriber, Customer, ... (`None` when the cell is blank)
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    month: u32,
    weekday: Weekday,
}

impl TripRecord {
    /// Create a record; the month and weekday are derived from `start_time`.
    pub fn new(
        index: usize,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            index,
            start_time,
            end_time,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
        }
    }

    /// Builder: set the user type.
    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    /// Builder: set the gender.
    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    /// Builder: set the birth year.
    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// Calendar month of the start time (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Weekday of the start time.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Title-cased weekday name of the start time.
    pub fn day_of_week(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    /// Hour of the start time (0-23).
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}
