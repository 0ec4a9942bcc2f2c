//! Shared test data.

use chrono::{Duration, NaiveDateTime};

use super::table::TripTable;
use super::trip::{Schema, TripRecord};

pub(crate) fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// A subscriber trip starting at `start` and lasting `duration` seconds.
pub(crate) fn trip(index: usize, start: &str, duration: f64, from: &str, to: &str) -> TripRecord {
    let start_time = ts(start);
    let end_time = start_time + Duration::seconds(duration as i64);
    TripRecord::new(index, start_time, end_time, duration, from, to)
        .with_user_type(Some("Subscriber".to_string()))
}

fn profiled(record: TripRecord, gender: &str, birth_year: i32) -> TripRecord {
    record
        .with_gender(Some(gender.to_string()))
        .with_birth_year(Some(birth_year))
}

fn customer(record: TripRecord) -> TripRecord {
    record.with_user_type(Some("Customer".to_string()))
}

/// Six Chicago-style trips.
///
/// - months: January x3, February, March, June
/// - weekdays: Monday x3, Tuesday, Saturday, Sunday
/// - start hour 8 x4
/// - start stations tie at 2, end stations tie at 2 (Canal St / Clark St)
/// - busiest routes: Canal St -> Clark St and Lake Shore Dr -> Canal St, 2 each
/// - durations sum to 3615.75
pub(crate) fn sample_table() -> TripTable {
    let rows = vec![
        profiled(
            trip(0, "2017-01-02 08:05:00", 300.0, "Canal St", "Clark St"),
            "Male",
            1980,
        ),
        profiled(
            trip(1, "2017-01-09 08:30:00", 420.5, "Canal St", "Clark St"),
            "Female",
            1992,
        ),
        customer(trip(
            2,
            "2017-01-03 17:45:00",
            1200.0,
            "Lake Shore Dr",
            "Canal St",
        )),
        profiled(
            trip(3, "2017-02-06 08:10:00", 615.25, "Clark St", "Lake Shore Dr"),
            "Male",
            1980,
        ),
        customer(trip(
            4,
            "2017-03-04 13:00:00",
            900.0,
            "Lake Shore Dr",
            "Canal St",
        )),
        profiled(
            trip(5, "2017-06-04 08:59:59", 180.0, "Clark St", "Wells St"),
            "Male",
            1975,
        ),
    ];
    TripTable::new(Schema::full(), rows)
}

/// The same trips without demographic columns, as in Washington's file.
pub(crate) fn basic_table() -> TripTable {
    let rows = sample_table()
        .iter()
        .cloned()
        .map(|r| r.with_gender(None).with_birth_year(None))
        .collect();
    TripTable::new(Schema::basic(), rows)
}
