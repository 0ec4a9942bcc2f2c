//! Load a city's trip file into a [`TripTable`].
//!
//! Loading is all-or-nothing: the first malformed timestamp or number aborts
//! the load with an error naming the line, column and value.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::data::{columns, Schema, TripRecord, TripTable};
use crate::error::BikeshareError;
use crate::Result;

use super::city::{City, DataSource};

/// Timestamp layouts accepted in `Start Time` / `End Time`.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// One CSV row as read from disk. Optional columns default to `None` when
/// the file does not have them; blank cells are `None` too.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Load the trip file for `city` from `source`.
///
/// # Example
///
/// ```rust
/// use bikesharelib::{load_city, City, DataSource};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(
///     dir.path().join("washington.csv"),
///     "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
///      2017-01-02 08:00:00,2017-01-02 08:10:00,600.0,A St,B St,Subscriber\n",
/// )
/// .unwrap();
///
/// let table = load_city(&DataSource::new(dir.path()), City::Washington).unwrap();
/// assert_eq!(table.len(), 1);
/// assert!(!table.schema().gender);
/// ```
pub fn load_city(source: &DataSource, city: City) -> Result<TripTable> {
    let path = source.path_for(city);
    info!(city = city.name(), path = %path.display(), "loading trip data");

    let table = load_path(&path)?;
    if table.schema() != city.expected_schema() {
        warn!(
            city = city.name(),
            found = ?table.schema(),
            expected = ?city.expected_schema(),
            "unexpected demographic columns"
        );
    }
    Ok(table)
}

/// Load a trip file from an explicit path.
pub fn load_path(path: impl AsRef<Path>) -> Result<TripTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BikeshareError::DataSourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file, path)
}

/// Load trips from any reader. `path` is only used in error messages.
pub fn load_reader<R: Read>(reader: R, path: &Path) -> Result<TripTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    for column in columns::REQUIRED {
        if !headers.iter().any(|h| h == column) {
            return Err(BikeshareError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    let schema = Schema::from_columns(headers.iter());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawTrip = record.deserialize(Some(&headers))?;
        rows.push(to_trip(index, line, raw)?);
    }

    debug!(rows = rows.len(), ?schema, "trip data loaded");
    Ok(TripTable::new(schema, rows))
}

fn to_trip(index: usize, line: u64, raw: RawTrip) -> Result<TripRecord> {
    let start_time = parse_timestamp(&raw.start_time, line, columns::START_TIME)?;
    let end_time = parse_timestamp(&raw.end_time, line, columns::END_TIME)?;
    let trip_duration = parse_number(&raw.trip_duration, line, columns::TRIP_DURATION)?;
    let birth_year = non_blank(raw.birth_year)
        .as_deref()
        .map(|value| parse_year(value, line))
        .transpose()?;

    Ok(TripRecord::new(
        index,
        start_time,
        end_time,
        trip_duration,
        raw.start_station,
        raw.end_station,
    )
    .with_user_type(non_blank(raw.user_type))
    .with_gender(non_blank(raw.gender))
    .with_birth_year(birth_year))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_error(line: u64, column: &str, value: &str, message: impl Into<String>) -> BikeshareError {
    BikeshareError::Parse {
        line,
        column: column.to_string(),
        value: value.to_string(),
        message: message.into(),
    }
}

/// Parse a timestamp in any of [`TIMESTAMP_FORMATS`].
pub fn parse_timestamp(value: &str, line: u64, column: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| parse_error(line, column, value, "expected YYYY-MM-DD HH:MM:SS"))
}

fn parse_number(value: &str, line: u64, column: &str) -> Result<f64> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| parse_error(line, column, value, e.to_string()))?;
    if !number.is_finite() {
        return Err(parse_error(line, column, value, "not a finite number"));
    }
    Ok(number)
}

/// Birth years are written as floats ("1992.0").
fn parse_year(value: &str, line: u64) -> Result<i32> {
    let year = parse_number(value, line, columns::BIRTH_YEAR)?;
    if year.fract() != 0.0 || year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return Err(parse_error(line, columns::BIRTH_YEAR, value, "not a whole year"));
    }
    Ok(year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::fs;
    use tempfile::tempdir;

    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,
";

    const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,
";

    fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_chicago() {
        let dir = tempdir().unwrap();
        write_csv(dir.path(), "chicago.csv", CHICAGO_CSV);

        let table = load_city(&DataSource::new(dir.path()), City::Chicago).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.schema(), Schema::full());

        let first = &table.rows()[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.month(), 6);
        assert_eq!(first.weekday(), Weekday::Fri);
        assert_eq!(first.start_hour(), 15);
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.start_station, "Wood St & Hubbard St");
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        let blank = &table.rows()[2];
        assert_eq!(blank.user_type.as_deref(), Some("Customer"));
        assert_eq!(blank.gender, None);
        assert_eq!(blank.birth_year, None);
    }

    #[test]
    fn test_load_washington_has_basic_schema() {
        let dir = tempdir().unwrap();
        write_csv(dir.path(), "washington.csv", WASHINGTON_CSV);

        let table = load_city(&DataSource::new(dir.path()), City::Washington).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.schema(), Schema::basic());
        assert!((table.rows()[0].trip_duration - 489.066).abs() < 1e-9);
        assert_eq!(table.rows()[1].user_type, None);
        assert_eq!(table.rows()[1].day_of_week(), "Saturday");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_city(&DataSource::new(dir.path()), City::NewYorkCity).unwrap_err();
        match err {
            BikeshareError::DataSourceNotFound { path, .. } => {
                assert!(path.ends_with("new_york_city.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_required_column() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "broken.csv",
            "Start Time,End Time,Start Station,End Station,User Type\n",
        );
        let err = load_path(&path).unwrap_err();
        match err {
            BikeshareError::MissingColumn { column, .. } => assert_eq!(column, "Trip Duration"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_timestamp_fails_fast() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:10:00,600,A,B,Subscriber
yesterday,2017-01-02 08:10:00,600,A,B,Subscriber
";
        let err = load_reader(csv.as_bytes(), Path::new("inline.csv")).unwrap_err();
        match err {
            BikeshareError::Parse {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Start Time");
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_duration() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:10:00,ten minutes,A,B,Subscriber
";
        let err = load_reader(csv.as_bytes(), Path::new("inline.csv")).unwrap_err();
        assert!(matches!(
            err,
            BikeshareError::Parse { ref column, .. } if column == "Trip Duration"
        ));
    }

    #[test]
    fn test_fractional_birth_year_rejected() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 08:00:00,2017-01-02 08:10:00,600,A,B,Subscriber,Male,1990.5
";
        let err = load_reader(csv.as_bytes(), Path::new("inline.csv")).unwrap_err();
        assert!(matches!(err, BikeshareError::Parse { ref column, .. } if column == "Birth Year"));
    }

    #[test]
    fn test_timestamp_formats() {
        assert!(parse_timestamp("2017-01-02 08:00:00", 1, "Start Time").is_ok());
        assert!(parse_timestamp("2017-01-02 08:00:00.250", 1, "Start Time").is_ok());
        assert!(parse_timestamp("2017-01-02T08:00:00", 1, "Start Time").is_ok());
        assert!(parse_timestamp("02/01/2017 08:00", 1, "Start Time").is_err());
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let csv = "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n";
        let table = load_reader(csv.as_bytes(), Path::new("inline.csv")).unwrap();
        assert!(table.is_empty());
    }
}
