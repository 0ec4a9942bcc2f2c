//! Most frequent times of travel.

use serde::Serialize;

use crate::data::{month_name, TripTable};
use crate::error::BikeshareError;
use crate::Result;

use super::frequency::{Frequency, Tally};

/// Most common month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    /// Calendar month number (1-12)
    pub month: Tally<u32>,
    pub month_name: String,
    /// Title-cased weekday name
    pub day_of_week: Tally<String>,
    /// Hour of day (0-23)
    pub start_hour: Tally<u32>,
}

/// Compute the busiest month, weekday and start hour.
///
/// Ties go to the lowest month number, the alphabetically first weekday name
/// and the earliest hour. An empty table yields [`BikeshareError::NoData`].
pub fn time_stats(table: &TripTable) -> Result<TimeStats> {
    let months: Frequency<u32> = table.iter().map(|t| t.month()).collect();
    let days: Frequency<&str> = table.iter().map(|t| t.day_of_week()).collect();
    let hours: Frequency<u32> = table.iter().map(|t| t.start_hour()).collect();

    let (Some(month), Some(day), Some(hour)) =
        (months.most_common(), days.most_common(), hours.most_common())
    else {
        return Err(BikeshareError::NoData(
            "no trips match the selected filters".to_string(),
        ));
    };

    let month = month.map(|m| *m);
    Ok(TimeStats {
        month_name: month_name(month.value).unwrap_or("Unknown").to_string(),
        month,
        day_of_week: day.map(|d| d.to_string()),
        start_hour: hour.map(|h| *h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{sample_table, trip};
    use crate::data::Schema;

    #[test]
    fn test_time_stats() {
        let stats = time_stats(&sample_table()).unwrap();
        assert_eq!(stats.month, Tally::new(1, 3));
        assert_eq!(stats.month_name, "January");
        assert_eq!(stats.day_of_week, Tally::new("Monday".to_string(), 3));
        assert_eq!(stats.start_hour, Tally::new(8, 4));
    }

    #[test]
    fn test_reported_month_has_maximum_count() {
        let table = sample_table();
        let stats = time_stats(&table).unwrap();
        for month in 1..=12 {
            let count = table.iter().filter(|t| t.month() == month).count();
            assert!(stats.month.count >= count);
        }
    }

    #[test]
    fn test_ties_resolve_to_smallest_value() {
        let table = TripTable::new(
            Schema::basic(),
            vec![
                // Tuesday, March, 17h
                trip(0, "2017-03-07 17:00:00", 60.0, "A", "B"),
                // Monday, February, 9h
                trip(1, "2017-02-06 09:00:00", 60.0, "A", "B"),
            ],
        );
        let stats = time_stats(&table).unwrap();
        assert_eq!(stats.month.value, 2);
        assert_eq!(stats.day_of_week.value, "Monday");
        assert_eq!(stats.start_hour.value, 9);
    }

    #[test]
    fn test_empty_table_is_no_data() {
        let table = TripTable::new(Schema::full(), Vec::new());
        let err = time_stats(&table).unwrap_err();
        assert!(err.is_no_data());
    }
}
