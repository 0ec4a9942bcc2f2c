//! Narrow a trip table by month and day of week.

use tracing::debug;

use crate::data::TripTable;

use super::options::FilterCriteria;

/// Return a new table holding exactly the trips matching every active
/// selector in `criteria`. The input table is left untouched.
///
/// # Example
///
/// ```rust
/// use bikesharelib::{filter_trips, FilterCriteria, Schema, TripRecord, TripTable};
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2017, 1, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let tuesday = NaiveDate::from_ymd_opt(2017, 1, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let table = TripTable::new(
///     Schema::basic(),
///     vec![
///         TripRecord::new(0, monday, monday, 60.0, "A", "B"),
///         TripRecord::new(1, tuesday, tuesday, 60.0, "A", "B"),
///     ],
/// );
///
/// let criteria = FilterCriteria::parse("chicago", "january", "monday").unwrap();
/// let filtered = filter_trips(&table, &criteria);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(table.len(), 2);
/// ```
pub fn filter_trips(table: &TripTable, criteria: &FilterCriteria) -> TripTable {
    if criteria.is_unfiltered() {
        return table.clone();
    }

    let filtered = table.retain_where(|t| {
        criteria.month.accepts(t.month()) && criteria.day.accepts(t.day_of_week())
    });
    debug!(
        before = table.len(),
        after = filtered.len(),
        month = %criteria.month,
        day = %criteria.day,
        "filtered trips"
    );
    filtered
}

impl TripTable {
    /// Method form of [`filter_trips`].
    pub fn filter(&self, criteria: &FilterCriteria) -> TripTable {
        filter_trips(self, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_table;
    use crate::query::options::{DayFilter, Month, MonthFilter};
    use crate::source::City;
    use chrono::Weekday;

    fn criteria(month: MonthFilter, day: DayFilter) -> FilterCriteria {
        FilterCriteria::new(City::Chicago).month(month).day(day)
    }

    #[test]
    fn test_no_filter_keeps_every_row() {
        let table = sample_table();
        let filtered = filter_trips(&table, &FilterCriteria::new(City::Chicago));
        assert_eq!(filtered.len(), table.len());
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_month_filter() {
        let table = sample_table();
        let filtered = table.filter(&criteria(MonthFilter::Only(Month::January), DayFilter::All));
        let indexes: Vec<usize> = filtered.iter().map(|t| t.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn test_day_filter() {
        let table = sample_table();
        let filtered = table.filter(&criteria(MonthFilter::All, DayFilter::Only(Weekday::Mon)));
        let indexes: Vec<usize> = filtered.iter().map(|t| t.index).collect();
        assert_eq!(indexes, vec![0, 1, 3]);
    }

    #[test]
    fn test_month_and_day_filter() {
        let table = sample_table();
        let filtered = table.filter(&criteria(
            MonthFilter::Only(Month::January),
            DayFilter::Only(Weekday::Mon),
        ));
        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .iter()
            .all(|t| t.month() == 1 && t.day_of_week() == "Monday"));
    }

    #[test]
    fn test_filter_can_produce_empty_table() {
        let table = sample_table();
        let filtered = table.filter(&criteria(
            MonthFilter::Only(Month::June),
            DayFilter::Only(Weekday::Mon),
        ));
        assert!(filtered.is_empty());
        assert_eq!(filtered.schema(), table.schema());
    }

    #[test]
    fn test_filtered_rows_are_subset_satisfying_predicates() {
        let table = sample_table();
        for month in Month::ALL {
            for day in crate::data::WEEKDAYS {
                let c = criteria(MonthFilter::Only(month), DayFilter::Only(day));
                let filtered = table.filter(&c);

                for trip in filtered.iter() {
                    assert!(table.rows().contains(trip));
                    assert_eq!(trip.month(), month.ordinal());
                    assert_eq!(trip.weekday(), day);
                }
                let expected = table
                    .iter()
                    .filter(|t| t.month() == month.ordinal() && t.weekday() == day)
                    .count();
                assert_eq!(filtered.len(), expected);
            }
        }
    }
}
