//! In-memory trip table.

use super::trip::{Schema, TripRecord};

/// Ordered trips from one city file plus the file's schema.
///
/// A table never changes after it is built; narrowing it produces a new
/// table (see [`crate::query::filter_trips`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    schema: Schema,
    rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(schema: Schema, rows: Vec<TripRecord>) -> Self {
        Self { schema, rows }
    }

    /// Optional columns carried by the source file.
    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New table with the same schema holding the rows that satisfy `keep`.
    pub fn retain_where(&self, mut keep: impl FnMut(&TripRecord) -> bool) -> Self {
        Self {
            schema: self.schema,
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{sample_table, trip};

    #[test]
    fn test_retain_where_leaves_source_untouched() {
        let table = sample_table();
        let before = table.clone();
        let mondays = table.retain_where(|t| t.day_of_week() == "Monday");

        assert_eq!(table, before);
        assert!(mondays.len() < table.len());
        assert!(mondays.iter().all(|t| t.day_of_week() == "Monday"));
        assert_eq!(mondays.schema(), table.schema());
    }

    #[test]
    fn test_empty_table() {
        let table = TripTable::new(Schema::basic(), Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_rows_keep_order() {
        let table = TripTable::new(
            Schema::basic(),
            vec![
                trip(0, "2017-03-01 10:00:00", 10.0, "B", "C"),
                trip(1, "2017-01-01 10:00:00", 10.0, "A", "C"),
            ],
        );
        let indexes: Vec<usize> = table.iter().map(|t| t.index).collect();
        assert_eq!(indexes, vec![0, 1]);
    }
}
