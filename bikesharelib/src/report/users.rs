//! Rider demographics: user types, gender and birth year.
//!
//! Gender and birth year exist only in some cities' files. Their absence is
//! read from the table's [`Schema`](crate::data::Schema) and reported as an
//! unavailable section, never as an error.

use serde::Serialize;

use crate::data::TripTable;
use crate::error::BikeshareError;
use crate::source::City;
use crate::Result;

use super::frequency::{Frequency, Tally};
use super::section::Section;

/// Earliest, most recent and most common year of birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Tally<i32>,
}

/// Demographic breakdown of the riders in a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// Counts per user type, most common first
    pub user_types: Vec<Tally<String>>,
    /// Counts per gender, most common first
    pub genders: Section<Vec<Tally<String>>>,
    pub birth_years: Section<BirthYearStats>,
}

fn owned_counts(freq: &Frequency<&str>) -> Vec<Tally<String>> {
    freq.sorted_by_count()
        .into_iter()
        .map(|t| t.map(|v| v.to_string()))
        .collect()
}

/// Summarize user types, genders and birth years.
///
/// `city` names the city in the notices shown when a column is missing.
/// An empty table yields [`BikeshareError::NoData`].
pub fn user_stats(table: &TripTable, city: City) -> Result<UserStats> {
    if table.is_empty() {
        return Err(BikeshareError::NoData(
            "no trips match the selected filters".to_string(),
        ));
    }

    let user_types: Frequency<&str> = table
        .iter()
        .filter_map(|t| t.user_type.as_deref())
        .collect();

    Ok(UserStats {
        user_types: owned_counts(&user_types),
        genders: gender_counts(table, city).into(),
        birth_years: birth_year_stats(table, city).into(),
    })
}

fn gender_counts(table: &TripTable, city: City) -> Result<Vec<Tally<String>>> {
    if !table.schema().gender {
        return Err(BikeshareError::NoData(format!(
            "Gender statistics are unavailable for {city}."
        )));
    }

    let genders: Frequency<&str> = table.iter().filter_map(|t| t.gender.as_deref()).collect();
    if genders.is_empty() {
        return Err(BikeshareError::NoData(
            "No gender was recorded for the selected trips.".to_string(),
        ));
    }
    Ok(owned_counts(&genders))
}

fn birth_year_stats(table: &TripTable, city: City) -> Result<BirthYearStats> {
    if !table.schema().birth_year {
        return Err(BikeshareError::NoData(format!(
            "Year of birth statistics are unavailable for {city}."
        )));
    }

    let years: Frequency<i32> = table.iter().filter_map(|t| t.birth_year).collect();
    let (Some((earliest, most_recent)), Some(most_common)) = (years.range(), years.most_common())
    else {
        return Err(BikeshareError::NoData(
            "No year of birth was recorded for the selected trips.".to_string(),
        ));
    };

    Ok(BirthYearStats {
        earliest: *earliest,
        most_recent: *most_recent,
        most_common: most_common.map(|y| *y),
    })
}
