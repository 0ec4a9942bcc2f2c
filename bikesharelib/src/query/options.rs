//! Filter criteria for narrowing a trip table.
//!
//! This module contains the validated selectors built from user input. All
//! parsing is case-insensitive, and an empty month or day means "all".

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Serialize, Serializer};

use crate::data::{parse_weekday, weekday_name};
use crate::error::{BikeshareError, InvalidInputKind};
use crate::source::City;
use crate::Result;

/// Months covered by the published datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// All selectable months, in calendar order.
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar number (January = 1).
    pub fn ordinal(&self) -> u32 {
        let position = Month::ALL.iter().position(|m| m == self).unwrap_or(0);
        position as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl FromStr for Month {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| BikeshareError::invalid(InvalidInputKind::Month, name))
    }
}

/// Month selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    /// No month filter
    #[default]
    All,
    /// Keep trips starting in this month
    Only(Month),
}

impl MonthFilter {
    /// Whether a trip starting in calendar month `month` passes.
    pub fn accepts(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.ordinal() == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        s.parse().map(MonthFilter::Only)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

impl Serialize for MonthFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Day-of-week selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    /// No day filter
    #[default]
    All,
    /// Keep trips starting on this weekday
    Only(Weekday),
}

impl DayFilter {
    /// Whether a trip starting on the weekday called `day_name` passes.
    /// The comparison ignores case.
    pub fn accepts(&self, day_name: &str) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => weekday_name(*day).eq_ignore_ascii_case(day_name),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        parse_weekday(s)
            .map(DayFilter::Only)
            .ok_or_else(|| BikeshareError::invalid(InvalidInputKind::Day, s))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

impl Serialize for DayFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// City plus optional month and day selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    /// Criteria for `city` with no month or day filter.
    pub fn new(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }

    /// Validate raw user input.
    ///
    /// Cities are checked first, then the month, then the day; the first
    /// invalid value is reported.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self> {
        Ok(Self {
            city: city.parse()?,
            month: month.parse()?,
            day: day.parse()?,
        })
    }

    /// Builder: set the month selector.
    pub fn month(mut self, month: MonthFilter) -> Self {
        self.month = month;
        self
    }

    /// Builder: set the day selector.
    pub fn day(mut self, day: DayFilter) -> Self {
        self.day = day;
        self
    }

    /// True when neither month nor day narrows the data.
    pub fn is_unfiltered(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "City: {}, Month(s): {}, Day(s): {}",
            self.city, self.month, self.day
        )
    }
}
