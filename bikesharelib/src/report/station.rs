//! Most popular stations and trips.

use serde::Serialize;

use crate::data::TripTable;
use crate::error::BikeshareError;
use crate::Result;

use super::frequency::{Frequency, Tally};

/// A route from one station to another.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TripPair {
    pub start_station: String,
    pub end_station: String,
}

impl TripPair {
    pub fn new(start_station: impl Into<String>, end_station: impl Into<String>) -> Self {
        Self {
            start_station: start_station.into(),
            end_station: end_station.into(),
        }
    }
}

/// Every route tied for the most trips, and that trip count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularTrips {
    /// Tied routes, ordered by start then end station
    pub trips: Vec<TripPair>,
    pub count: usize,
}

/// Station popularity summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start_station: Tally<String>,
    pub end_station: Tally<String>,
    pub popular_trips: PopularTrips,
}

/// Compute the busiest start station, end station and route(s).
///
/// A single busiest station is chosen alphabetically among ties, while
/// every route sharing the highest trip count is reported.
pub fn station_stats(table: &TripTable) -> Result<StationStats> {
    let starts: Frequency<&str> = table.iter().map(|t| t.start_station.as_str()).collect();
    let ends: Frequency<&str> = table.iter().map(|t| t.end_station.as_str()).collect();
    let routes: Frequency<(&str, &str)> = table
        .iter()
        .map(|t| (t.start_station.as_str(), t.end_station.as_str()))
        .collect();

    let (Some(start), Some(end), Some(count)) =
        (starts.most_common(), ends.most_common(), routes.max_count())
    else {
        return Err(BikeshareError::NoData(
            "no trips match the selected filters".to_string(),
        ));
    };

    let trips = routes
        .modes()
        .into_iter()
        .map(|(from, to)| TripPair::new(*from, *to))
        .collect();

    Ok(StationStats {
        start_station: start.map(|s| s.to_string()),
        end_station: end.map(|s| s.to_string()),
        popular_trips: PopularTrips { trips, count },
    })
}
