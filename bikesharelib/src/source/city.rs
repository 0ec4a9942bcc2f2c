//! Supported cities and where their data lives.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::Schema;
use crate::error::{BikeshareError, InvalidInputKind};

/// A city with a bike-share dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All supported cities.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case identifier accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Display name ("New York City").
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Name of the city's trip file.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Demographic columns the city's file is published with.
    ///
    /// Washington does not record gender or birth year.
    pub fn expected_schema(&self) -> Schema {
        match self {
            City::Chicago | City::NewYorkCity => Schema::full(),
            City::Washington => Schema::basic(),
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        City::ALL
            .iter()
            .copied()
            .find(|city| city.key() == key)
            .ok_or_else(|| BikeshareError::invalid(InvalidInputKind::City, s.trim()))
    }
}

/// Directory holding the city trip files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    root: PathBuf,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl DataSource {
    /// Read city files from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a city's trip file.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.root.join(city.file_name())
    }
}
