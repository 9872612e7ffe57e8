// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! High-level data types.

use climate_core::model::{ModelError, ModelResult};
use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

/// Format of dates as stored in the database and as returned to clients.
const ISO_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Format of dates as provided by clients in request paths.
const COMPACT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year][month][day]");

/// Number of days that make up "the last year" of observations.
const LOOKBACK_DAYS: i64 = 365;

/// The calendar date on which an observation was recorded.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct ObservationDate(Date);

impl ObservationDate {
    /// Parses a date in the `YYYY-MM-DD` format used by the dataset.
    pub fn parse_iso(s: &str) -> ModelResult<Self> {
        Date::parse(s, ISO_FORMAT)
            .map(Self)
            .map_err(|e| ModelError(format!("Invalid date '{}': {}", s, e)))
    }

    /// Parses a date in the `YYYYMMDD` format, which must be exactly eight digits long.
    pub fn parse_compact(s: &str) -> ModelResult<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError(format!("Date '{}' is not in YYYYMMDD format", s)));
        }
        Date::parse(s, COMPACT_FORMAT)
            .map(Self)
            .map_err(|e| ModelError(format!("Invalid date '{}': {}", s, e)))
    }

    /// Returns the date that starts the year-long window ending at this date.
    ///
    /// This is a fixed offset of 365 days, not a calendar year, so leap days shift the result.
    pub fn year_before(self) -> Self {
        Self(self.0.saturating_sub(Duration::days(LOOKBACK_DAYS)))
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.0.year(), u8::from(self.0.month()), self.0.day())
    }
}

impl Serialize for ObservationDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObservationDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ObservationDate::parse_iso(&raw).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
impl From<&'static str> for ObservationDate {
    /// Creates a new date from a hardcoded `YYYY-MM-DD` string, which must be valid.
    fn from(raw: &'static str) -> Self {
        ObservationDate::parse_iso(raw).expect("Hardcoded dates must be valid")
    }
}

/// Identifier of an observation station.
#[derive(Clone, Constructor, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Returns a string view of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
impl From<&'static str> for StationId {
    fn from(raw: &'static str) -> Self {
        StationId::new(raw.to_owned())
    }
}

/// A daily observation recorded by a station.
#[derive(Constructor, Debug, Getters, PartialEq)]
pub struct Measurement {
    /// The station that recorded this observation.
    station: StationId,

    /// The day this observation covers.
    date: ObservationDate,

    /// Precipitation for the day, if it was recorded.
    prcp: Option<f64>,

    /// Temperature observation for the day.
    tobs: f64,
}

/// Metadata of a fixed observation site.
#[derive(Constructor, Debug, Getters, PartialEq)]
pub struct Station {
    /// Unique identifier of the station.
    station: StationId,

    /// Human-readable name of the station.
    name: String,

    /// Latitude of the station in degrees.
    latitude: f64,

    /// Longitude of the station in degrees.
    longitude: f64,

    /// Elevation of the station.
    elevation: f64,
}

/// Total precipitation recorded across all stations on a single day.
#[derive(Constructor, Debug, Getters, PartialEq)]
pub struct DailyPrecipitation {
    /// The day being summarized.
    date: ObservationDate,

    /// Sum of the recorded precipitation, or `None` if no station recorded any value.
    total: Option<f64>,
}

/// A single temperature observation of a station.
#[derive(Constructor, Debug, Getters, PartialEq)]
pub struct TemperatureReading {
    /// The day of the observation.
    date: ObservationDate,

    /// The observed temperature.
    tobs: f64,
}

/// The temperature readings of a specific station.
#[derive(Constructor, Debug, Getters, PartialEq)]
pub struct StationTemperatures {
    /// The station that recorded the readings.
    station: StationId,

    /// Readings in ascending date order.
    readings: Vec<TemperatureReading>,
}

impl StationTemperatures {
    /// Consumes the object and returns its readings.
    pub fn take_readings(self) -> Vec<TemperatureReading> {
        self.readings
    }
}

/// Aggregate statistics over a set of temperature observations.
///
/// All fields are `None` when the set of observations is empty.
#[derive(Constructor, Debug, Getters, PartialEq)]
pub struct TemperatureStats {
    /// Lowest observed temperature.
    min: Option<f64>,

    /// Highest observed temperature.
    max: Option<f64>,

    /// Mean of the observed temperatures.
    avg: Option<f64>,
}
