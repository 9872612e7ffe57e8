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

//! API to summarize the temperatures observed since a given date.

use crate::driver::Driver;
use crate::model::{ObservationDate, TemperatureStats};
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use climate_core::rest::{EmptyBody, RestResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Error message returned when the start date is malformed.
const INVALID_DATE_MESSAGE: &str = "Incorrect date format or invalid date, should be in \
    YYYYMMDD (range from 20100101 thru 20170823)";

/// Temperature statistics as returned to the client.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(super) struct TemperatureStatsResponse {
    /// Lowest observed temperature.
    #[serde(rename = "Minimum temperature")]
    pub(super) min: Option<f64>,

    /// Highest observed temperature.
    #[serde(rename = "Maximum temperature")]
    pub(super) max: Option<f64>,

    /// Mean of the observed temperatures.
    #[serde(rename = "Average temperature")]
    pub(super) avg: Option<f64>,
}

impl From<TemperatureStats> for TemperatureStatsResponse {
    fn from(stats: TemperatureStats) -> Self {
        Self { min: *stats.min(), max: *stats.max(), avg: *stats.avg() }
    }
}

/// Response for requests that carry unparseable dates.
///
/// These are reported with a successful HTTP status so that existing clients keep working.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(super) struct InvalidDateResponse {
    /// Description of the expected date format.
    pub(super) error: String,
}

/// Builds the response for a request whose dates could not be parsed.
pub(super) fn invalid_date(message: &str) -> Response {
    Json(InvalidDateResponse { error: message.to_owned() }).into_response()
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    start_date: Result<Path<String>, PathRejection>,
    _: EmptyBody,
) -> RestResult<Response> {
    let parsed = start_date
        .map_err(|e| e.body_text())
        .and_then(|Path(start_date)| {
            ObservationDate::parse_compact(&start_date).map_err(|e| e.to_string())
        });
    let start = match parsed {
        Ok(date) => date,
        Err(e) => {
            debug!("Rejecting stats request: {}", e);
            return Ok(invalid_date(INVALID_DATE_MESSAGE));
        }
    };

    let stats = driver.get_temperature_stats(start).await?;
    Ok(Json(vec![TemperatureStatsResponse::from(stats)]).into_response())
}
