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

//! API to summarize the temperatures observed within a date range.

use crate::driver::Driver;
use crate::model::ObservationDate;
use crate::rest::stats_get::{TemperatureStatsResponse, invalid_date};
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use climate_core::rest::{EmptyBody, RestResult};
use log::debug;

/// Error message returned when either date of the range is malformed.
const INVALID_RANGE_MESSAGE: &str =
    "Enter valid start and end date in YYYYMMDD format (range from 20100101 thru 20170823)";

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    dates: Result<Path<(String, String)>, PathRejection>,
    _: EmptyBody,
) -> RestResult<Response> {
    let parsed = dates.map_err(|e| e.body_text()).and_then(|Path((start_date, end_date))| {
        let start = ObservationDate::parse_compact(&start_date).map_err(|e| e.to_string())?;
        let end = ObservationDate::parse_compact(&end_date).map_err(|e| e.to_string())?;
        Ok((start, end))
    });
    let (start, end) = match parsed {
        Ok(range) => range,
        Err(e) => {
            debug!("Rejecting stats range request: {}", e);
            return Ok(invalid_date(INVALID_RANGE_MESSAGE));
        }
    };

    let stats = driver.get_temperature_stats_range(start, end).await?;
    Ok(Json(vec![TemperatureStatsResponse::from(stats)]).into_response())
}
