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

//! API to get the daily precipitation over the last year of the dataset.

use crate::driver::Driver;
use crate::model::{DailyPrecipitation, ObservationDate};
use crate::rest::round2;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use climate_core::rest::{EmptyBody, RestResult};
use serde::{Deserialize, Serialize};

/// Precipitation totals of a single day as returned to the client.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
struct PrecipitationEntry {
    /// The day being summarized.
    #[serde(rename = "Date")]
    date: ObservationDate,

    /// Total precipitation rounded to two decimals, if any was recorded.
    #[serde(rename = "Precipitation")]
    precipitation: Option<f64>,
}

impl From<DailyPrecipitation> for PrecipitationEntry {
    fn from(daily: DailyPrecipitation) -> Self {
        Self { date: *daily.date(), precipitation: daily.total().map(round2) }
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> RestResult<impl IntoResponse> {
    let totals = driver.get_last_year_precipitation().await?;
    let response =
        totals.into_iter().map(PrecipitationEntry::from).collect::<Vec<PrecipitationEntry>>();
    Ok(Json(response))
}
