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

//! API to get the last year of temperature observations of the busiest station.

use crate::driver::Driver;
use crate::model::{ObservationDate, TemperatureReading};
use crate::rest::round2;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use climate_core::rest::{EmptyBody, RestResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// A single temperature observation as returned to the client.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
struct TemperatureEntry {
    /// The day of the observation.
    #[serde(rename = "Date")]
    date: ObservationDate,

    /// The observed temperature rounded to two decimals.
    #[serde(rename = "Temperature")]
    temperature: f64,
}

impl From<TemperatureReading> for TemperatureEntry {
    fn from(reading: TemperatureReading) -> Self {
        Self { date: *reading.date(), temperature: round2(*reading.tobs()) }
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> RestResult<impl IntoResponse> {
    let temperatures = driver.get_busiest_station_temperatures().await?;
    debug!("Busiest station is {}", temperatures.station().as_str());
    let response = temperatures
        .take_readings()
        .into_iter()
        .map(TemperatureEntry::from)
        .collect::<Vec<TemperatureEntry>>();
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use climate_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api/v1.0/tobs".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        context.put("BUSY", "2016-06-01", None, 10.0).await;
        context.put("BUSY", "2017-06-01", None, 77.777).await;
        context.put("BUSY", "2016-07-01", None, 71.0).await;
        context.put("BUSY", "2017-07-01", None, 79.0).await;
        context.put("QUIET", "2017-08-23", None, 99.0).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<TemperatureEntry>>()
            .await;
        assert_eq!(
            vec![
                TemperatureEntry { date: ObservationDate::from("2016-07-01"), temperature: 71.0 },
                TemperatureEntry { date: ObservationDate::from("2017-06-01"), temperature: 77.78 },
                TemperatureEntry { date: ObservationDate::from("2017-07-01"), temperature: 79.0 },
            ],
            response
        );
    }

    #[tokio::test]
    async fn test_field_names() {
        let context = TestContext::setup().await;
        context.put("A", "2017-08-23", None, 70.5).await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_text(r#"^\[\{"Date":"2017-08-23","Temperature":70\.5\}\]$"#)
            .await;
    }

    #[tokio::test]
    async fn test_empty_dataset() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("No measurements available")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
