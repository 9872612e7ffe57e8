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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::Router;

mod index_get;
mod precipitation_get;
mod stations_get;
mod stats_get;
mod stats_range_get;
#[cfg(test)]
mod testutils;
mod tobs_get;

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/", get(index_get::handler))
        .route("/api/v1.0/precipitation", get(precipitation_get::handler))
        .route("/api/v1.0/stations", get(stations_get::handler))
        .route("/api/v1.0/tobs", get(tobs_get::handler))
        .route("/api/v1.0/:start_date", get(stats_get::handler))
        .route("/api/v1.0/:start_date/:end_date", get(stats_range_get::handler))
        .with_state(driver)
}

/// Rounds a measurement to two decimal places for presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use climate_core::rest::testutils::*;
    use serde_json::{Value, json};

    #[test]
    fn test_round2() {
        assert_eq!(0.0, round2(0.0));
        assert_eq!(1.23, round2(1.234));
        assert_eq!(1.24, round2(1.235001));
        assert_eq!(-0.5, round2(-0.499));
        assert_eq!(74.0, round2(74.0));
    }

    #[tokio::test]
    async fn test_end_to_end() {
        let context = TestContext::setup().await;
        for day in 14..=23 {
            let date = format!("2017-08-{:02}", day);
            context.put("USC00519397", &date, Some(0.0), 70.0 + f64::from(day)).await;
        }
        context.put("USC00516128", "2017-08-20", None, 75.0).await;

        let stations = OneShotBuilder::new(
            context.app(),
            (http::Method::GET, "/api/v1.0/stations"),
        )
        .send_empty()
        .await
        .expect_json::<Vec<String>>()
        .await;
        assert!(stations.contains(&"USC00519397".to_owned()));

        let stats = OneShotBuilder::new(context.app(), (http::Method::GET, "/api/v1.0/20300101"))
            .send_empty()
            .await
            .expect_json::<Value>()
            .await;
        assert_eq!(
            json!([{
                "Minimum temperature": null,
                "Maximum temperature": null,
                "Average temperature": null,
            }]),
            stats
        );

        let tobs = OneShotBuilder::new(context.into_app(), (http::Method::GET, "/api/v1.0/tobs"))
            .send_empty()
            .await
            .expect_json::<Vec<Value>>()
            .await;
        assert_eq!(10, tobs.len());
        assert_eq!(json!({"Date": "2017-08-14", "Temperature": 84.0}), tobs[0]);
        assert_eq!(json!({"Date": "2017-08-23", "Temperature": 93.0}), tobs[9]);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), (http::Method::GET, "/api/v1.0/a/b/c"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .take_body_as_text()
            .await;
    }
}
