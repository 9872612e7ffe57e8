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

//! API to list the available routes.

use axum::response::IntoResponse;
use climate_core::rest::{EmptyBody, RestResult};

/// Human-readable listing of the routes served by the app.
const ROUTES: &str = "Available Routes:
/api/v1.0/precipitation
/api/v1.0/stations
/api/v1.0/tobs
/api/v1.0/<start_date>
/api/v1.0/<start_date>/<end_date>

Dates are in YYYYMMDD format, as in /api/v1.0/20160914 or /api/v1.0/20160914/20170110.
";

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> RestResult<impl IntoResponse> {
    Ok(ROUTES)
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use climate_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_content_type("text/plain")
            .expect_text("^Available Routes:\n")
            .await;
    }

    #[tokio::test]
    async fn test_lists_all_routes() {
        let context = TestContext::setup().await;

        let body = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .take_body_as_text()
            .await;
        for path in [
            "/api/v1.0/precipitation\n",
            "/api/v1.0/stations\n",
            "/api/v1.0/tobs\n",
            "/api/v1.0/<start_date>\n",
            "/api/v1.0/<start_date>/<end_date>\n",
        ] {
            assert!(body.contains(path), "Route {} missing from {}", path.trim(), body);
        }
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
