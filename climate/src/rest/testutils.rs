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

//! Test utilities for the REST API.

use crate::db::testutils::{init_schema, put_measurement};
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use climate_core::db::Db;
use climate_core::db::sqlite::testutils::setup;
use std::sync::Arc;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::new(setup().await);
        init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Records a measurement taken by `station` on `date`, which is in `YYYY-MM-DD` format.
    pub(crate) async fn put(&self, station: &str, date: &str, prcp: Option<f64>, tobs: f64) {
        put_measurement(
            &mut self.db.ex().await.unwrap(),
            &Measurement::new(
                StationId::new(station.to_owned()),
                ObservationDate::parse_iso(date).unwrap(),
                prcp,
                tobs,
            ),
        )
        .await
        .unwrap();
    }
}
