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

//! Test utilities for the business layer.

use crate::db::testutils::{init_schema, put_measurement};
use crate::driver::Driver;
use crate::model::*;
use climate_core::db::Db;
use climate_core::db::sqlite::testutils::setup;
use std::sync::Arc;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    driver: Driver,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::new(setup().await);
        init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Records a measurement taken by `station` on `date`, which is in `YYYY-MM-DD` format.
    pub(crate) async fn put(
        &self,
        station: &'static str,
        date: &'static str,
        prcp: Option<f64>,
        tobs: f64,
    ) {
        put_measurement(
            &mut self.db.ex().await.unwrap(),
            &Measurement::new(StationId::from(station), ObservationDate::from(date), prcp, tobs),
        )
        .await
        .unwrap();
    }
}
