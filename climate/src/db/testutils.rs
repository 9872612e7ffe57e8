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

//! Test utilities for the database layer.

use crate::model::{Measurement, Station};
use climate_core::db::sqlite::{map_sqlx_error, run_schema};
use climate_core::db::{DbResult, Executor};

/// Creates the tables of the dataset.
pub(crate) async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => run_schema(ex, include_str!("schema.sql")).await,
    }
}

/// Inserts a single `measurement` into the dataset.
pub(crate) async fn put_measurement(ex: &mut Executor, measurement: &Measurement) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str =
                "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)";
            sqlx::query(query_str)
                .bind(measurement.station().as_str())
                .bind(measurement.date().to_string())
                .bind(*measurement.prcp())
                .bind(*measurement.tobs())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            Ok(())
        }
    }
}

/// Inserts a single `station` into the dataset.
pub(crate) async fn put_station(ex: &mut Executor, station: &Station) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO station (station, name, latitude, longitude, elevation)
                VALUES (?, ?, ?, ?, ?)";
            sqlx::query(query_str)
                .bind(station.station().as_str())
                .bind(station.name().as_str())
                .bind(*station.latitude())
                .bind(*station.longitude())
                .bind(*station.elevation())
                .execute(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            Ok(())
        }
    }
}
