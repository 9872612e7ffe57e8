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

//! Database abstraction in terms of the operations needed by the server.
//!
//! The dataset is never modified by the service: every function in here is a pure read.  Dates
//! are stored as `YYYY-MM-DD` strings, which sort lexicographically in chronological order, so
//! all range filters bind dates in that same format.

use crate::model::{
    DailyPrecipitation, ObservationDate, StationId, TemperatureReading, TemperatureStats,
};
use climate_core::db::sqlite::map_sqlx_error;
use climate_core::db::{DbError, DbResult, Executor};
use futures::TryStreamExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use std::collections::BTreeSet;

#[cfg(test)]
pub(crate) mod testutils;

/// Tables and columns that the queries in this module rely on.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("measurement", &["station", "date", "prcp", "tobs"]),
    ("station", &["station", "name", "latitude", "longitude", "elevation"]),
];

/// Extracts a date stored in `YYYY-MM-DD` format from the `column` of `row`.
fn get_date(row: &SqliteRow, column: &str) -> DbResult<ObservationDate> {
    let raw: String = row.try_get(column).map_err(map_sqlx_error)?;
    Ok(ObservationDate::parse_iso(&raw)?)
}

impl TryFrom<SqliteRow> for DailyPrecipitation {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let date = get_date(&row, "date")?;
        let total: Option<f64> = row.try_get("total").map_err(map_sqlx_error)?;
        Ok(DailyPrecipitation::new(date, total))
    }
}

impl TryFrom<SqliteRow> for TemperatureReading {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let date = get_date(&row, "date")?;
        let tobs: f64 = row.try_get("tobs").map_err(map_sqlx_error)?;
        Ok(TemperatureReading::new(date, tobs))
    }
}

impl TryFrom<SqliteRow> for TemperatureStats {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let min: Option<f64> = row.try_get("min_tobs").map_err(map_sqlx_error)?;
        let max: Option<f64> = row.try_get("max_tobs").map_err(map_sqlx_error)?;
        let avg: Option<f64> = row.try_get("avg_tobs").map_err(map_sqlx_error)?;
        Ok(TemperatureStats::new(min, max, avg))
    }
}

/// Verifies that the database contains the tables and columns this module queries.
pub(crate) async fn validate_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => {
            for (table, columns) in REQUIRED_COLUMNS {
                let query_str = "SELECT name FROM pragma_table_info(?)";
                let mut rows = sqlx::query(query_str).bind(*table).fetch(ex.conn());

                let mut present = BTreeSet::default();
                while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                    let name: String = row.try_get("name").map_err(map_sqlx_error)?;
                    present.insert(name);
                }

                if present.is_empty() {
                    return Err(DbError::DataIntegrityError(format!(
                        "Table {} does not exist",
                        table
                    )));
                }
                for column in columns.iter() {
                    if !present.contains(*column) {
                        return Err(DbError::DataIntegrityError(format!(
                            "Table {} lacks column {}",
                            table, column
                        )));
                    }
                }
            }
            Ok(())
        }
    }
}

/// Gets the most recent observation date across all stations.
pub(crate) async fn get_max_date(ex: &mut Executor) -> DbResult<ObservationDate> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT MAX(date) AS max_date FROM measurement";
            let row = sqlx::query(query_str).fetch_one(ex.conn()).await.map_err(map_sqlx_error)?;
            let raw: Option<String> = row.try_get("max_date").map_err(map_sqlx_error)?;
            match raw {
                Some(raw) => Ok(ObservationDate::parse_iso(&raw)?),
                None => Err(DbError::NotFound),
            }
        }
    }
}

/// Gets the total precipitation per day for all days on or after `since`, in ascending order.
pub(crate) async fn get_precipitation_since(
    ex: &mut Executor,
    since: ObservationDate,
) -> DbResult<Vec<DailyPrecipitation>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT date, CAST(SUM(prcp) AS REAL) AS total
                FROM measurement
                WHERE date >= ?
                GROUP BY date
                ORDER BY date";
            let mut rows = sqlx::query(query_str).bind(since.to_string()).fetch(ex.conn());

            let mut totals = vec![];
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                totals.push(DailyPrecipitation::try_from(row)?);
            }
            Ok(totals)
        }
    }
}

/// Gets the identifiers of all stations that have recorded at least one measurement.
pub(crate) async fn get_station_ids(ex: &mut Executor) -> DbResult<Vec<StationId>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT DISTINCT station FROM measurement ORDER BY station";
            let mut rows = sqlx::query(query_str).fetch(ex.conn());

            let mut ids = vec![];
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                let id: String = row.try_get("station").map_err(map_sqlx_error)?;
                ids.push(StationId::new(id));
            }
            Ok(ids)
        }
    }
}

/// Gets the station with the largest number of measurements.
///
/// Ties are resolved in favor of the lowest station identifier.
pub(crate) async fn get_busiest_station(ex: &mut Executor) -> DbResult<StationId> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT station, COUNT(*) AS observations
                FROM measurement
                GROUP BY station
                ORDER BY observations DESC, station ASC
                LIMIT 1";
            let row = sqlx::query(query_str).fetch_one(ex.conn()).await.map_err(map_sqlx_error)?;
            let id: String = row.try_get("station").map_err(map_sqlx_error)?;
            Ok(StationId::new(id))
        }
    }
}

/// Gets the most recent observation date of `station`.
pub(crate) async fn get_max_date_for_station(
    ex: &mut Executor,
    station: &StationId,
) -> DbResult<ObservationDate> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT MAX(date) AS max_date FROM measurement WHERE station = ?";
            let row = sqlx::query(query_str)
                .bind(station.as_str())
                .fetch_one(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            let raw: Option<String> = row.try_get("max_date").map_err(map_sqlx_error)?;
            match raw {
                Some(raw) => Ok(ObservationDate::parse_iso(&raw)?),
                None => Err(DbError::NotFound),
            }
        }
    }
}

/// Gets the temperature observations of `station` on or after `since`, in ascending order.
pub(crate) async fn get_temperature_series(
    ex: &mut Executor,
    station: &StationId,
    since: ObservationDate,
) -> DbResult<Vec<TemperatureReading>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT date, CAST(tobs AS REAL) AS tobs
                FROM measurement
                WHERE station = ? AND date >= ?
                ORDER BY date";
            let mut rows = sqlx::query(query_str)
                .bind(station.as_str())
                .bind(since.to_string())
                .fetch(ex.conn());

            let mut readings = vec![];
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                readings.push(TemperatureReading::try_from(row)?);
            }
            Ok(readings)
        }
    }
}

/// Computes the temperature statistics of all observations on or after `start`.
pub(crate) async fn get_temperature_stats(
    ex: &mut Executor,
    start: ObservationDate,
) -> DbResult<TemperatureStats> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT
                    CAST(MIN(tobs) AS REAL) AS min_tobs,
                    CAST(MAX(tobs) AS REAL) AS max_tobs,
                    AVG(tobs) AS avg_tobs
                FROM measurement
                WHERE date >= ?";
            let row = sqlx::query(query_str)
                .bind(start.to_string())
                .fetch_one(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            TemperatureStats::try_from(row)
        }
    }
}

/// Computes the temperature statistics of all observations between `start` and `end`, both
/// inclusive.
pub(crate) async fn get_temperature_stats_range(
    ex: &mut Executor,
    start: ObservationDate,
    end: ObservationDate,
) -> DbResult<TemperatureStats> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT
                    CAST(MIN(tobs) AS REAL) AS min_tobs,
                    CAST(MAX(tobs) AS REAL) AS max_tobs,
                    AVG(tobs) AS avg_tobs
                FROM measurement
                WHERE date >= ? AND date <= ?";
            let row = sqlx::query(query_str)
                .bind(start.to_string())
                .bind(end.to_string())
                .fetch_one(ex.conn())
                .await
                .map_err(map_sqlx_error)?;
            TemperatureStats::try_from(row)
        }
    }
}
