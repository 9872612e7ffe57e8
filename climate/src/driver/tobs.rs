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

//! Operations on the temperature observations of individual stations.

use crate::db;
use crate::driver::Driver;
use crate::model::StationTemperatures;
use climate_core::db::DbError;
use climate_core::driver::{DriverError, DriverResult};
use log::debug;

impl Driver {
    /// Gets the last year of temperature observations of the station with the most
    /// measurements.
    ///
    /// The last year is anchored at the most recent observation of that station.
    pub(crate) async fn get_busiest_station_temperatures(
        self,
    ) -> DriverResult<StationTemperatures> {
        let mut tx = self.db.begin().await?;

        let station = match db::get_busiest_station(tx.ex()).await {
            Ok(station) => station,
            Err(DbError::NotFound) => {
                return Err(DriverError::NotFound("No measurements available".to_owned()));
            }
            Err(e) => return Err(e.into()),
        };
        let max_date = db::get_max_date_for_station(tx.ex(), &station).await?;
        let since = max_date.year_before();
        debug!("Querying temperatures of {} from {} to {}", station.as_str(), since, max_date);
        let readings = db::get_temperature_series(tx.ex(), &station, since).await?;

        tx.commit().await?;
        Ok(StationTemperatures::new(station, readings))
    }
}

#[cfg(test)]
mod tests {
    use crate::driver::testutils::*;
    use crate::model::*;
    use climate_core::driver::DriverError;

    #[tokio::test]
    async fn test_get_busiest_station_temperatures() {
        let context = TestContext::setup().await;
        context.put("BUSY", "2016-01-01", None, 60.0).await;
        context.put("BUSY", "2016-12-01", None, 70.0).await;
        context.put("BUSY", "2017-06-01", None, 75.5).await;
        context.put("BUSY", "2017-08-18", None, 80.0).await;
        context.put("QUIET", "2017-08-23", None, 90.0).await;

        let temperatures = context.driver().get_busiest_station_temperatures().await.unwrap();
        assert_eq!(&StationId::from("BUSY"), temperatures.station());
        assert_eq!(
            vec![
                TemperatureReading::new(ObservationDate::from("2016-12-01"), 70.0),
                TemperatureReading::new(ObservationDate::from("2017-06-01"), 75.5),
                TemperatureReading::new(ObservationDate::from("2017-08-18"), 80.0),
            ],
            temperatures.take_readings()
        );
    }

    #[tokio::test]
    async fn test_get_busiest_station_temperatures_includes_lower_bound() {
        let context = TestContext::setup().await;
        context.put("A", "2016-08-22", None, 1.0).await;
        context.put("A", "2016-08-23", None, 2.0).await;
        context.put("A", "2017-08-23", None, 3.0).await;

        let temperatures = context.driver().get_busiest_station_temperatures().await.unwrap();
        assert_eq!(
            vec![
                TemperatureReading::new(ObservationDate::from("2016-08-23"), 2.0),
                TemperatureReading::new(ObservationDate::from("2017-08-23"), 3.0),
            ],
            temperatures.take_readings()
        );
    }

    #[tokio::test]
    async fn test_get_busiest_station_temperatures_empty_dataset() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("No measurements available".to_owned()),
            context.driver().get_busiest_station_temperatures().await.unwrap_err()
        );
    }
}
