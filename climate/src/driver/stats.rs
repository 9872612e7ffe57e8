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

//! Operations to summarize temperatures over date ranges.

use crate::db;
use crate::driver::Driver;
use crate::model::{ObservationDate, TemperatureStats};
use climate_core::driver::DriverResult;

impl Driver {
    /// Computes the temperature statistics of all observations on or after `start`.
    pub(crate) async fn get_temperature_stats(
        self,
        start: ObservationDate,
    ) -> DriverResult<TemperatureStats> {
        let mut tx = self.db.begin().await?;
        let stats = db::get_temperature_stats(tx.ex(), start).await?;
        tx.commit().await?;
        Ok(stats)
    }

    /// Computes the temperature statistics of all observations between `start` and `end`, both
    /// inclusive.  A reversed range matches no observations.
    pub(crate) async fn get_temperature_stats_range(
        self,
        start: ObservationDate,
        end: ObservationDate,
    ) -> DriverResult<TemperatureStats> {
        let mut tx = self.db.begin().await?;
        let stats = db::get_temperature_stats_range(tx.ex(), start, end).await?;
        tx.commit().await?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use crate::driver::testutils::*;
    use crate::model::*;

    async fn setup_with_data() -> TestContext {
        let context = TestContext::setup().await;
        context.put("A", "2017-08-01", None, 60.0).await;
        context.put("B", "2017-08-01", None, 64.0).await;
        context.put("A", "2017-08-10", None, 70.0).await;
        context.put("A", "2017-08-23", None, 80.0).await;
        context
    }

    #[tokio::test]
    async fn test_get_temperature_stats() {
        let context = setup_with_data().await;

        assert_eq!(
            TemperatureStats::new(Some(60.0), Some(80.0), Some(68.5)),
            context
                .driver()
                .get_temperature_stats(ObservationDate::from("2017-08-01"))
                .await
                .unwrap()
        );
        assert_eq!(
            TemperatureStats::new(Some(70.0), Some(80.0), Some(75.0)),
            context
                .driver()
                .get_temperature_stats(ObservationDate::from("2017-08-02"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_temperature_stats_after_dataset() {
        let context = setup_with_data().await;

        assert_eq!(
            TemperatureStats::new(None, None, None),
            context
                .driver()
                .get_temperature_stats(ObservationDate::from("2030-01-01"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_temperature_stats_range() {
        let context = setup_with_data().await;

        assert_eq!(
            TemperatureStats::new(Some(60.0), Some(70.0), Some(194.0 / 3.0)),
            context
                .driver()
                .get_temperature_stats_range(
                    ObservationDate::from("2017-08-01"),
                    ObservationDate::from("2017-08-10")
                )
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_temperature_stats_range_reversed() {
        let context = setup_with_data().await;

        assert_eq!(
            TemperatureStats::new(None, None, None),
            context
                .driver()
                .get_temperature_stats_range(
                    ObservationDate::from("2017-08-23"),
                    ObservationDate::from("2017-08-01")
                )
                .await
                .unwrap()
        );
    }
}
