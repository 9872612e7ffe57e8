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

//! Operations on precipitation data.

use crate::db;
use crate::driver::Driver;
use crate::model::DailyPrecipitation;
use climate_core::db::DbError;
use climate_core::driver::{DriverError, DriverResult};
use log::debug;

impl Driver {
    /// Gets the total precipitation per day over the last year of the dataset.
    ///
    /// The last year is anchored at the most recent observation across all stations, not at
    /// the current date.
    pub(crate) async fn get_last_year_precipitation(self) -> DriverResult<Vec<DailyPrecipitation>> {
        let mut tx = self.db.begin().await?;
        let max_date = match db::get_max_date(tx.ex()).await {
            Ok(date) => date,
            Err(DbError::NotFound) => {
                return Err(DriverError::NotFound("No measurements available".to_owned()));
            }
            Err(e) => return Err(e.into()),
        };
        let since = max_date.year_before();
        debug!("Querying precipitation from {} to {}", since, max_date);
        let totals = db::get_precipitation_since(tx.ex(), since).await?;
        tx.commit().await?;
        Ok(totals)
    }
}
