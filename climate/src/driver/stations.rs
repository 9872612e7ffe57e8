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

//! Operations on stations.

use crate::db;
use crate::driver::Driver;
use crate::model::StationId;
use climate_core::driver::DriverResult;

impl Driver {
    /// Gets the identifiers of all stations that recorded measurements, in ascending order.
    pub(crate) async fn get_station_ids(self) -> DriverResult<Vec<StationId>> {
        let mut tx = self.db.begin().await?;
        let ids = db::get_station_ids(tx.ex()).await?;
        tx.commit().await?;
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use crate::driver::testutils::*;
    use crate::model::*;

    #[tokio::test]
    async fn test_get_station_ids() {
        let context = TestContext::setup().await;
        assert!(context.driver().get_station_ids().await.unwrap().is_empty());

        context.put("USC00519397", "2010-01-01", None, 65.0).await;
        context.put("USC00519281", "2010-01-01", None, 66.0).await;
        context.put("USC00519397", "2010-01-02", None, 67.0).await;

        assert_eq!(
            vec![StationId::from("USC00519281"), StationId::from("USC00519397")],
            context.driver().get_station_ids().await.unwrap()
        );
    }
}
