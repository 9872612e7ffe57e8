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

//! Read-only REST service over a dataset of daily climate observations.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use climate_core::db::Db;
use log::{error, info};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

mod db;
mod driver;
use driver::Driver;
pub mod model;
mod rest;
use rest::app;

/// Waits until the process receives a request to terminate.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown request"),
        Err(e) => error!("Cannot listen for shutdown requests: {}", e),
    }
}

/// Instantiates all resources to serve the application on `bind_addr` with the dataset in `db`.
///
/// The layout of the dataset is validated before accepting any connections.  Returns once the
/// server has drained all connections after a shutdown request.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    db: Arc<dyn Db + Send + Sync>,
) -> Result<(), Box<dyn Error>> {
    db::validate_schema(&mut db.ex().await?).await?;

    let driver = Driver::new(db);
    let app = app(driver);

    let listener = tokio::net::TcpListener::bind(bind_addr.into()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_core::db::Executor;
    use climate_core::db::sqlite::run_schema;
    use climate_core::db::sqlite::testutils::setup;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_serve_rejects_incompatible_dataset() {
        let db = setup().await;
        match db.ex().await.unwrap() {
            Executor::Sqlite(mut ex) => run_schema(
                &mut ex,
                "CREATE TABLE measurement (station TEXT, date TEXT, tobs FLOAT);
                CREATE TABLE station (
                    station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT
                );",
            )
            .await
            .unwrap(),
        }
        let db: Arc<dyn Db + Send + Sync> = Arc::new(db);

        let err = serve((Ipv4Addr::LOCALHOST, 0), db.clone()).await.unwrap_err();
        assert_eq!("Data integrity error: Table measurement lacks column prcp", err.to_string());
        db.close().await;
    }
}
