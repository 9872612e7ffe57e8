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

//! Entry point to the climate service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use climate_api::serve;
use climate_core::db::Db;
use climate_core::db::sqlite::{SqliteDb, SqliteOptions};
use climate_core::env::get_optional_var;
use log::error;
use std::error::Error;
use std::net::Ipv4Addr;
use std::process;
use std::sync::Arc;

/// Port to listen on when not configured.
const DEFAULT_PORT: u16 = 5000;

/// Gathers the configuration from the environment and runs the server until shutdown.
async fn run() -> Result<(), Box<dyn Error>> {
    let port = get_optional_var::<u16>("CLIMATE", "PORT")?.unwrap_or(DEFAULT_PORT);
    let addr = (Ipv4Addr::LOCALHOST, port);

    let db_opts = SqliteOptions::from_env("CLIMATE_DB")?;
    let db = Arc::new(SqliteDb::connect_read_only(&db_opts).await?);

    let result = serve(addr, db.clone()).await;
    db.close().await;
    result
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("{}", e);
        process::exit(1);
    }
}
