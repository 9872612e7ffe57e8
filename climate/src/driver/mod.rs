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

//! Business logic for the service.

use climate_core::db::Db;
use std::sync::Arc;

mod precipitation;
mod stations;
mod stats;
#[cfg(test)]
pub(crate) mod testutils;
mod tobs;

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they open and close any
/// database sessions they need.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses to read the dataset.
    db: Arc<dyn Db + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>) -> Self {
        Self { db }
    }
}
