// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Baypolicy-Map: Bay Area anti-displacement policy map
//!
//! This crate serves a choropleth map of municipal anti-displacement housing
//! policies. It loads the published policy dataset once, derives per-city
//! policy counts, and exposes the map styles, selector menus, legend and
//! inventory for the embedded map client.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use models::{PolicyCatalog, StyleTable};
use services::DatasetStore;

/// Shared application state. Read-only apart from the one-time dataset
/// install; map focus travels with each request.
pub struct AppState {
    pub config: Config,
    pub catalog: PolicyCatalog,
    pub styles: StyleTable,
    pub dataset: DatasetStore,
}

impl AppState {
    /// State with the built-in catalog and colors and no dataset yet.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: PolicyCatalog::default(),
            styles: StyleTable::default(),
            dataset: DatasetStore::new(),
        }
    }
}
