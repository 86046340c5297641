// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Policy dataset loading.
//!
//! The dataset is fetched exactly once at startup. A failed load is logged and
//! leaves the store empty, so the map stays in its loading state; there is no
//! retry and no timeout.

use crate::config::Config;
use crate::models::PolicyCatalog;
use crate::services::dataset::{DatasetError, DatasetStore, LoadedDataset};
use crate::AppState;
use geojson::{FeatureCollection, GeoJson};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Static JSON document served over HTTP
    Remote(String),
    /// Local file (development and tests)
    File(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses the policy dataset.
#[derive(Clone)]
pub struct DataLoader {
    http: reqwest::Client,
    source: DataSource,
}

impl DataLoader {
    pub fn new(source: DataSource) -> Self {
        Self {
            http: reqwest::Client::new(),
            source,
        }
    }

    /// Pick the source from configuration; a local path wins over the URL.
    pub fn from_config(config: &Config) -> Self {
        let source = match &config.data_path {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Remote(config.data_url.clone()),
        };
        Self::new(source)
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Fetch the raw feature collection.
    pub async fn fetch(&self) -> Result<FeatureCollection, LoadError> {
        let body = match &self.source {
            DataSource::Remote(url) => {
                let response = self
                    .http
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| LoadError::Http(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status(status.as_u16()));
                }

                response
                    .text()
                    .await
                    .map_err(|e| LoadError::Http(e.to_string()))?
            }
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::Io(e.to_string()))?,
        };

        parse_collection(&body)
    }

    /// Fetch the dataset and install it into the store.
    ///
    /// Failures are logged here; the caller does not need to act on them.
    pub async fn load_into(
        &self,
        store: &DatasetStore,
        catalog: &PolicyCatalog,
    ) -> Result<Arc<LoadedDataset>, LoadError> {
        tracing::info!(source = %self.source, "Fetching policy dataset");

        let result = match self.fetch().await {
            Ok(collection) => store.install(collection, catalog).map_err(LoadError::from),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::error!(
                source = %self.source,
                error = %e,
                "Failed to load policy dataset; map will stay in loading state"
            );
        }
        result
    }
}

/// Run the initial load once in the background.
pub fn spawn_initial_load(state: Arc<AppState>, loader: DataLoader) -> JoinHandle<()> {
    tokio::spawn(async move {
        // Errors are already logged by load_into
        let _ = loader.load_into(&state.dataset, &state.catalog).await;
    })
}

/// Parse a GeoJSON document that must be a FeatureCollection.
pub fn parse_collection(json_data: &str) -> Result<FeatureCollection, LoadError> {
    let geojson: GeoJson = json_data
        .parse()
        .map_err(|e: geojson::Error| LoadError::Parse(e.to_string()))?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(LoadError::NotFeatureCollection),
    }
}

/// Errors from dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Failed to read file: {0}")]
    Io(String),

    #[error("Failed to parse GeoJSON: {0}")]
    Parse(String),

    #[error("Dataset is not a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
