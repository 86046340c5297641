// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The loaded policy dataset and its derived data.
//!
//! The store starts empty ("loading") and accepts exactly one dataset. The
//! aggregation pass runs as part of that single install, so totals and the
//! city list are never recomputed.

use crate::error::AppError;
use crate::models::{CityFeature, PolicyCatalog};
use crate::services::aggregator;
use crate::services::layers::LayerRegistry;
use chrono::{DateTime, Utc};
use geojson::{Feature, FeatureCollection};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Policy dataset with derived totals, city list and layer registry.
#[derive(Debug)]
pub struct LoadedDataset {
    collection: FeatureCollection,
    cities: Vec<String>,
    layers: LayerRegistry,
    loaded_at: DateTime<Utc>,
}

impl LoadedDataset {
    /// Run the derivation pass over a freshly loaded collection.
    pub fn derive(mut collection: FeatureCollection, catalog: &PolicyCatalog) -> Self {
        let aggregation = aggregator::aggregate(&mut collection, catalog);
        let layers = LayerRegistry::build(&collection);

        Self {
            collection,
            cities: aggregation.cities,
            layers,
            loaded_at: Utc::now(),
        }
    }

    /// Features with `total` set.
    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    pub fn features(&self) -> impl Iterator<Item = CityFeature<'_>> {
        self.collection.features.iter().map(CityFeature::new)
    }

    /// Sorted city names.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// First feature for a city.
    pub fn find_city(&self, city: &str) -> Option<CityFeature<'_>> {
        self.layers
            .get(city)
            .and_then(|handle| self.collection.features.get(handle.index))
            .map(CityFeature::new)
    }

    pub fn feature(&self, index: usize) -> Option<&Feature> {
        self.collection.features.get(index)
    }
}

/// Write-once holder for the loaded dataset.
#[derive(Debug, Default)]
pub struct DatasetStore {
    cell: OnceCell<Arc<LoadedDataset>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive and store a dataset. Fails if one is already installed.
    pub fn install(
        &self,
        collection: FeatureCollection,
        catalog: &PolicyCatalog,
    ) -> Result<Arc<LoadedDataset>, DatasetError> {
        if self.cell.initialized() {
            return Err(DatasetError::AlreadyLoaded);
        }

        let dataset = Arc::new(LoadedDataset::derive(collection, catalog));
        self.cell
            .set(dataset.clone())
            .map_err(|_| DatasetError::AlreadyLoaded)?;

        tracing::info!(
            features = dataset.collection().features.len(),
            cities = dataset.cities().len(),
            "Policy dataset installed"
        );
        Ok(dataset)
    }

    /// The dataset, if loading has finished.
    pub fn get(&self) -> Option<Arc<LoadedDataset>> {
        self.cell.get().cloned()
    }

    /// The dataset, or [`AppError::Loading`] while it is still unset.
    pub fn require(&self) -> Result<Arc<LoadedDataset>, AppError> {
        self.get().ok_or(AppError::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

/// Errors from dataset installation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Policy dataset is already loaded")]
    AlreadyLoaded,
}
