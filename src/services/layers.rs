// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registry of rendered city layers, keyed by city name.
//!
//! Camera moves and z-order hints go through this registry rather than
//! searching the renderer's own layer list.

use crate::models::camera::LatLngBounds;
use crate::models::CityFeature;
use geo::BoundingRect;
use geojson::FeatureCollection;
use std::collections::HashMap;

/// Handle to one city's rendered boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerHandle {
    /// Position of the feature in the collection (and in `/api/styles`)
    pub index: usize,
    /// Boundary extent; `None` when the feature has no usable geometry
    pub bounds: Option<LatLngBounds>,
}

#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    layers: HashMap<String, LayerHandle>,
}

impl LayerRegistry {
    /// Register one layer per named feature. The first feature wins when a
    /// city name repeats.
    pub fn build(collection: &FeatureCollection) -> Self {
        let mut layers = HashMap::with_capacity(collection.features.len());

        for (index, feature) in collection.features.iter().enumerate() {
            let Some(city) = CityFeature::new(feature).city() else {
                continue;
            };
            if layers.contains_key(city) {
                tracing::warn!(city, index, "Duplicate city feature, keeping the first layer");
                continue;
            }

            let bounds = feature_bounds(feature);
            if bounds.is_none() {
                tracing::warn!(city, index, "City feature has no usable geometry");
            }
            layers.insert(city.to_string(), LayerHandle { index, bounds });
        }

        Self { layers }
    }

    pub fn get(&self, city: &str) -> Option<&LayerHandle> {
        self.layers.get(city)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.layers.contains_key(city)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Lat/lng extent of a feature's geometry.
fn feature_bounds(feature: &geojson::Feature) -> Option<LatLngBounds> {
    let geometry = feature.geometry.as_ref()?;
    let geometry: geo::Geometry<f64> = geometry.value.clone().try_into().ok()?;
    geometry.bounding_rect().map(LatLngBounds::from_rect)
}
