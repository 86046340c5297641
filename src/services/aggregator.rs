// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-time derivation of per-city policy totals and the city list.

use crate::models::city::{CityFeature, TOTAL_PROPERTY};
use crate::models::PolicyCatalog;
use geojson::FeatureCollection;
use serde_json::Value;

/// Outputs of the aggregation pass that are not stored on the features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Sorted city names (duplicates kept)
    pub cities: Vec<String>,
}

/// Annotate every feature with its `total` and build the city list.
pub fn aggregate(collection: &mut FeatureCollection, catalog: &PolicyCatalog) -> Aggregation {
    annotate_totals(collection, catalog);
    let cities = city_list(collection);

    tracing::info!(
        features = collection.features.len(),
        cities = cities.len(),
        policies = catalog.len(),
        "Aggregated policy totals"
    );

    Aggregation { cities }
}

/// Count adopted policies per feature and store the count as `total`.
pub fn annotate_totals(collection: &mut FeatureCollection, catalog: &PolicyCatalog) {
    for feature in &mut collection.features {
        let city = CityFeature::new(feature);
        let total = catalog
            .policies()
            .iter()
            .filter(|policy| city.has_adopted(&policy.code))
            .count();

        feature.set_property(TOTAL_PROPERTY, Value::from(total));
    }
}

/// Sorted projection of every feature's `city` property.
///
/// Features without a string `city` are skipped.
pub fn city_list(collection: &FeatureCollection) -> Vec<String> {
    let mut cities: Vec<String> = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.iter().enumerate() {
        match CityFeature::new(feature).city() {
            Some(city) => cities.push(city.to_string()),
            None => tracing::warn!(index, "Feature has no city name, leaving it out of the city list"),
        }
    }

    cities.sort();
    cities
}
