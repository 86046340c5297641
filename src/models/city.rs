// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only view over a city boundary feature.

use crate::models::policy::is_adopted;
use geojson::Feature;
use serde_json::Value;

/// Property holding the city name.
pub const CITY_PROPERTY: &str = "city";

/// Property written by the aggregator.
pub const TOTAL_PROPERTY: &str = "total";

/// Borrowed accessor for a city feature's properties.
///
/// Only string values carry a policy status; anything else reads as undefined.
#[derive(Debug, Clone, Copy)]
pub struct CityFeature<'a> {
    feature: &'a Feature,
}

impl<'a> CityFeature<'a> {
    pub fn new(feature: &'a Feature) -> Self {
        Self { feature }
    }

    pub fn feature(&self) -> &'a Feature {
        self.feature
    }

    /// String-valued property; `null`, numbers and other types read as undefined.
    fn text(&self, key: &str) -> Option<&'a str> {
        match self.feature.property(key)? {
            Value::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// City name, if the feature has one.
    pub fn city(&self) -> Option<&'a str> {
        self.text(CITY_PROPERTY)
    }

    /// Raw status text for a policy code.
    pub fn status(&self, code: &str) -> Option<&'a str> {
        self.text(code)
    }

    /// Whether the city has adopted the given policy.
    pub fn has_adopted(&self, code: &str) -> bool {
        is_adopted(self.status(code))
    }

    /// Aggregated policy count; 0 until the aggregator has run.
    pub fn total(&self) -> u32 {
        match self.feature.property(TOTAL_PROPERTY) {
            Some(Value::Number(n)) => n
                .as_u64()
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Whether this feature is the focused city.
    pub fn is_city(&self, name: Option<&str>) -> bool {
        match (self.city(), name) {
            (Some(city), Some(name)) => city == name,
            _ => false,
        }
    }
}
