// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Camera movement requests sent to the map client.

use geo::Rect;
use serde::{Deserialize, Serialize};

/// Lat/lng bounding box, serialized as Leaflet's `[[south, west], [north, east]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Convert a geo rectangle (x = longitude, y = latitude).
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        }
    }
}

impl From<[[f64; 2]; 2]> for LatLngBounds {
    fn from([[south, west], [north, east]]: [[f64; 2]; 2]) -> Self {
        Self::new(south, west, north, east)
    }
}

impl From<LatLngBounds> for [[f64; 2]; 2] {
    fn from(b: LatLngBounds) -> Self {
        [[b.south, b.west], [b.north, b.east]]
    }
}

/// Options for Leaflet's `flyToBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyOptions {
    pub padding_top_left: [u32; 2],
    /// Seconds
    pub duration: f64,
    pub ease_linearity: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_zoom: Option<u8>,
}

/// A camera move the client should perform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraRequest {
    /// Return to the initial regional view ("Show All")
    Reset {
        bounds: LatLngBounds,
        options: FlyOptions,
    },
    /// Zoom to one city's boundary
    FlyToCity {
        city: String,
        bounds: LatLngBounds,
        options: FlyOptions,
    },
}
