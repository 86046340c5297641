// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Map presentation constants (initial view, tile sources, camera timing) live
//! in [`MapSettings`] and are passed to the components that need them.

use crate::models::camera::{FlyOptions, LatLngBounds};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Published policy dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/cci-ucb/baypolicydata/master/mapData.json";

/// Room left for the floating controls on the left edge.
const PADDING_TOP_LEFT: [u32; 2] = [250, 0];
/// Keeps small boundaries from zooming in too far.
const CITY_MAX_ZOOM: u8 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to fetch the policy dataset
    pub data_url: String,
    /// Local dataset file; takes precedence over `data_url` when set
    pub data_path: Option<PathBuf>,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Map presentation settings
    pub map: MapSettings,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            data_path: None,
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            map: MapSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            data_url: env::var("DATA_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_DATA_URL.to_string()),
            data_path: env::var("DATA_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
            map: MapSettings::default(),
        })
    }
}

/// Initial view, tile layers and camera timings for the map client.
#[derive(Debug, Clone, Serialize)]
pub struct MapSettings {
    /// Initial map center as `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    /// Regional extent used by "Show All"
    pub initial_bounds: LatLngBounds,
    pub basemap_url: String,
    pub labels_url: String,
    pub attribution: String,
    /// Camera options for returning to `initial_bounds`
    pub reset_camera: FlyOptions,
    /// Camera options for zooming to a selected city
    pub city_camera: FlyOptions,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: [37.7, -122.6],
            zoom: 9,
            initial_bounds: LatLngBounds::new(36.923548, -123.895569, 38.328730, -120.470581),
            basemap_url: "https://{s}.basemaps.cartocdn.com/light_nolabels/{z}/{x}/{y}{r}.png"
                .to_string(),
            labels_url: "https://{s}.basemaps.cartocdn.com/light_only_labels/{z}/{x}/{y}{r}.png"
                .to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>".to_string(),
            reset_camera: FlyOptions {
                padding_top_left: PADDING_TOP_LEFT,
                duration: 0.5,
                ease_linearity: 0.5,
                max_zoom: None,
            },
            city_camera: FlyOptions {
                padding_top_left: PADDING_TOP_LEFT,
                duration: 0.25,
                ease_linearity: 0.5,
                max_zoom: Some(CITY_MAX_ZOOM),
            },
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::set_var("DATA_URL", "http://localhost:9999/mapData.json");
        env::set_var("PORT", "3000");
        env::remove_var("DATA_PATH");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.data_url, "http://localhost:9999/mapData.json");
        assert_eq!(config.port, 3000);
        assert!(config.data_path.is_none());

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        env::remove_var("PORT");
        env::remove_var("DATA_URL");
    }

    #[test]
    fn test_default_map_settings() {
        let map = MapSettings::default();
        assert_eq!(map.zoom, 9);
        assert_eq!(map.city_camera.max_zoom, Some(10));
        assert_eq!(map.reset_camera.max_zoom, None);
        assert_eq!(map.reset_camera.duration, 0.5);
        assert_eq!(map.city_camera.duration, 0.25);
    }
}
