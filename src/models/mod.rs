// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod camera;
pub mod city;
pub mod focus;
pub mod policy;
pub mod style;

pub use camera::{CameraRequest, FlyOptions, LatLngBounds};
pub use city::CityFeature;
pub use focus::FocusState;
pub use policy::{FocusPolicy, PolicyCatalog, PolicyDefinition};
pub use style::{derive_style, FeatureStyle, StyleTable};
