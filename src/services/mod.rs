// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod dataset;
pub mod layers;
pub mod loader;
pub mod panels;
pub mod view;

pub use dataset::{DatasetStore, LoadedDataset};
pub use layers::{LayerHandle, LayerRegistry};
pub use loader::{DataLoader, DataSource, LoadError};
pub use view::{ViewState, ViewUpdate};
