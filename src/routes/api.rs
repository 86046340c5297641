// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API consumed by the map client.

use crate::config::MapSettings;
use crate::error::{AppError, Result};
use crate::models::{
    derive_style, CameraRequest, FeatureStyle, FocusPolicy, FocusState, PolicyCatalog,
    PolicyDefinition,
};
use crate::services::panels::{self, ViewSnapshot};
use crate::services::{view, LoadedDataset, ViewState, ViewUpdate};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;
use validator::Validate;

/// API routes. Stateless apart from the loaded dataset.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/config", get(get_config))
        .route("/api/status", get(get_status))
        .route("/api/policies", get(get_policies))
        .route("/api/data", get(get_data))
        .route("/api/styles", get(get_styles))
        .route("/api/view", get(get_view))
        .route("/api/focus/policy", post(select_policy))
        .route("/api/focus/city", post(select_city))
        .route("/api/focus/click", post(click_feature))
}

// ─── Settings & Status ───────────────────────────────────────

/// Map settings for the client (tiles, initial view).
async fn get_config(State(state): State<Arc<AppState>>) -> Json<MapSettings> {
    Json(state.config.map.clone())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub state: LoadState,
    pub feature_count: usize,
    pub city_count: usize,
    pub loaded_at: Option<String>,
}

/// Loading state of the policy dataset.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let response = match state.dataset.get() {
        Some(dataset) => StatusResponse {
            state: LoadState::Ready,
            feature_count: dataset.collection().features.len(),
            city_count: dataset.cities().len(),
            loaded_at: Some(format_utc_rfc3339(dataset.loaded_at())),
        },
        None => StatusResponse {
            state: LoadState::Loading,
            feature_count: 0,
            city_count: 0,
            loaded_at: None,
        },
    };
    Json(response)
}

/// The policy catalog, in display order.
async fn get_policies(State(state): State<Arc<AppState>>) -> Json<Vec<PolicyDefinition>> {
    Json(state.catalog.policies().to_vec())
}

// ─── Map Data ────────────────────────────────────────────────

/// Serializes the loaded collection without copying it.
pub struct CollectionBody(Arc<LoadedDataset>);

impl Serialize for CollectionBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.collection().serialize(serializer)
    }
}

/// City boundaries with their aggregated `total`.
async fn get_data(State(state): State<Arc<AppState>>) -> Result<Json<CollectionBody>> {
    let dataset = state.dataset.require()?;
    Ok(Json(CollectionBody(dataset)))
}

/// A client's current focus, as sent back with every request.
///
/// Used both as query parameters (`?focus_city=..&focus_policy=..`) and as the
/// `focus` object of interaction bodies. Missing fields mean the initial focus.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FocusParams {
    #[validate(length(min = 1, max = 100))]
    pub focus_city: Option<String>,
    /// "total" or a catalog code
    #[validate(length(min = 1, max = 32))]
    pub focus_policy: Option<String>,
}

impl FocusParams {
    /// Check against the catalog and build the focus.
    fn resolve(self, catalog: &PolicyCatalog) -> Result<FocusState> {
        self.validate()?;
        let policy = match self.focus_policy.as_deref() {
            Some(code) => resolve_policy(catalog, code)?,
            None => FocusPolicy::Total,
        };
        Ok(FocusState::new(self.focus_city, policy))
    }
}

fn resolve_policy(catalog: &PolicyCatalog, code: &str) -> Result<FocusPolicy> {
    catalog
        .resolve(code)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown policy code: {}", code)))
}

/// Style for every feature under the given focus, in collection order.
///
/// Entry `i` belongs to feature `i` of `/api/data`, including features the
/// client cannot draw.
async fn get_styles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FocusParams>,
) -> Result<Json<Vec<FeatureStyle>>> {
    let dataset = state.dataset.require()?;
    let focus = params.resolve(&state.catalog)?;

    let styles = dataset
        .features()
        .map(|feature| derive_style(feature, &focus, &state.styles))
        .collect();
    Ok(Json(styles))
}

/// Menus, legend and inventory for the given focus.
async fn get_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FocusParams>,
) -> Result<Json<ViewSnapshot>> {
    let dataset = state.dataset.require()?;
    let focus = params.resolve(&state.catalog)?;
    Ok(Json(panels::snapshot(
        &state.catalog,
        &state.styles,
        &dataset,
        focus,
    )))
}

// ─── Interactions ────────────────────────────────────────────

/// Result of an interaction.
#[derive(Serialize)]
pub struct ViewUpdateResponse {
    pub view: ViewSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraRequest>,
    /// Collection index of the feature to bring to the front
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise: Option<usize>,
}

fn respond(state: &AppState, dataset: &LoadedDataset, update: ViewUpdate) -> Json<ViewUpdateResponse> {
    Json(ViewUpdateResponse {
        view: panels::snapshot(&state.catalog, &state.styles, dataset, update.focus),
        camera: update.camera,
        raise: update.raise,
    })
}

#[derive(Deserialize, Validate)]
struct PolicyRequest {
    #[serde(default)]
    #[validate(nested)]
    focus: FocusParams,
    /// "total" or a catalog code
    #[validate(length(min = 1, max = 32))]
    policy: String,
}

/// Policy menu selection.
async fn select_policy(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PolicyRequest>,
) -> Result<Json<ViewUpdateResponse>> {
    payload.validate()?;
    let dataset = state.dataset.require()?;

    let policy = resolve_policy(&state.catalog, &payload.policy)?;
    let mut view = ViewState::new(payload.focus.resolve(&state.catalog)?);

    let update = view::select_policy(&mut view, policy);
    Ok(respond(&state, &dataset, update))
}

#[derive(Deserialize, Validate)]
struct CityRequest {
    #[serde(default)]
    #[validate(nested)]
    focus: FocusParams,
    /// City to zoom to; `null` means "Show All"
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    city: Option<String>,
}

/// City menu selection.
async fn select_city(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CityRequest>,
) -> Result<Json<ViewUpdateResponse>> {
    payload.validate()?;
    let dataset = state.dataset.require()?;
    let mut view = ViewState::new(payload.focus.resolve(&state.catalog)?);

    let update = match payload.city.as_deref() {
        Some(city) => view::zoom_to_city(&mut view, &dataset, &state.config.map, city)?,
        None => view::show_all(&mut view, &state.config.map),
    };
    Ok(respond(&state, &dataset, update))
}

#[derive(Deserialize, Validate)]
struct ClickRequest {
    #[serde(default)]
    #[validate(nested)]
    focus: FocusParams,
    #[validate(length(min = 1, max = 100))]
    city: String,
    /// Collection index of the clicked boundary
    #[serde(default)]
    index: Option<usize>,
}

/// Click on a city boundary.
async fn click_feature(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<ViewUpdateResponse>> {
    payload.validate()?;
    let dataset = state.dataset.require()?;
    let mut view = ViewState::new(payload.focus.resolve(&state.catalog)?);

    tracing::debug!(city = %payload.city, index = ?payload.index, "City boundary clicked");
    let update = view::click_feature(&mut view, &dataset, &payload.city, payload.index)?;
    Ok(respond(&state, &dataset, update))
}
