// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Focus state and the user interactions that change it.
//!
//! The server keeps no focus of its own. Each client sends its current focus
//! with every request, the interaction derives the next one, and the client
//! stores the result. Two browsers never see each other's selections.

use crate::config::MapSettings;
use crate::error::AppError;
use crate::models::{CameraRequest, CityFeature, FocusPolicy, FocusState};
use crate::services::dataset::LoadedDataset;

/// One client's map focus for the duration of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    focus: FocusState,
}

impl ViewState {
    pub fn new(focus: FocusState) -> Self {
        Self { focus }
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn into_focus(self) -> FocusState {
        self.focus
    }

    /// Replace the focus. Calling this twice with the same arguments is a no-op
    /// the second time.
    pub fn set_focus(&mut self, city: Option<String>, policy: FocusPolicy) -> &FocusState {
        self.update(|_| FocusState::new(city, policy))
    }

    /// Derive the next focus from the current one.
    pub fn update<F>(&mut self, f: F) -> &FocusState
    where
        F: FnOnce(&FocusState) -> FocusState,
    {
        let next = f(&self.focus);
        if self.focus != next {
            tracing::debug!(
                city = ?next.focus_city,
                policy = %next.focus_policy,
                "Focus changed"
            );
            self.focus = next;
        }
        &self.focus
    }
}

/// Result of an interaction, returned to the map client.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    pub focus: FocusState,
    /// Camera move to perform, if any
    pub camera: Option<CameraRequest>,
    /// Collection index of the feature to bring to the front, if any
    pub raise: Option<usize>,
}

/// Policy menu selection: recolor by `policy`, keep the focused city.
pub fn select_policy(view: &mut ViewState, policy: FocusPolicy) -> ViewUpdate {
    let focus = view
        .update(|current| FocusState::new(current.focus_city.clone(), policy))
        .clone();

    ViewUpdate {
        focus,
        camera: None,
        raise: None,
    }
}

/// "Show All": clear the focused city and return to the regional view.
pub fn show_all(view: &mut ViewState, map: &MapSettings) -> ViewUpdate {
    let focus = view
        .update(|current| FocusState::new(None, current.focus_policy.clone()))
        .clone();

    ViewUpdate {
        focus,
        camera: Some(CameraRequest::Reset {
            bounds: map.initial_bounds,
            options: map.reset_camera,
        }),
        raise: None,
    }
}

/// City menu selection: focus the city and fly to its boundary.
///
/// The city must have a rendered layer with bounds; the focus is left alone
/// otherwise.
pub fn zoom_to_city(
    view: &mut ViewState,
    dataset: &LoadedDataset,
    map: &MapSettings,
    city: &str,
) -> Result<ViewUpdate, AppError> {
    let handle = dataset
        .layers()
        .get(city)
        .ok_or_else(|| AppError::NotFound(format!("City {} has no map layer", city)))?;
    let bounds = handle
        .bounds
        .ok_or_else(|| AppError::NotFound(format!("City {} has no boundary", city)))?;

    let focus = view
        .update(|current| FocusState::new(Some(city.to_string()), current.focus_policy.clone()))
        .clone();

    tracing::info!(city, "Zooming to city");

    Ok(ViewUpdate {
        focus,
        camera: Some(CameraRequest::FlyToCity {
            city: city.to_string(),
            bounds,
            options: map.city_camera,
        }),
        raise: Some(handle.index),
    })
}

/// Click on a city boundary: focus it without moving the camera.
///
/// `index` is the clicked feature's position in the collection. It is the
/// layer raised in the response, so a click on a repeated city name raises
/// the boundary that was actually clicked. Without it the city's registered
/// layer is raised.
pub fn click_feature(
    view: &mut ViewState,
    dataset: &LoadedDataset,
    city: &str,
    index: Option<usize>,
) -> Result<ViewUpdate, AppError> {
    let raise = match index {
        Some(index) => {
            let feature = dataset
                .feature(index)
                .ok_or_else(|| AppError::NotFound(format!("No feature at index {}", index)))?;
            if !CityFeature::new(feature).is_city(Some(city)) {
                return Err(AppError::BadRequest(format!(
                    "Feature {} is not {}",
                    index, city
                )));
            }
            index
        }
        None => {
            dataset
                .layers()
                .get(city)
                .ok_or_else(|| AppError::NotFound(format!("City {} has no map layer", city)))?
                .index
        }
    };

    let focus = view
        .update(|current| FocusState::new(Some(city.to_string()), current.focus_policy.clone()))
        .clone();

    Ok(ViewUpdate {
        focus,
        camera: None,
        raise: Some(raise),
    })
}
