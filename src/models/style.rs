// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Choropleth styling.
//!
//! Styles are derived on demand from a feature, the current focus and the
//! style table. Nothing here holds state between calls.

use crate::models::city::CityFeature;
use crate::models::focus::FocusState;
use crate::models::policy::FocusPolicy;
use serde::Serialize;

const DEFAULT_BREAKPOINTS: [u32; 4] = [1, 3, 6, 10];
const DEFAULT_RAMP: [&str; 5] = ["#FAEFDA", "#F4E0BB", "#FCD07E", "#F4B030", "#e49d1b"];
const ADOPTED_COLOR: &str = "#F9BB56";
const NOT_ADOPTED_COLOR: &str = "#E2DDCF";
const FILL_OPACITY: f64 = 0.9;

const FOCUSED_STROKE: Stroke = Stroke {
    weight: 2,
    opacity: 1.0,
    color: "#000",
};
const DEFAULT_STROKE: Stroke = Stroke {
    weight: 1,
    opacity: 0.5,
    color: "#FFF",
};

#[derive(Debug, Clone, Copy)]
struct Stroke {
    weight: u8,
    opacity: f64,
    color: &'static str,
}

/// Path options for one rendered boundary (Leaflet field names).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    pub fill_color: String,
    pub weight: u8,
    pub opacity: f64,
    pub color: String,
    pub fill_opacity: f64,
}

/// Stepped color ramp keyed on the aggregated total.
///
/// Bucket `i` covers `[breakpoints[i-1], breakpoints[i])`; the first bucket
/// starts at 0 and the last is open-ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRamp {
    breakpoints: Vec<u32>,
    colors: Vec<String>,
}

impl ColorRamp {
    pub fn new(breakpoints: Vec<u32>, colors: Vec<String>) -> Result<Self, StyleError> {
        if colors.len() != breakpoints.len() + 1 {
            return Err(StyleError::RampLength {
                breakpoints: breakpoints.len(),
                colors: colors.len(),
            });
        }
        if breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(StyleError::UnsortedBreakpoints);
        }
        Ok(Self {
            breakpoints,
            colors,
        })
    }

    /// Color for a total.
    pub fn color_for(&self, total: u32) -> &str {
        let bucket = self.breakpoints.iter().take_while(|&&b| total >= b).count();
        &self.colors[bucket]
    }

    /// `(label, color)` for every bucket, e.g. `("1-2", "#F4E0BB")`.
    pub fn buckets(&self) -> Vec<(String, &str)> {
        let mut lower = 0;
        let mut out = Vec::with_capacity(self.colors.len());
        for (i, color) in self.colors.iter().enumerate() {
            let label = match self.breakpoints.get(i) {
                Some(&upper) if upper.saturating_sub(1) <= lower => lower.to_string(),
                Some(&upper) => format!("{}-{}", lower, upper - 1),
                None => format!("{}+", lower),
            };
            out.push((label, color.as_str()));
            if let Some(&upper) = self.breakpoints.get(i) {
                lower = upper;
            }
        }
        out
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            colors: DEFAULT_RAMP.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Colors used by the map, passed explicitly to the style derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    pub ramp: ColorRamp,
    pub adopted_color: String,
    pub not_adopted_color: String,
    pub fill_opacity: f64,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            ramp: ColorRamp::default(),
            adopted_color: ADOPTED_COLOR.to_string(),
            not_adopted_color: NOT_ADOPTED_COLOR.to_string(),
            fill_opacity: FILL_OPACITY,
        }
    }
}

/// Style for one feature under the given focus.
pub fn derive_style(feature: CityFeature<'_>, focus: &FocusState, table: &StyleTable) -> FeatureStyle {
    let fill_color = match &focus.focus_policy {
        FocusPolicy::Total => table.ramp.color_for(feature.total()),
        FocusPolicy::Policy(code) if feature.has_adopted(code) => table.adopted_color.as_str(),
        FocusPolicy::Policy(_) => table.not_adopted_color.as_str(),
    };

    let stroke = if feature.is_city(focus.focus_city()) {
        FOCUSED_STROKE
    } else {
        DEFAULT_STROKE
    };

    FeatureStyle {
        fill_color: fill_color.to_string(),
        weight: stroke.weight,
        opacity: stroke.opacity,
        color: stroke.color.to_string(),
        fill_opacity: table.fill_opacity,
    }
}

/// Style table errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("Color ramp needs one more color than breakpoints (got {breakpoints} breakpoints, {colors} colors)")]
    RampLength { breakpoints: usize, colors: usize },

    #[error("Color ramp breakpoints must be strictly ascending")]
    UnsortedBreakpoints,
}
