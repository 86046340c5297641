// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The user's current map focus.

use crate::models::policy::FocusPolicy;
use serde::{Deserialize, Serialize};

/// Which city is highlighted and which metric colors the map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FocusState {
    /// Highlighted city, or `None` to show all
    pub focus_city: Option<String>,
    /// Coloring metric
    pub focus_policy: FocusPolicy,
}

impl FocusState {
    pub fn new(focus_city: Option<String>, focus_policy: FocusPolicy) -> Self {
        Self {
            focus_city,
            focus_policy,
        }
    }

    pub fn focus_city(&self) -> Option<&str> {
        self.focus_city.as_deref()
    }
}
