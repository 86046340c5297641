// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Anti-displacement policy catalog and the "adopted" predicate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used wherever the aggregate count stands in for a policy name.
pub const AGGREGATE_LABEL: &str = "Count of anti-displacement policies";

/// Wire value of the aggregate metric.
pub const TOTAL_CODE: &str = "total";

/// Built-in catalog, in display order.
const DEFAULT_POLICIES: [(&str, &str); 14] = [
    ("justcause", "Just Cause Eviction Ordinance"),
    ("stabilizat", "Rent Stabilization or Rent Control"),
    ("reviewboar", "Rent Review Board and/or Mediation"),
    ("mobilehome", "Mobile home rent control"),
    ("sropres", "SRO preservation"),
    ("condoconv", "Condominium conversion regulations"),
    ("foreclosur", "Foreclosure assistance"),
    ("jobshousin", "Jobs-housing linkage fee"),
    ("commercial", "Commerical linkage fee"),
    ("trustfund", "Housing trust fund"),
    ("inclusiona", "Inclusionary zoning"),
    ("densitybon", "Density bonus ordinance"),
    ("landtrust", "Community Land Trusts"),
    ("firstsourc", "First source hiring"),
];

/// A single policy tracked by the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    /// Property key on each city feature (e.g. "justcause")
    pub code: String,
    /// Human-readable name shown in menus and the legend
    pub name: String,
}

/// Fixed, ordered set of policies. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyCatalog {
    policies: Vec<PolicyDefinition>,
}

impl Default for PolicyCatalog {
    fn default() -> Self {
        Self {
            policies: DEFAULT_POLICIES
                .iter()
                .map(|(code, name)| PolicyDefinition {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

impl PolicyCatalog {
    /// Build a catalog from explicit definitions (used by tests and benches).
    pub fn new(policies: Vec<PolicyDefinition>) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &[PolicyDefinition] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Look up a policy by code.
    pub fn get(&self, code: &str) -> Option<&PolicyDefinition> {
        self.policies.iter().find(|p| p.code == code)
    }

    /// Resolve a wire value ("total" or a policy code) into a focus metric.
    ///
    /// Returns `None` for codes outside the catalog.
    pub fn resolve(&self, value: &str) -> Option<FocusPolicy> {
        if value == TOTAL_CODE {
            return Some(FocusPolicy::Total);
        }
        self.get(value).map(|p| FocusPolicy::Policy(p.code.clone()))
    }

    /// Display label for a focus metric.
    pub fn label_for<'a>(&'a self, focus: &FocusPolicy) -> &'a str {
        match focus {
            FocusPolicy::Total => AGGREGATE_LABEL,
            FocusPolicy::Policy(code) => self
                .get(code)
                .map(|p| p.name.as_str())
                .unwrap_or(AGGREGATE_LABEL),
        }
    }
}

/// The coloring metric: the aggregate count or one policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FocusPolicy {
    #[default]
    Total,
    Policy(String),
}

impl FocusPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            FocusPolicy::Total => TOTAL_CODE,
            FocusPolicy::Policy(code) => code,
        }
    }
}

impl From<String> for FocusPolicy {
    fn from(value: String) -> Self {
        if value == TOTAL_CODE {
            FocusPolicy::Total
        } else {
            FocusPolicy::Policy(value)
        }
    }
}

impl From<FocusPolicy> for String {
    fn from(value: FocusPolicy) -> Self {
        match value {
            FocusPolicy::Total => TOTAL_CODE.to_string(),
            FocusPolicy::Policy(code) => code,
        }
    }
}

impl fmt::Display for FocusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a free-text policy status counts as adopted.
///
/// Undefined or empty values are not adopted. Otherwise the value is adopted
/// unless its first two characters, upper-cased, are "NO". Nothing else about
/// the text is interpreted, so typos and unexpected phrasings count as adopted.
pub fn is_adopted(status: Option<&str>) -> bool {
    match status {
        None | Some("") => false,
        Some(text) => {
            let prefix: String = text.chars().take(2).collect();
            prefix.to_uppercase() != "NO"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_fourteen_policies_in_order() {
        let catalog = PolicyCatalog::default();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.policies()[0].code, "justcause");
        assert_eq!(catalog.policies()[13].code, "firstsourc");
        assert_eq!(
            catalog.get("stabilizat").map(|p| p.name.as_str()),
            Some("Rent Stabilization or Rent Control")
        );
    }

    #[test]
    fn test_is_adopted_rejects_no_prefix_case_insensitively() {
        assert!(!is_adopted(Some("No")));
        assert!(!is_adopted(Some("NO")));
        assert!(!is_adopted(Some("no")));
        assert!(!is_adopted(Some("nO, pending")));
        assert!(!is_adopted(Some("No, not adopted")));
        assert!(!is_adopted(Some("no_something_else")));
        assert!(!is_adopted(Some("Nope")));
    }

    #[test]
    fn test_is_adopted_accepts_anything_else() {
        assert!(is_adopted(Some("Yes")));
        assert!(is_adopted(Some("yes, no")));
        assert!(is_adopted(Some("Ys")));
        assert!(is_adopted(Some("N")));
        assert!(is_adopted(Some(" No")));
    }

    #[test]
    fn test_is_adopted_undefined_or_empty() {
        assert!(!is_adopted(None));
        assert!(!is_adopted(Some("")));
    }

    #[test]
    fn test_resolve_focus_policy() {
        let catalog = PolicyCatalog::default();
        assert_eq!(catalog.resolve("total"), Some(FocusPolicy::Total));
        assert_eq!(
            catalog.resolve("justcause"),
            Some(FocusPolicy::Policy("justcause".to_string()))
        );
        assert_eq!(catalog.resolve("bogus"), None);
    }

    #[test]
    fn test_label_for_focus() {
        let catalog = PolicyCatalog::default();
        assert_eq!(catalog.label_for(&FocusPolicy::Total), AGGREGATE_LABEL);
        assert_eq!(
            catalog.label_for(&FocusPolicy::Policy("trustfund".to_string())),
            "Housing trust fund"
        );
    }

    #[test]
    fn test_focus_policy_wire_format() {
        let json = serde_json::to_string(&FocusPolicy::Total).unwrap();
        assert_eq!(json, "\"total\"");

        let parsed: FocusPolicy = serde_json::from_str("\"sropres\"").unwrap();
        assert_eq!(parsed, FocusPolicy::Policy("sropres".to_string()));
    }
}
