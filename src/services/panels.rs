// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only panels derived from the focus: selector menus, legend and
//! policy inventory.

use crate::models::policy::{AGGREGATE_LABEL, TOTAL_CODE};
use crate::models::{FocusPolicy, FocusState, PolicyCatalog, StyleTable};
use crate::services::dataset::LoadedDataset;
use serde::Serialize;

const SHOW_ALL_LABEL: &str = "Show All";

/// One selectable entry in a dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Value posted back on selection; `None` for "Show All"
    pub value: Option<String>,
    pub label: String,
    /// Entry matches the current focus
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub code: String,
    pub name: String,
    /// Status text as published, if any
    pub status: Option<String>,
    pub adopted: bool,
}

/// Policy status of the focused city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub city: String,
    pub total: u32,
    pub policies: Vec<InventoryRow>,
}

/// Everything the overlay needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub focus: FocusState,
    pub legend: Legend,
    pub inventory: Option<Inventory>,
    pub policy_menu: Vec<MenuEntry>,
    pub city_menu: Vec<MenuEntry>,
}

/// Aggregate count first, then every catalog policy.
pub fn policy_menu(catalog: &PolicyCatalog, focus: &FocusState) -> Vec<MenuEntry> {
    let aggregate = MenuEntry {
        value: Some(TOTAL_CODE.to_string()),
        label: AGGREGATE_LABEL.to_string(),
        active: focus.focus_policy == FocusPolicy::Total,
    };

    std::iter::once(aggregate)
        .chain(catalog.policies().iter().map(|policy| MenuEntry {
            value: Some(policy.code.clone()),
            label: policy.name.clone(),
            active: matches!(&focus.focus_policy, FocusPolicy::Policy(code) if *code == policy.code),
        }))
        .collect()
}

/// "Show All" first, then every city in list order.
pub fn city_menu(cities: &[String], focus: &FocusState) -> Vec<MenuEntry> {
    let show_all = MenuEntry {
        value: None,
        label: SHOW_ALL_LABEL.to_string(),
        active: false,
    };

    std::iter::once(show_all)
        .chain(cities.iter().map(|city| MenuEntry {
            value: Some(city.clone()),
            label: city.clone(),
            active: focus.focus_city() == Some(city.as_str()),
        }))
        .collect()
}

/// Legend title and swatches for the active coloring.
pub fn legend(catalog: &PolicyCatalog, focus: &FocusState, table: &StyleTable) -> Legend {
    let entries = match focus.focus_policy {
        FocusPolicy::Total => table
            .ramp
            .buckets()
            .into_iter()
            .map(|(label, color)| LegendEntry {
                label,
                color: color.to_string(),
            })
            .collect(),
        FocusPolicy::Policy(_) => vec![
            LegendEntry {
                label: "Adopted".to_string(),
                color: table.adopted_color.clone(),
            },
            LegendEntry {
                label: "Not adopted".to_string(),
                color: table.not_adopted_color.clone(),
            },
        ],
    };

    Legend {
        title: catalog.label_for(&focus.focus_policy).to_string(),
        entries,
    }
}

/// Policy-by-policy status of the focused city, if any.
pub fn inventory(
    catalog: &PolicyCatalog,
    dataset: &LoadedDataset,
    focus: &FocusState,
) -> Option<Inventory> {
    let name = focus.focus_city()?;
    let city = dataset.find_city(name)?;

    let policies = catalog
        .policies()
        .iter()
        .map(|policy| InventoryRow {
            code: policy.code.clone(),
            name: policy.name.clone(),
            status: city.status(&policy.code).map(str::to_string),
            adopted: city.has_adopted(&policy.code),
        })
        .collect();

    Some(Inventory {
        city: name.to_string(),
        total: city.total(),
        policies,
    })
}

/// Build every panel for the given focus.
pub fn snapshot(
    catalog: &PolicyCatalog,
    table: &StyleTable,
    dataset: &LoadedDataset,
    focus: FocusState,
) -> ViewSnapshot {
    ViewSnapshot {
        legend: legend(catalog, &focus, table),
        inventory: inventory(catalog, dataset, &focus),
        policy_menu: policy_menu(catalog, &focus),
        city_menu: city_menu(dataset.cities(), &focus),
        focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::loader::parse_collection;

    fn dataset() -> LoadedDataset {
        let fc = parse_collection(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"city": "Oakland", "justcause": "Yes", "stabilizat": "Yes", "sropres": "No"}, "geometry": null},
                {"type": "Feature", "properties": {"city": "Berkeley", "justcause": "No"}, "geometry": null}
            ]}"#,
        )
        .unwrap();
        LoadedDataset::derive(fc, &PolicyCatalog::default())
    }

    fn active_values(entries: &[MenuEntry]) -> Vec<Option<String>> {
        entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.value.clone())
            .collect()
    }

    #[test]
    fn test_policy_menu_highlights_focus() {
        let catalog = PolicyCatalog::default();

        let menu = policy_menu(&catalog, &FocusState::default());
        assert_eq!(menu.len(), 15);
        assert_eq!(menu[0].label, AGGREGATE_LABEL);
        assert_eq!(active_values(&menu), vec![Some("total".to_string())]);

        let focus = FocusState::new(None, FocusPolicy::Policy("sropres".to_string()));
        let menu = policy_menu(&catalog, &focus);
        assert_eq!(active_values(&menu), vec![Some("sropres".to_string())]);
    }

    #[test]
    fn test_city_menu_starts_with_show_all() {
        let cities = vec!["Berkeley".to_string(), "Oakland".to_string()];

        let menu = city_menu(&cities, &FocusState::default());
        assert_eq!(menu[0].label, "Show All");
        assert_eq!(menu[0].value, None);
        assert!(active_values(&menu).is_empty());

        let focus = FocusState::new(Some("Oakland".to_string()), FocusPolicy::Total);
        let menu = city_menu(&cities, &focus);
        assert_eq!(active_values(&menu), vec![Some("Oakland".to_string())]);
    }

    #[test]
    fn test_legend_titles_and_swatches() {
        let catalog = PolicyCatalog::default();
        let table = StyleTable::default();

        let total = legend(&catalog, &FocusState::default(), &table);
        assert_eq!(total.title, AGGREGATE_LABEL);
        assert_eq!(total.entries.len(), 5);
        assert_eq!(total.entries[0].label, "0");
        assert_eq!(total.entries[4].label, "10+");

        let focus = FocusState::new(None, FocusPolicy::Policy("justcause".to_string()));
        let single = legend(&catalog, &focus, &table);
        assert_eq!(single.title, "Just Cause Eviction Ordinance");
        assert_eq!(single.entries.len(), 2);
        assert_eq!(single.entries[0].color, table.adopted_color);
    }

    #[test]
    fn test_inventory_for_focused_city() {
        let catalog = PolicyCatalog::default();
        let dataset = dataset();

        assert!(inventory(&catalog, &dataset, &FocusState::default()).is_none());

        let focus = FocusState::new(Some("Oakland".to_string()), FocusPolicy::Total);
        let inv = inventory(&catalog, &dataset, &focus).unwrap();
        assert_eq!(inv.city, "Oakland");
        assert_eq!(inv.total, 2);
        assert_eq!(inv.policies.len(), catalog.len());

        let justcause = &inv.policies[0];
        assert_eq!(justcause.code, "justcause");
        assert_eq!(justcause.status.as_deref(), Some("Yes"));
        assert!(justcause.adopted);

        let sropres = inv.policies.iter().find(|r| r.code == "sropres").unwrap();
        assert_eq!(sropres.status.as_deref(), Some("No"));
        assert!(!sropres.adopted);

        let mobilehome = inv.policies.iter().find(|r| r.code == "mobilehome").unwrap();
        assert_eq!(mobilehome.status, None);
        assert!(!mobilehome.adopted);
    }

    #[test]
    fn test_snapshot_for_unknown_city_has_no_inventory() {
        let catalog = PolicyCatalog::default();
        let focus = FocusState::new(Some("Fremont".to_string()), FocusPolicy::Total);
        let snap = snapshot(&catalog, &StyleTable::default(), &dataset(), focus);

        assert!(snap.inventory.is_none());
        assert_eq!(snap.city_menu.len(), 3);
    }
}
