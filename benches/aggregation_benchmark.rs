use baypolicy_map::models::{derive_style, CityFeature, FocusPolicy, FocusState, PolicyCatalog, StyleTable};
use baypolicy_map::services::aggregator;
use baypolicy_map::services::loader::parse_collection;
use criterion::{criterion_group, criterion_main, Criterion};
use geojson::FeatureCollection;
use serde_json::{json, Map, Value};
use std::hint::black_box;

/// Build a synthetic region of square cities, each adopting a rotating
/// subset of the catalog.
fn synthetic_region(catalog: &PolicyCatalog, cities: usize) -> FeatureCollection {
    let features: Vec<Value> = (0..cities)
        .map(|i| {
            let mut properties = Map::new();
            properties.insert("city".to_string(), json!(format!("City {:03}", i)));
            for (j, policy) in catalog.policies().iter().enumerate() {
                let status = if (i + j) % 3 == 0 { "Yes" } else { "No" };
                properties.insert(policy.code.clone(), json!(status));
            }

            let x = -123.0 + (i % 20) as f64 * 0.05;
            let y = 37.0 + (i / 20) as f64 * 0.05;
            json!({
                "type": "Feature",
                "properties": properties,
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[x, y], [x + 0.04, y], [x + 0.04, y + 0.04], [x, y + 0.04], [x, y]]]
                }
            })
        })
        .collect();

    let document = json!({"type": "FeatureCollection", "features": features});
    parse_collection(&document.to_string()).expect("Synthetic region should parse")
}

fn benchmark_aggregation(c: &mut Criterion) {
    let catalog = PolicyCatalog::default();
    let region = synthetic_region(&catalog, 101);

    c.bench_function("aggregate_101_cities", |b| {
        b.iter(|| {
            let mut collection = region.clone();
            aggregator::aggregate(black_box(&mut collection), &catalog)
        })
    });
}

fn benchmark_restyle(c: &mut Criterion) {
    let catalog = PolicyCatalog::default();
    let table = StyleTable::default();
    let mut region = synthetic_region(&catalog, 101);
    aggregator::aggregate(&mut region, &catalog);

    let mut group = c.benchmark_group("restyle_all_features");

    let by_total = FocusState::new(Some("City 050".to_string()), FocusPolicy::Total);
    group.bench_function("total", |b| {
        b.iter(|| {
            region
                .features
                .iter()
                .map(|f| derive_style(CityFeature::new(f), black_box(&by_total), &table))
                .collect::<Vec<_>>()
        })
    });

    let by_policy = FocusState::new(
        Some("City 050".to_string()),
        FocusPolicy::Policy("justcause".to_string()),
    );
    group.bench_function("single_policy", |b| {
        b.iter(|| {
            region
                .features
                .iter()
                .map(|f| derive_style(CityFeature::new(f), black_box(&by_policy), &table))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_aggregation, benchmark_restyle);
criterion_main!(benches);
