use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use forgebom_core::{ItemId, Quantity};
use forgebom_infra::InMemoryCatalog;
use forgebom_inventory::{DependencyEdge, Item};
use forgebom_resources::{AggregatorConfig, FanOut, ResourceAggregator};
use std::sync::Arc;

fn id(s: &str) -> ItemId {
    s.parse().unwrap()
}

/// `depth` levels, each node needing `width` distinct children; leaves are
/// shared across the last level so the merge path is exercised.
fn layered_catalog(depth: usize, width: usize) -> Arc<InMemoryCatalog> {
    let catalog = Arc::new(InMemoryCatalog::new());
    let mut level = vec![id("root")];
    catalog.upsert_item(Item::new(id("root"), "Root", "product").unwrap());

    for d in 0..depth {
        let mut next = Vec::new();
        for parent in &level {
            for w in 0..width {
                let child = if d + 1 == depth {
                    id(&format!("ore-{w}"))
                } else {
                    id(&format!("{parent}.{w}"))
                };
                let item_type = if d + 1 == depth { "material" } else { "refined" };
                catalog.upsert_item(Item::new(child.clone(), child.as_str(), item_type).unwrap());
                catalog.add_dependency(DependencyEdge::new(
                    parent.clone(),
                    child.clone(),
                    Quantity::new((w + 1) as f64).unwrap(),
                ));
                if d + 1 != depth {
                    next.push(child);
                }
            }
        }
        level = next;
    }

    catalog
}

/// Single chain `c0 -> c1 -> ... -> cN`.
fn chain_catalog(len: usize) -> Arc<InMemoryCatalog> {
    let catalog = Arc::new(InMemoryCatalog::new());
    for i in 0..=len {
        let item = id(&format!("c{i}"));
        catalog.upsert_item(Item::new(item.clone(), item.as_str(), "refined").unwrap());
        if i < len {
            catalog.add_dependency(DependencyEdge::new(
                item,
                id(&format!("c{}", i + 1)),
                Quantity::ONE,
            ));
        }
    }
    catalog
}

fn bench_wide_graphs(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let mut group = c.benchmark_group("aggregate_layered");

    for (depth, width) in [(3usize, 4usize), (4, 4), (5, 3)] {
        let catalog = layered_catalog(depth, width);
        for fan_out in [FanOut::Sequential, FanOut::Concurrent] {
            let agg = ResourceAggregator::new(catalog.clone(), catalog.clone())
                .with_config(AggregatorConfig { fan_out });
            group.bench_with_input(
                BenchmarkId::new(fan_out.to_string(), format!("d{depth}w{width}")),
                &agg,
                |b, agg| b.iter(|| rt.block_on(agg.aggregate(black_box(&id("root"))))),
            );
        }
    }

    group.finish();
}

fn bench_deep_chain(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let mut group = c.benchmark_group("aggregate_chain");

    for len in [16usize, 128, 512, 2_048] {
        let catalog = chain_catalog(len);
        let agg = ResourceAggregator::new(catalog.clone(), catalog);
        group.bench_with_input(BenchmarkId::from_parameter(len), &agg, |b, agg| {
            b.iter(|| rt.block_on(agg.aggregate(black_box(&id("c0")))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wide_graphs, bench_deep_chain);
criterion_main!(benches);
