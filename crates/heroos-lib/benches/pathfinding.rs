use criterion::{criterion_group, criterion_main, Criterion};
use heroos_lib::{
    bfs, binary_search_by_power, dijkstra, plan_route, sort_by_power, GenerationConfig, Inventory,
    MapGraph, RouteRequest,
};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

static WORLD: Lazy<MapGraph> = Lazy::new(MapGraph::world);
static SORTED_INVENTORY: Lazy<Inventory> = Lazy::new(|| {
    let mut inventory = Inventory::new();
    let config = GenerationConfig {
        count: 1_000,
        ..GenerationConfig::default()
    };
    inventory
        .regenerate_with(&config, &mut StdRng::seed_from_u64(42))
        .expect("valid generation config");
    sort_by_power(&mut inventory);
    inventory
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*WORLD;

    c.bench_function("dijkstra_a_all", |b| {
        b.iter(|| {
            let paths = dijkstra(graph, black_box("A")).expect("start exists");
            black_box(paths.distance("G").ok())
        });
    });

    c.bench_function("bfs_a_g", |b| {
        b.iter(|| {
            let route = bfs(graph, black_box("A"), black_box("G")).expect("route exists");
            black_box(route.hop_count())
        });
    });

    c.bench_function("plan_route_dijkstra_a_g", |b| {
        let request = RouteRequest::dijkstra("A", "G");
        b.iter(|| {
            let plan = plan_route(graph, &request).expect("route exists");
            black_box(plan.cost)
        });
    });
}

fn benchmark_search(c: &mut Criterion) {
    let inventory = &*SORTED_INVENTORY;

    c.bench_function("binary_search_1000_items", |b| {
        b.iter(|| {
            let outcome = binary_search_by_power(inventory, black_box(500)).expect("sorted");
            black_box(outcome.step_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding, benchmark_search);
criterion_main!(benches);
