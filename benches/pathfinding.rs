use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roadpath::{dijkstra, AStar, FringeSearch, Haversine, Point, RoadGraph, SearchConfig, WeightedGraph};
use std::hint::black_box;

/// Grid-like street network around Helsinki, 60 x 60 intersections
/// with edge lengths in meters
fn city_grid() -> RoadGraph<u32> {
    const SIZE: u32 = 60;
    let mut rng = StdRng::seed_from_u64(60);
    let mut graph = RoadGraph::new();

    for x in 0..SIZE {
        for y in 0..SIZE {
            let point = Point::new(24.85 + x as f64 * 0.004, 60.15 + y as f64 * 0.002);
            graph.add_node(x * SIZE + y, Some(point));
        }
    }

    for x in 0..SIZE {
        for y in 0..SIZE {
            let node = x * SIZE + y;
            for other in [(x + 1 < SIZE).then(|| node + SIZE), (y + 1 < SIZE).then(|| node + 1)].into_iter().flatten() {
                if rng.random_bool(0.1) {
                    continue;
                }
                if let (Some(a), Some(b)) = (graph.coordinates(&node), graph.coordinates(&other)) {
                    graph.add_edge(node, other, a.haversine(&b) * rng.random_range(1.0..1.3));
                }
            }
        }
    }

    graph
}

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = city_grid();
    let config = SearchConfig::default();
    let (start, goal) = (0, 60 * 60 - 1);

    c.bench_function("a_star_haversine_corner_to_corner", |b| {
        let a_star = AStar::new(config.clone());
        b.iter(|| {
            let result = a_star.find_path(&graph, &Haversine, &start, &goal).expect("search runs");
            black_box(result.cost())
        });
    });

    c.bench_function("fringe_haversine_corner_to_corner", |b| {
        let fringe = FringeSearch::new(config.clone());
        b.iter(|| {
            let result = fringe.find_path(&graph, &Haversine, &start, &goal).expect("search runs");
            black_box(result.cost())
        });
    });

    c.bench_function("dijkstra_corner_to_corner", |b| {
        b.iter(|| {
            let result = dijkstra(&graph, &start, &goal, &config).expect("search runs");
            black_box(result.cost())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
