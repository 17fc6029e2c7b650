#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roadpath::{Path, Point, RoadGraph, WeightedGraph};

/// Relative tolerance used when comparing path costs
pub const TOLERANCE: f64 = 1e-6;

pub fn same_cost(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * b.abs().max(1.0)
}

/// Random planar graph: node coordinates in a 100 x 100 square, every edge
/// weighs at least the straight-line distance between its endpoints so the
/// Euclidean heuristic stays admissible and consistent
/// Nodes below `split` never connect to nodes at or above it
pub fn random_planar_graph(seed: u64, nodes: u32, degree: u32, split: u32) -> RoadGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = RoadGraph::new();

    for node in 0..nodes {
        let point = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        graph.add_node(node, Some(point));
    }

    for node in 0..nodes {
        for _ in 0..degree {
            let other = if node < split {
                rng.random_range(0..split)
            } else {
                rng.random_range(split..nodes)
            };
            if other == node {
                continue;
            }

            let (a, b) = match (graph.coordinates(&node), graph.coordinates(&other)) {
                (Some(a), Some(b)) => (a, b),
                _ => continue,
            };
            let weight = a.euclidean(&b) * rng.random_range(1.0..1.5);
            graph.add_edge(node, other, weight);

            // the occasional parallel edge, sometimes cheaper
            if rng.random_bool(0.1) {
                graph.add_edge(node, other, a.euclidean(&b) * rng.random_range(1.0..2.0));
            }
        }
    }

    graph
}

/// Grid of `size` x `size` nodes one unit apart, with random edges removed
/// and random weights of at least one, for Manhattan heuristics
pub fn random_grid(seed: u64, size: i32) -> RoadGraph<(i32, i32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = RoadGraph::new();

    for x in 0..size {
        for y in 0..size {
            graph.add_node((x, y), Some(Point::new(x as f64, y as f64)));
        }
    }
    for x in 0..size {
        for y in 0..size {
            if x + 1 < size && rng.random_bool(0.85) {
                graph.add_edge((x, y), (x + 1, y), rng.random_range(1.0..4.0));
            }
            if y + 1 < size && rng.random_bool(0.85) {
                graph.add_edge((x, y), (x, y + 1), rng.random_range(1.0..4.0));
            }
        }
    }

    graph
}

/// Small road network around central Helsinki, weights are geodesic meters
/// stretched by up to 40 percent
pub fn random_city(seed: u64, nodes: u32) -> RoadGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = RoadGraph::new();

    for node in 0..nodes {
        let point = Point::new(rng.random_range(24.85..25.05), rng.random_range(60.15..60.25));
        graph.add_node(node, Some(point));
    }
    for node in 1..nodes {
        for _ in 0..3 {
            let other = rng.random_range(0..node);
            let (a, b) = match (graph.coordinates(&node), graph.coordinates(&other)) {
                (Some(a), Some(b)) => (a, b),
                _ => continue,
            };
            graph.add_edge(node, other, a.haversine(&b) * rng.random_range(1.0..1.4));
        }
    }

    graph
}

/// The path starts and ends where asked, follows edges, and its cost adds up
pub fn assert_valid_path<G: WeightedGraph>(graph: &G, path: &Path<G::Node>, start: &G::Node, goal: &G::Node) {
    assert_eq!(path.nodes.first(), Some(start));
    assert_eq!(path.nodes.last(), Some(goal));

    let mut cost = 0.0;
    for pair in path.nodes.windows(2) {
        let weight = graph.edge_weight(&pair[0], &pair[1])
            .unwrap_or_else(|| panic!("{:?} -> {:?} is not an edge", pair[0], pair[1]));
        cost += weight;
    }
    assert!(same_cost(cost, path.cost), "edges add up to {cost}, path says {}", path.cost);
}
