use crate::geometry::Point;
use crate::graph::WeightedGraph;


/// Estimate of the remaining cost between two nodes
/// Must never overestimate the true cost for the searches to return optimal paths
pub trait Heuristic<G: WeightedGraph> {
    fn estimate(&self, graph: &G, from: &G::Node, to: &G::Node) -> f64;
}


/// Straight-line distance in coordinate units
/// Admissible when edge weights are at least the planar distance between their endpoints
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

/// Great-circle distance in meters, coordinates read as (longitude, latitude) degrees
/// Admissible when edge weights are geodesic lengths in meters
#[derive(Clone, Copy, Debug, Default)]
pub struct Haversine;

/// Axis-aligned distance in coordinate units
/// Only admissible on grid-aligned graphs
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

/// Always zero, turns either search into a uniform-cost search
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHeuristic;


/// Coordinates of both nodes, None if either is unknown
fn endpoints<G: WeightedGraph>(graph: &G, from: &G::Node, to: &G::Node) -> Option<(Point, Point)> {
    Some((graph.coordinates(from)?, graph.coordinates(to)?))
}

// A node without coordinates estimates 0, which keeps every heuristic admissible

impl<G: WeightedGraph> Heuristic<G> for Euclidean {
    fn estimate(&self, graph: &G, from: &G::Node, to: &G::Node) -> f64 {
        endpoints(graph, from, to).map_or(0.0, |(a, b)| a.euclidean(&b))
    }
}

impl<G: WeightedGraph> Heuristic<G> for Haversine {
    fn estimate(&self, graph: &G, from: &G::Node, to: &G::Node) -> f64 {
        endpoints(graph, from, to).map_or(0.0, |(a, b)| a.haversine(&b))
    }
}

impl<G: WeightedGraph> Heuristic<G> for Manhattan {
    fn estimate(&self, graph: &G, from: &G::Node, to: &G::Node) -> f64 {
        endpoints(graph, from, to).map_or(0.0, |(a, b)| a.manhattan(&b))
    }
}

impl<G: WeightedGraph> Heuristic<G> for NullHeuristic {
    fn estimate(&self, _graph: &G, _from: &G::Node, _to: &G::Node) -> f64 {
        0.0
    }
}

impl<G: WeightedGraph, H: Heuristic<G> + ?Sized> Heuristic<G> for &H {
    fn estimate(&self, graph: &G, from: &G::Node, to: &G::Node) -> f64 {
        (**self).estimate(graph, from, to)
    }
}
