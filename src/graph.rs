use std::{fmt::Debug, hash::Hash};

use indexmap::map::Entry::{Occupied, Vacant};

use crate::collections::FxIndexMap;
use crate::geometry::Point;


/// Read-only view of a weighted, undirected road network consumed by the searches
/// The graph must not change while a search is running
pub trait WeightedGraph {
    type Node: Eq + Hash + Clone + Debug;

    /// All nodes of the graph
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Adjacent nodes, each listed once. The order decides tie-breaking in the searches
    fn neighbors(&self, node: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    /// Weight of the cheapest edge between two adjacent nodes
    /// None when none of the edges between them declares a weight
    fn edge_weight(&self, from: &Self::Node, to: &Self::Node) -> Option<f64>;

    /// (x = longitude, y = latitude) of a node, if known
    fn coordinates(&self, node: &Self::Node) -> Option<Point>;
}


/// Node data of a RoadGraph
#[derive(Clone, Debug)]
struct RoadNode<N> {
    coordinates: Option<Point>,
    // neighbor -> weights of the parallel edges, None for an edge without weight
    adjacent: FxIndexMap<N, Vec<Option<f64>>>,
}

impl<N> Default for RoadNode<N> {
    fn default() -> Self {
        Self { coordinates: None, adjacent: FxIndexMap::default() }
    }
}


/// In-memory undirected multigraph
/// Nodes and neighbors are enumerated in insertion order
#[derive(Clone, Debug)]
pub struct RoadGraph<N> {
    nodes: FxIndexMap<N, RoadNode<N>>,
}

impl<N> Default for RoadGraph<N> {
    fn default() -> Self {
        Self { nodes: FxIndexMap::default() }
    }
}

impl<N> RoadGraph<N>
where
    N: Eq + Hash + Clone + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or update the coordinates of an existing one
    pub fn add_node(&mut self, node: N, coordinates: Option<Point>) {
        match self.nodes.entry(node) {
            Occupied(mut e) => {
                if coordinates.is_some() {
                    e.get_mut().coordinates = coordinates;
                }
            }
            Vacant(e) => {
                e.insert(RoadNode { coordinates, ..RoadNode::default() });
            }
        }
    }

    /// Add an edge with a weight, creating missing endpoints
    /// Edges between the same pair of nodes accumulate as parallel edges
    pub fn add_edge(&mut self, a: N, b: N, weight: f64) {
        self.insert_edge(a, b, Some(weight));
    }

    /// Add an edge that declares no weight
    pub fn add_unweighted_edge(&mut self, a: N, b: N) {
        self.insert_edge(a, b, None);
    }

    /// Remove every edge between `a` and `b`
    /// Returns the number of parallel edges removed
    pub fn remove_edges(&mut self, a: &N, b: &N) -> usize {
        let removed = self.nodes.get_mut(a)
            .and_then(|node| node.adjacent.shift_remove(b))
            .map_or(0, |weights| weights.len());

        if a != b {
            if let Some(node) = self.nodes.get_mut(b) {
                node.adjacent.shift_remove(a);
            }
        }
        removed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, parallel edges counted separately
    pub fn edge_count(&self) -> usize {
        let mut twice = 0;
        let mut self_loops = 0;
        for (node, data) in &self.nodes {
            for (neighbor, weights) in &data.adjacent {
                if neighbor == node {
                    self_loops += weights.len();
                } else {
                    twice += weights.len();
                }
            }
        }
        twice / 2 + self_loops
    }

    fn insert_edge(&mut self, a: N, b: N, weight: Option<f64>) {
        if a == b {
            self.nodes.entry(a.clone()).or_default()
                .adjacent.entry(a).or_default()
                .push(weight);
            return;
        }

        self.nodes.entry(a.clone()).or_default()
            .adjacent.entry(b.clone()).or_default()
            .push(weight);
        self.nodes.entry(b).or_default()
            .adjacent.entry(a).or_default()
            .push(weight);
    }
}

impl<N> WeightedGraph for RoadGraph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.nodes.get(node)
            .into_iter()
            .flat_map(|data| data.adjacent.keys())
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        self.nodes.get(from)?
            .adjacent.get(to)?
            .iter()
            .flatten()
            .copied()
            .reduce(f64::min)
    }

    fn coordinates(&self, node: &N) -> Option<Point> {
        self.nodes.get(node)?.coordinates
    }
}
