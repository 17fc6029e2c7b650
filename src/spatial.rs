use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;

use crate::errors::PathPlannerError;
use crate::graph::WeightedGraph;


/// Nearest-node lookup over the coordinates of a graph
/// Distances are planar on (longitude, latitude), good enough for snapping a
/// clicked point to the closest road node
pub struct NodeLocator<N> {
    tree: KdTree<f64, usize, [f64; 2]>, // stores point -> index in nodes
    nodes: Vec<N>,
}

impl<N: Clone> NodeLocator<N> {

    /// Index every node of the graph that has coordinates
    pub fn from_graph<G>(graph: &G) -> Result<Self, PathPlannerError>
    where
        G: WeightedGraph<Node = N>,
    {
        let mut tree = KdTree::new(2);
        let mut nodes = Vec::new();

        for node in graph.nodes() {
            let Some(point) = graph.coordinates(node) else {
                continue;
            };
            tree.add([point.x, point.y], nodes.len())?;
            nodes.push(node.clone());
        }

        Ok(Self { tree, nodes })
    }

    /// Node closest to the given latitude / longitude, None on an empty index
    pub fn nearest(&self, lat: f64, lng: f64) -> Result<Option<&N>, PathPlannerError> {
        if self.nodes.is_empty() {
            return Ok(None);
        }

        let closest: Vec<(f64, &usize)> = self.tree.nearest(&[lng, lat], 1, &kt_squared_euclidean)?;
        Ok(closest.first().and_then(|&(_, &index)| self.nodes.get(index)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
