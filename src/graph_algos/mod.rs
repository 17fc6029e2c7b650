pub mod dijkstra;
pub mod a_star;
pub mod fringe;
mod shortest_path;
mod state;

pub use a_star::AStar;
pub use dijkstra::{dijkstra, dijkstra_costs};
pub use fringe::FringeSearch;

use serde::Serialize;
use shortest_path::shortest_path;
use state::SearchState;

use crate::collections::FxIndexMap;
use crate::config::SearchConfig;
use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::heuristics::Heuristic;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, NO_PARENT for the start
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Path from start to goal, both included, with its total cost
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path<N> {
    pub nodes: Vec<N>,
    pub cost: f64,
}

impl<N> Path<N> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}


/// Outcome of a search
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult<N> {
    Found(Path<N>),
    /// Goal is unreachable, or start/goal are not in the graph
    NotFound,
}

impl<N> SearchResult<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path<N>> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<f64> {
        self.path().map(|path| path.cost)
    }
}


/// Single start, single goal shortest path search
pub trait PathSearch {
    fn find_path<G, H>(&self, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node) -> Result<SearchResult<G::Node>>
    where
        G: WeightedGraph,
        H: Heuristic<G>;
}


/// Cost of moving from `from` to its neighbor `to` under the configured missing-weight policy
/// Ok(None) means the edge is skipped
pub(crate) fn edge_cost<G: WeightedGraph>(graph: &G, config: &SearchConfig, from: &G::Node, to: &G::Node) -> Result<Option<f64>> {
    config.missing_weight.resolve(from, to, graph.edge_weight(from, to))
}


/// Turn the outcome of a traversal into a SearchResult
pub(crate) fn into_result<N>(state: &SearchState<N>, goal_index: Option<usize>) -> Result<SearchResult<N>>
where
    N: Eq + std::hash::Hash + Clone + std::fmt::Debug,
{
    match goal_index {
        Some(goal_index) => Ok(SearchResult::Found(state.path_to(goal_index)?)),
        None => Ok(SearchResult::NotFound),
    }
}
