use crate::collections::FxIndexMap;
use crate::config::SearchConfig;
use crate::errors::Result;
use crate::graph::WeightedGraph;
use super::{edge_cost, into_result, SearchResult, SearchState};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Exact baseline for the heuristic searches, uses no coordinates at all
pub fn dijkstra<G>(graph: &G, start: &G::Node, goal: &G::Node, config: &SearchConfig) -> Result<SearchResult<G::Node>>
where
    G: WeightedGraph,
    {

    if !graph.contains_node(start) || !graph.contains_node(goal) {
        return Ok(SearchResult::NotFound);
    }

    // Build the graph - terminates when the goal is met
    let (state, goal_index) = build_dijkstra_graph(graph, start, Some(goal), config)?;
    into_result(&state, goal_index)
}


/// Returns the cost of every node reachable from start
/// An empty map when start is not in the graph
pub fn dijkstra_costs<G>(graph: &G, start: &G::Node, config: &SearchConfig) -> Result<FxIndexMap<G::Node, f64>>
where
    G: WeightedGraph,
    {

    if !graph.contains_node(start) {
        return Ok(FxIndexMap::default());
    }

    let (state, _) = build_dijkstra_graph(graph, start, None, config)?;
    Ok(state.into_costs())
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns the search state with the smallest costs along with the index of the goal node
/// Without a goal the whole reachable component is settled
fn build_dijkstra_graph<G>(graph: &G, start: &G::Node, goal: Option<&G::Node>, config: &SearchConfig) -> Result<(SearchState<G::Node>, Option<usize>)>
where
    G: WeightedGraph,
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // Dijkstra's algorithm uses a priority queue to always expand the least costly node first
    // We store the cost from the starting node
    let mut nodes_to_visit: BinaryHeap<NodeId> = BinaryHeap::new();

    // visited nodes - parent index and best known cost
    let (mut state, start_index) = SearchState::new(start.clone());
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: 0.0, // This is the cost from the start node
    });

    let mut iterations = 0;

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {
        iterations += 1;
        config.check_iterations(iterations)?;

        // fetch current best cost for node
        let (node, c) = state.get(index)?;
        let node = node.clone();

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > c {
            continue;
        }

        // Check if we've reached the goal
        if goal == Some(&node) {
            debug!(iterations, settled = state.len(), cost, "dijkstra: reached goal");
            return Ok((state, Some(index)));
        }

        // loop over neighbors
        for neighbor in graph.neighbors(&node) {
            let Some(edge_cost) = edge_cost(graph, config, &node, neighbor)? else {
                continue;
            };

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            // Only add to the queue if we've found a better path
            if let Some(neighbor_index) = state.relax(neighbor, index, new_cost) {
                nodes_to_visit.push(NodeId {
                    index: neighbor_index,
                    cost: new_cost,
                });
            }
        }
    }

    Ok((state, None))
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
/// - Nodes can contain additional data, but we only need to identify them
#[derive(Debug)]
struct NodeId {
    index: usize,
    cost: f64,
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for NodeId {}
