use crate::collections::FxHashSet;
use crate::config::SearchConfig;
use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::heuristics::Heuristic;
use super::{edge_cost, into_result, PathSearch, SearchResult, SearchState};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use tracing::debug;



/// Node on the A* open list
#[derive(Debug)]
struct Node {
    index: usize, // index in the search state - maps to the Id of the node
    f_cost: f64, // Total cost = cost + h(n) aka estimated cost
    seq: usize, // push order, breaks f_cost ties first-in first-out
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap pops the smallest f_cost
        other.f_cost.total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Node {}

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Clone, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// From start Node, traverse through graph until the goal is popped from the open list
    /// Optimal as long as the heuristic is admissible (never overestimates the true cost to reach the goal)
    /// Returns NotFound when start or goal are not in the graph, or the goal is unreachable
    pub fn find_path<G, H>(&self, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node) -> Result<SearchResult<G::Node>>
    where
        G: WeightedGraph,
        H: Heuristic<G>,
        {

        if !graph.contains_node(start) || !graph.contains_node(goal) {
            debug!(?start, ?goal, "a_star: start or goal not in graph");
            return Ok(SearchResult::NotFound);
        }

        let (state, goal_index) = self.build_graph(graph, heuristic, start, goal)?;
        into_result(&state, goal_index)
    }


    /// Traverses the graph using A* algorithm
    /// Returns the search state with the smallest known costs along with the index of the goal node
    fn build_graph<G, H>(&self, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node) -> Result<(SearchState<G::Node>, Option<usize>)>
    where
        G: WeightedGraph,
        H: Heuristic<G>,
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic)
        // A node may sit on it several times, only its first pop counts
        let mut open_list: BinaryHeap<Node> = BinaryHeap::new();

        // Nodes whose cost is final, never reopened
        let mut closed: FxHashSet<usize> = FxHashSet::default();

        // Costs and parents of every node seen so far
        let (mut state, start_index) = SearchState::new(start.clone());
        let mut seq = 0;
        open_list.push(Node {
            index: start_index,
            f_cost: heuristic.estimate(graph, start, goal),
            seq,
        });

        let mut iterations = 0;
        while let Some(Node { index, .. }) = open_list.pop() {
            iterations += 1;
            self.config.check_iterations(iterations)?;

            // Stale duplicate of a node that was already expanded
            if !closed.insert(index) {
                continue;
            }

            let (node, cost) = state.get(index)?;
            let node = node.clone();

            // Check if we've reached the goal
            if node == *goal {
                debug!(iterations, expanded = closed.len(), cost, "a_star: reached goal");
                return Ok((state, Some(index)));
            }

            // loop over neighbors
            for neighbor in graph.neighbors(&node) {
                if state.index_of(neighbor).is_some_and(|i| closed.contains(&i)) {
                    continue;
                }

                let Some(edge_cost) = edge_cost(graph, &self.config, &node, neighbor)? else {
                    continue;
                };

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                let new_cost = cost + edge_cost;

                // Only add to the queue if we've found a better path
                let Some(neighbor_index) = state.relax(neighbor, index, new_cost) else {
                    continue;
                };

                seq += 1;
                open_list.push(Node {
                    index: neighbor_index,
                    f_cost: new_cost + heuristic.estimate(graph, neighbor, goal),
                    seq,
                });
            }
        }

        debug!(iterations, expanded = closed.len(), "a_star: open list exhausted");
        Ok((state, None))
    }
}

impl PathSearch for AStar {
    fn find_path<G, H>(&self, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node) -> Result<SearchResult<G::Node>>
    where
        G: WeightedGraph,
        H: Heuristic<G>,
    {
        AStar::find_path(self, graph, heuristic, start, goal)
    }
}
