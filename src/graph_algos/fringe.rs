use crate::config::SearchConfig;
use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::heuristics::Heuristic;
use super::{edge_cost, into_result, PathSearch, SearchResult, SearchState};

use std::collections::VecDeque;
use tracing::{debug, trace};


/// Entry on the fringe: (index in the search state, stamp)
/// Only the entry carrying a node's latest stamp is live, older ones are skipped when reached
type FringeEntry = (usize, u32);


/// Fringe Search
/// https://en.wikipedia.org/wiki/Fringe_search
///
/// Iterative deepening on the f value without restarting from the root:
/// each sweep walks the fringe front to back, expands nodes whose f fits under the
/// threshold and defers the rest to the next sweep, whose threshold is the smallest
/// deferred f. Expanded neighbors go to the front of the fringe, so the sweep follows
/// them depth-first before moving on.
#[derive(Clone, Debug, Default)]
pub struct FringeSearch {
    config: SearchConfig,
}

impl FringeSearch {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the cheapest path from start to goal
    /// Optimal when the heuristic is admissible and consistent
    /// Returns NotFound when start or goal are not in the graph, or the goal is unreachable
    pub fn find_path<G, H>(&self, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node) -> Result<SearchResult<G::Node>>
    where
        G: WeightedGraph,
        H: Heuristic<G>,
    {
        if !graph.contains_node(start) || !graph.contains_node(goal) {
            debug!(?start, ?goal, "fringe: start or goal not in graph");
            return Ok(SearchResult::NotFound);
        }

        let (state, goal_index) = self.build_graph(graph, heuristic, start, goal)?;
        into_result(&state, goal_index)
    }


    /// Runs threshold sweeps until the goal is reached or nothing is left to defer
    fn build_graph<G, H>(&self, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node) -> Result<(SearchState<G::Node>, Option<usize>)>
    where
        G: WeightedGraph,
        H: Heuristic<G>,
    {
        // Cost and parent of every node seen so far
        let (mut state, start_index) = SearchState::new(start.clone());

        // Latest stamp per state index, bumped whenever a node's cost improves
        let mut stamps: Vec<u32> = vec![0];

        // Nodes to look at in this sweep, processed front to back
        let mut now: VecDeque<FringeEntry> = VecDeque::from([(start_index, 0)]);
        let mut flimit = heuristic.estimate(graph, start, goal);

        let mut sweeps = 0;
        let mut expanded = 0;
        loop {
            sweeps += 1;
            self.config.check_iterations(sweeps)?;

            // Nodes over the threshold, looked at again in the next sweep
            let mut later: VecDeque<FringeEntry> = VecDeque::new();
            let mut fmin = f64::INFINITY;

            while let Some((index, stamp)) = now.pop_front() {
                // superseded by a cheaper entry for the same node
                if stamps[index] != stamp {
                    continue;
                }

                let (node, cost) = state.get(index)?;
                let node = node.clone();

                let f_cost = cost + heuristic.estimate(graph, &node, goal);
                if f_cost > flimit {
                    fmin = fmin.min(f_cost);
                    later.push_back((index, stamp));
                    continue;
                }

                if node == *goal {
                    debug!(sweeps, expanded, cost, "fringe: reached goal");
                    return Ok((state, Some(index)));
                }

                expanded += 1;

                // Walk neighbors backwards so the first neighbor ends up at the front
                let neighbors: Vec<&G::Node> = graph.neighbors(&node).collect();
                for neighbor in neighbors.into_iter().rev() {
                    let Some(edge_cost) = edge_cost(graph, &self.config, &node, neighbor)? else {
                        continue;
                    };

                    let Some(neighbor_index) = state.relax(neighbor, index, cost + edge_cost) else {
                        continue;
                    };

                    let stamp = match stamps.get_mut(neighbor_index) {
                        Some(stamp) => {
                            *stamp += 1;
                            *stamp
                        }
                        None => {
                            stamps.push(0);
                            0
                        }
                    };
                    now.push_front((neighbor_index, stamp));
                }
            }

            if later.is_empty() {
                debug!(sweeps, expanded, "fringe: nothing left under any threshold");
                return Ok((state, None));
            }

            trace!(sweeps, flimit = fmin, deferred = later.len(), "fringe: raising threshold");
            flimit = fmin;
            now = later;
        }
    }
}

impl PathSearch for FringeSearch {
    fn find_path<G, H>(&self, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node) -> Result<SearchResult<G::Node>>
    where
        G: WeightedGraph,
        H: Heuristic<G>,
    {
        FringeSearch::find_path(self, graph, heuristic, start, goal)
    }
}
