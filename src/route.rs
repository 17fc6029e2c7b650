use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SearchConfig;
use crate::errors::Result;
use crate::graph::WeightedGraph;
use crate::graph_algos::{dijkstra, AStar, FringeSearch, SearchResult};
use crate::heuristics::Heuristic;


/// Search strategy to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    AStar,
    Fringe,
    /// Ignores the heuristic
    Dijkstra,
}


/// Run one search with the chosen algorithm
pub fn search<G, H>(algorithm: Algorithm, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node, config: &SearchConfig) -> Result<SearchResult<G::Node>>
where
    G: WeightedGraph,
    H: Heuristic<G>,
{
    match algorithm {
        Algorithm::AStar => AStar::new(config.clone()).find_path(graph, heuristic, start, goal),
        Algorithm::Fringe => FringeSearch::new(config.clone()).find_path(graph, heuristic, start, goal),
        Algorithm::Dijkstra => dijkstra(graph, start, goal, config),
    }
}


/// Route as handed to a map front end
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    /// [latitude, longitude] of every path node that has coordinates
    pub route_coordinates: Vec<[f64; 2]>,
    /// Total path cost, meters on road networks
    pub length: f64,
    /// Seconds spent searching
    pub time_taken: f64,
}

impl RouteReport {

    /// None when no path was found
    pub fn from_result<G: WeightedGraph>(graph: &G, result: &SearchResult<G::Node>, elapsed: Duration) -> Option<Self> {
        let path = result.path()?;
        let route_coordinates = path.nodes.iter()
            .filter_map(|node| graph.coordinates(node))
            .map(|point| [point.y, point.x])
            .collect();

        Some(Self {
            route_coordinates,
            length: path.cost,
            time_taken: elapsed.as_secs_f64(),
        })
    }
}


/// Time a search and wrap its outcome in a RouteReport
pub fn plan_route<G, H>(algorithm: Algorithm, graph: &G, heuristic: &H, start: &G::Node, goal: &G::Node, config: &SearchConfig) -> Result<Option<RouteReport>>
where
    G: WeightedGraph,
    H: Heuristic<G>,
{
    let started = Instant::now();
    let result = search(algorithm, graph, heuristic, start, goal, config)?;
    let elapsed = started.elapsed();

    info!(?algorithm, found = result.is_found(), length = ?result.cost(), elapsed_ms = elapsed.as_millis() as u64, "route planned");
    Ok(RouteReport::from_result(graph, &result, elapsed))
}
