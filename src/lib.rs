//! Shortest paths over weighted road networks.
//!
//! Two best-first searches share one graph and heuristic abstraction:
//! [`AStar`] keeps a binary-heap open list, [`FringeSearch`] sweeps a fringe
//! under a rising f-cost threshold. Both return the same cost as the
//! [`dijkstra`] baseline for any admissible heuristic.
//!
//! ```
//! use roadpath::{AStar, Haversine, Point, RoadGraph, SearchResult};
//!
//! let mut graph = RoadGraph::new();
//! graph.add_node(1, Some(Point::new(24.9384, 60.1699)));
//! graph.add_node(2, Some(Point::new(24.9390, 60.1700)));
//! graph.add_edge(1, 2, 120.0);
//!
//! let result = AStar::default().find_path(&graph, &Haversine, &1, &2).unwrap();
//! assert!(matches!(result, SearchResult::Found(ref path) if path.nodes == vec![1, 2]));
//! ```

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod heuristics;
pub mod route;
pub mod spatial;

pub use collections::FxIndexMap;
pub use config::{MissingWeight, SearchConfig};
pub use errors::{PathPlannerError, Result};
pub use geometry::Point;
pub use graph::{RoadGraph, WeightedGraph};
pub use graph_algos::{dijkstra, dijkstra_costs, AStar, FringeSearch, Path, PathSearch, SearchResult};
pub use heuristics::{Euclidean, Haversine, Heuristic, Manhattan, NullHeuristic};
pub use route::{plan_route, search, Algorithm, RouteReport};
pub use spatial::NodeLocator;
