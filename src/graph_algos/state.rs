use std::{fmt::Debug, hash::Hash};

use crate::collections::FxIndexMap;
use crate::errors::{PathPlannerError, Result};
use super::{shortest_path, GraphNodeMap, Path, NO_PARENT};


/// Per-search bookkeeping: best known cost and parent for every node touched
/// Created fresh by each search call and dropped when it returns
/// Indices handed out are stable, nodes are never removed
#[derive(Debug)]
pub(crate) struct SearchState<N> {
    node_map: GraphNodeMap<N, f64>,
}

impl<N> SearchState<N>
where
    N: Eq + Hash + Clone + Debug,
{

    /// Start a search at `start`, returns the state and the start index
    pub fn new(start: N) -> (Self, usize) {
        let mut node_map = GraphNodeMap::default();
        let start_index = node_map.insert_full(start, (NO_PARENT, 0.0)).0;
        (Self { node_map }, start_index)
    }

    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Node and its best known cost
    pub fn get(&self, index: usize) -> Result<(&N, f64)> {
        self.node_map.get_index(index)
            .map(|(node, &(_, cost))| (node, cost))
            .ok_or(PathPlannerError::BrokenPath)
    }

    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.node_map.get_index_of(node)
    }

    /// Record `cost` for `node` if it is new or strictly cheaper than what is known
    /// Returns the node index when the record changed
    pub fn relax(&mut self, node: &N, parent: usize, cost: f64) -> Option<usize> {
        match self.node_map.get_full_mut(node) {
            Some((index, _, entry)) => {
                if cost < entry.1 {
                    *entry = (parent, cost);
                    Some(index)
                } else {
                    // The existing path is at least as good
                    None
                }
            }
            None => Some(self.node_map.insert_full(node.clone(), (parent, cost)).0),
        }
    }

    /// Path from the start to the node at `goal_index`
    pub fn path_to(&self, goal_index: usize) -> Result<Path<N>> {
        let (_, cost) = self.get(goal_index)?;
        let nodes = shortest_path(&self.node_map, goal_index)?;
        Ok(Path { nodes, cost })
    }

    /// Best known cost of every node touched
    pub fn into_costs(self) -> FxIndexMap<N, f64> {
        self.node_map.into_iter().map(|(node, (_, cost))| (node, cost)).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relax_only_on_strict_improvement() {
        let (mut state, start) = SearchState::new("a");
        assert_eq!(start, 0);

        let b = state.relax(&"b", start, 4.0).unwrap();
        assert_eq!(state.relax(&"b", start, 4.0), None);
        assert_eq!(state.relax(&"b", start, 6.0), None);

        let c = state.relax(&"c", start, 1.0).unwrap();
        assert_eq!(state.relax(&"b", c, 2.0), Some(b));
        assert_eq!(state.get(b).unwrap(), (&"b", 2.0));
        assert_eq!(state.len(), 3);

        let path = state.path_to(b).unwrap();
        assert_eq!(path.nodes, vec!["a", "c", "b"]);
        assert_eq!(path.cost, 2.0);
    }

    #[test]
    fn test_into_costs() {
        let (mut state, start) = SearchState::new(1);
        state.relax(&2, start, 1.5);
        let costs = state.into_costs();
        assert_eq!(costs.get(&1), Some(&0.0));
        assert_eq!(costs.get(&2), Some(&1.5));
        assert_eq!(costs.get(&3), None);
    }
}
