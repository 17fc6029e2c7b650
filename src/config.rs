use std::fmt::Debug;
use serde::{Deserialize, Serialize};
use crate::errors::{PathPlannerError, Result};


/// What to do with an edge that carries no weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingWeight {
    /// Edge is not traversable. Each skipped edge is logged
    #[default]
    Skip,
    /// Abort the search with `PathPlannerError::MissingEdgeWeight`
    Reject,
    /// Use the given weight instead, must be finite and non-negative
    Fallback(f64),
}

impl MissingWeight {

    /// Turn the weight declared on an edge into the cost used by a search
    /// Returns Ok(None) when the edge must be skipped
    pub(crate) fn resolve<N: Debug>(&self, from: &N, to: &N, declared: Option<f64>) -> Result<Option<f64>> {
        let weight = match (declared, self) {
            (Some(weight), _) => weight,
            (None, MissingWeight::Skip) => {
                tracing::warn!(from = ?from, to = ?to, "skipping edge without weight");
                return Ok(None);
            }
            (None, MissingWeight::Reject) => {
                return Err(PathPlannerError::MissingEdgeWeight {
                    from: format!("{from:?}"),
                    to: format!("{to:?}"),
                });
            }
            (None, MissingWeight::Fallback(weight)) => *weight,
        };

        if !weight.is_finite() || weight < 0.0 {
            return Err(PathPlannerError::InvalidEdgeWeight {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
                weight,
            });
        }

        Ok(Some(weight))
    }
}


/// Settings shared by every search algorithm
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub missing_weight: MissingWeight,
    /// Cap on outer loop iterations: heap pops for A* and Dijkstra, sweeps for Fringe Search
    pub max_iterations: Option<usize>,
}

impl SearchConfig {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_weight(mut self, missing_weight: MissingWeight) -> Self {
        self.missing_weight = missing_weight;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Fails once `iterations` goes past the configured cap
    pub(crate) fn check_iterations(&self, iterations: usize) -> Result<()> {
        match self.max_iterations {
            Some(limit) if iterations > limit => Err(PathPlannerError::IterationLimit { limit }),
            _ => Ok(()),
        }
    }
}
