use thiserror::Error;


/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PathPlannerError>;

/// Failures a search can report.
/// An unreachable goal or a node missing from the graph is not an error,
/// those come back as `SearchResult::NotFound`.
#[derive(Debug, Error)]
pub enum PathPlannerError {
    /// Edge has no declared weight and the policy is `MissingWeight::Reject`
    #[error("edge {from} -> {to} has no weight")]
    MissingEdgeWeight { from: String, to: String },

    /// Weight is negative, NaN or infinite
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidEdgeWeight { from: String, to: String, weight: f64 },

    /// Search gave up after `limit` outer iterations
    #[error("search exceeded the iteration limit of {limit}")]
    IterationLimit { limit: usize },

    /// Back-pointers do not lead back to the start node
    #[error("parent links are inconsistent, path cannot be rebuilt")]
    BrokenPath,

    #[error("kd-tree error: {0}")]
    KdTreeError(String),
}


impl From<kdtree::ErrorKind> for PathPlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        PathPlannerError::KdTreeError(error.to_string())
    }
}
