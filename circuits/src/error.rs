use miette::Diagnostic;
use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ClusterError {
    /// Not enough points to form the requested structure.
    #[error("need at least {required} points, found {found}")]
    #[diagnostic(
        code(circuits::insufficient_points),
        help("edges need 2 points and the three-largest product needs 3")
    )]
    InsufficientPoints {
        /// Points available.
        found: usize,
        /// Points required by the operation.
        required: usize,
    },

    /// Every ranked edge was considered and the points are still not connected.
    #[error("{points} points could not be fully connected with {edges} edges")]
    #[diagnostic(code(circuits::unreachable_full_connectivity))]
    UnreachableFullConnectivity {
        /// Points in the partition.
        points: usize,
        /// Edges that were available.
        edges: usize,
    },

    /// The bounded cutoff asks for more edges than the point set generates.
    #[error("cutoff of {limit} edges exceeds the {edges} edges available")]
    #[diagnostic(
        code(circuits::limit_exceeds_edge_count),
        help("n points generate n * (n - 1) / 2 edges")
    )]
    LimitExceedsEdgeCount {
        /// Requested cutoff.
        limit: usize,
        /// Edges that were available.
        edges: usize,
    },

    /// A partition id has no point in the store it is read against.
    #[error("point {id} is not in a store of {points} points")]
    #[diagnostic(
        code(circuits::store_mismatch),
        help("read the partition against the store it was built from")
    )]
    StoreMismatch {
        /// Id taken from the partition.
        id: usize,
        /// Points in the store.
        points: usize,
    },
}

/// Result type used by the engine.
pub type Result<T, E = ClusterError> = std::result::Result<T, E>;
