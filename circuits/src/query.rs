use itertools::Itertools;

use crate::error::{ClusterError, Result};
use crate::partition::PartitionState;
use crate::points::{Point, PointStore};

/// Product of the three largest part sizes, singletons promoted to their own
/// one-element components.
pub fn bounded_product(state: &PartitionState) -> Result<u64> {
    if state.len() < 3 {
        return Err(ClusterError::InsufficientPoints {
            found: state.len(),
            required: 3,
        });
    }

    let product = state
        .partition_sizes()
        .into_iter()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .map(|size| size as u64)
        .product();

    Ok(product)
}

/// Maps the coordinates of the last applied edge's endpoints through `answer`.
///
/// `points` must be the store the partition was built from; an endpoint it
/// does not hold is a [`ClusterError::StoreMismatch`].
pub fn full_connectivity_answer<T>(
    state: &PartitionState,
    points: &PointStore,
    answer: impl FnOnce(Point, Point) -> T,
) -> Result<T> {
    let (a, b) = state
        .last_applied()
        .ok_or(ClusterError::UnreachableFullConnectivity {
            points: state.len(),
            edges: state.applied(),
        })?;

    let coordinates = |id: usize| {
        points.coordinates(id).ok_or(ClusterError::StoreMismatch {
            id,
            points: points.len(),
        })
    };
    Ok(answer(coordinates(a)?, coordinates(b)?))
}

/// The puzzle's reading of the final connection: product of both X coordinates.
pub fn x_product(p: Point, q: Point) -> i128 {
    i128::from(p.x) * i128::from(q.x)
}
