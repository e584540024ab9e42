//! Nearest-neighbor circuits over 3D junction boxes.
//!
//! Points are connected pairwise by ascending squared distance while a
//! disjoint-set partition tracks the circuits that form. Two readings of that
//! process are exposed: the product of the three largest circuits after a fixed
//! number of connections ([`cluster_bounded`]), and the pair of points whose
//! connection finally joins everything into one circuit ([`cluster_full`]).

pub mod config;
pub mod edges;
pub mod error;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod partition;
pub mod points;
pub mod query;

pub use config::Config;
pub use edges::{rank, Edge};
pub use error::{ClusterError, Result};
pub use partition::{Advance, PartitionState, Stop, Transition};
pub use points::{Duplicates, Point, PointStore};

/// Ranked edges of a point set, computed once and shared by both queries.
#[derive(Debug, Clone)]
pub struct Circuits<'a> {
    points: &'a PointStore,
    edges: Vec<Edge>,
}

impl<'a> Circuits<'a> {
    pub fn new(points: &'a PointStore) -> Self {
        Self {
            points,
            edges: rank(points),
        }
    }

    pub fn points(&self) -> &PointStore {
        self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Partition after the first `limit` ranked edges.
    pub fn bounded(&self, limit: usize) -> Result<PartitionState> {
        let mut state = PartitionState::new(self.points.len());
        state.advance(&self.edges, Some(limit))?;
        Ok(state)
    }

    /// Partition at the moment no point is left untouched.
    pub fn unbounded(&self) -> Result<PartitionState> {
        let mut state = PartitionState::new(self.points.len());
        state.advance(&self.edges, None)?;
        Ok(state)
    }

    /// Partition at the moment one circuit spans every point.
    pub fn connected(&self) -> Result<PartitionState> {
        let mut state = PartitionState::new(self.points.len());
        state.connect(&self.edges)?;
        Ok(state)
    }

    pub fn bounded_product(&self, limit: usize) -> Result<u64> {
        query::bounded_product(&self.bounded(limit)?)
    }

    /// Ids of the two points joined by the edge that touched the last singleton.
    pub fn last_connection(&self) -> Result<(usize, usize)> {
        self.unbounded()?
            .last_applied()
            .ok_or(ClusterError::UnreachableFullConnectivity {
                points: self.points.len(),
                edges: self.edges.len(),
            })
    }
}

/// Product of the three largest circuit sizes after the first `limit` ranked
/// edges, unconnected points counting as circuits of one.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn cluster_bounded(points: &PointStore, limit: usize) -> Result<u64> {
    if points.len() < 3 {
        return Err(ClusterError::InsufficientPoints {
            found: points.len(),
            required: 3,
        });
    }
    Circuits::new(points).bounded_product(limit)
}

/// Ids of the endpoints of the edge that touched the last singleton, running
/// the partition in unbounded mode.
///
/// Use [`Circuits::connected`] when the run must continue until a single
/// circuit spans every point.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn cluster_full(points: &PointStore) -> Result<(usize, usize)> {
    if points.len() < 2 {
        return Err(ClusterError::InsufficientPoints {
            found: points.len(),
            required: 2,
        });
    }
    Circuits::new(points).last_connection()
}
