use itertools::Itertools;
use rayon::prelude::*;

use crate::points::{Point, PointStore};

/// Point counts above this rank their pairs on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 512;

/// A candidate connection between two points, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    a: usize,
    b: usize,
    cost: u128,
}

impl Edge {
    /// Builds the edge between two distinct points of the store.
    ///
    /// Only the ranker calls this, always with `i < j`, so there are no self-edges.
    pub(crate) fn between(points: &PointStore, i: usize, j: usize) -> Self {
        let slice = points.as_slice();
        Self {
            a: i,
            b: j,
            cost: squared_distance(slice[i], slice[j]),
        }
    }

    pub fn a(&self) -> usize {
        self.a
    }

    pub fn b(&self) -> usize {
        self.b
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Squared euclidean distance between the endpoints.
    pub fn cost(&self) -> u128 {
        self.cost
    }
}

/// Squared distance in 128-bit arithmetic. Exact for coordinates within
/// [`crate::points::COORD_LIMIT`]; saturates beyond it.
pub fn squared_distance(p: Point, q: Point) -> u128 {
    let axis = |a: i64, b: i64| {
        let delta = (i128::from(a) - i128::from(b)).unsigned_abs();
        delta.saturating_mul(delta)
    };
    axis(p.x, q.x)
        .saturating_add(axis(p.y, q.y))
        .saturating_add(axis(p.z, q.z))
}

/// Ranks every unordered pair of points by ascending squared distance.
///
/// Pairs are generated by ascending `i`, then ascending `j`, and the sort is
/// stable, so equal costs keep that generation order.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn rank(points: &PointStore) -> Vec<Edge> {
    if points.len() > PARALLEL_THRESHOLD {
        rank_parallel(points)
    } else {
        rank_sequential(points)
    }
}

pub fn rank_sequential(points: &PointStore) -> Vec<Edge> {
    let mut edges = (0..points.len())
        .tuple_combinations()
        .map(|(i, j)| Edge::between(points, i, j))
        .collect::<Vec<_>>();

    edges.sort_by_key(Edge::cost);
    tracing::debug!(edges = edges.len(), "ranked edges");
    edges
}

/// Same output as [`rank_sequential`], with costs computed and sorted on the rayon pool.
pub fn rank_parallel(points: &PointStore) -> Vec<Edge> {
    let n = points.len();
    // collect preserves the (i, j) generation order.
    let mut edges = (0..n)
        .into_par_iter()
        .flat_map_iter(move |i| (i + 1..n).map(move |j| Edge::between(points, i, j)))
        .collect::<Vec<_>>();

    // par_sort_by_key is stable.
    edges.par_sort_by_key(Edge::cost);
    tracing::debug!(edges = edges.len(), "ranked edges in parallel");
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::COORD_LIMIT;

    use rstest::rstest;

    fn store(raw: &[(i64, i64, i64)]) -> PointStore {
        raw.iter().map(|&(x, y, z)| Point::new(x, y, z)).collect()
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(5, 10)]
    #[case(20, 190)]
    fn edge_count_is_pair_count(#[case] n: i64, #[case] expected: usize) {
        let points = (0..n).map(|i| Point::new(i, 0, 0)).collect::<PointStore>();
        assert_eq!(rank(&points).len(), expected);
    }

    #[test]
    fn cost_is_exact_squared_distance() {
        let points = store(&[(0, 0, 0), (-3, 4, 12)]);
        let edges = rank(&points);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].endpoints(), (0, 1));
        assert_eq!(edges[0].cost(), 9 + 16 + 144);
    }

    #[test]
    fn ties_keep_generation_order() {
        // Corners of a unit square: four edges of cost 1, two diagonals of cost 2.
        let points = store(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)]);
        let order = rank(&points)
            .iter()
            .map(Edge::endpoints)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![(0, 1), (0, 2), (1, 3), (2, 3), (0, 3), (1, 2)]);
    }

    #[test]
    fn far_apart_points_do_not_overflow() {
        let points = store(&[(4_000_000_000, 0, 0), (-4_000_000_000, 0, 0), (0, 0, 0)]);
        let edges = rank(&points);
        let order = edges.iter().map(Edge::endpoints).collect::<Vec<_>>();

        assert_eq!(order, vec![(0, 2), (1, 2), (0, 1)]);
        assert_eq!(edges[2].cost(), 64_000_000_000_000_000_000);
    }

    #[rstest]
    #[case(Point::splat(COORD_LIMIT), Point::splat(-COORD_LIMIT), 3 << 126)]
    #[case(Point::new(i64::MAX, 0, 0), Point::new(i64::MIN, 0, 0), u128::from(u64::MAX).pow(2))]
    #[case(Point::splat(i64::MAX), Point::splat(i64::MIN), u128::MAX)]
    fn extreme_distances(#[case] p: Point, #[case] q: Point, #[case] expected: u128) {
        assert_eq!(squared_distance(p, q), expected);
    }

    #[test]
    fn parallel_matches_sequential() {
        let points = (0..60i64)
            .map(|i| Point::new((i * 7) % 11, (i * 3) % 5, (i * 13) % 17 - 8))
            .collect::<PointStore>();
        assert_eq!(rank_sequential(&points), rank_parallel(&points));
    }
}
