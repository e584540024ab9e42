use junction_circuits::{
    cluster_bounded, cluster_full, Circuits, ClusterError, Duplicates, PartitionState, Point,
    PointStore, Stop,
};
use rstest::{fixture, rstest};

fn store(raw: &[(i64, i64, i64)]) -> PointStore {
    raw.iter().map(|&(x, y, z)| Point::new(x, y, z)).collect()
}

#[fixture]
fn two_pairs_and_a_loner() -> PointStore {
    store(&[(0, 0, 0), (0, 0, 1), (10, 10, 10), (10, 10, 11), (20, 0, 0)])
}

#[rstest]
fn nearest_pairs_form_two_circuits(two_pairs_and_a_loner: PointStore) {
    let circuits = Circuits::new(&two_pairs_and_a_loner);
    let state = circuits.bounded(2).unwrap();

    assert_eq!(state.components(), vec![vec![0, 1], vec![2, 3]]);
    assert_eq!(state.singletons(), vec![4]);
    assert_eq!(cluster_bounded(&two_pairs_and_a_loner, 2), Ok(4));
}

#[rstest]
fn full_connectivity_ends_on_the_loner(two_pairs_and_a_loner: PointStore) {
    assert_eq!(cluster_full(&two_pairs_and_a_loner), Ok((2, 4)));
    assert_eq!(cluster_full(&two_pairs_and_a_loner), Ok((2, 4)));
}

#[test]
fn full_run_stops_when_the_last_singleton_is_touched() {
    // Box 4 joins {0, 1} while {2, 3} is still a separate circuit.
    let points = store(&[(0, 0, 0), (1, 0, 0), (100, 0, 0), (101, 0, 0), (2, 0, 0)]);
    assert_eq!(cluster_full(&points), Ok((1, 4)));

    let circuits = Circuits::new(&points);
    let unbounded = circuits.unbounded().unwrap();
    assert_eq!(unbounded.components(), vec![vec![0, 1, 4], vec![2, 3]]);

    let connected = circuits.connected().unwrap();
    assert_eq!(connected.last_applied(), Some((2, 4)));
}

#[rstest]
fn zero_limit_leaves_only_unit_circuits(two_pairs_and_a_loner: PointStore) {
    assert_eq!(cluster_bounded(&two_pairs_and_a_loner, 0), Ok(1));
}

#[rstest]
fn bounded_run_stops_once_everything_is_touched(two_pairs_and_a_loner: PointStore) {
    let circuits = Circuits::new(&two_pairs_and_a_loner);
    let mut state = PartitionState::new(5);
    let advance = state.advance(circuits.edges(), Some(10)).unwrap();

    assert_eq!(advance.stop, Stop::SingletonsExhausted);
    assert_eq!(advance.applied, 6);
    assert_eq!(cluster_bounded(&two_pairs_and_a_loner, 10), Ok(5));
}

#[rstest]
#[case(&[], 3)]
#[case(&[(1, 1, 1)], 3)]
#[case(&[(1, 1, 1), (2, 2, 2)], 3)]
fn bounded_needs_three_points(#[case] raw: &[(i64, i64, i64)], #[case] required: usize) {
    let points = store(raw);
    assert_eq!(
        cluster_bounded(&points, 0),
        Err(ClusterError::InsufficientPoints {
            found: raw.len(),
            required
        })
    );
}

#[rstest]
fn limit_beyond_edges_is_an_error(two_pairs_and_a_loner: PointStore) {
    assert_eq!(
        cluster_bounded(&two_pairs_and_a_loner, 11),
        Err(ClusterError::LimitExceedsEdgeCount {
            limit: 11,
            edges: 10
        })
    );
}

#[test]
fn two_points_need_one_edge() {
    let points = store(&[(5, -5, 5), (-5, 5, -5)]);
    let circuits = Circuits::new(&points);
    assert_eq!(circuits.edges().len(), 1);
    assert_eq!(circuits.connected().unwrap().applied(), 1);
    assert_eq!(cluster_full(&points), Ok((0, 1)));
}

#[test]
fn single_point_cannot_connect() {
    assert_eq!(
        cluster_full(&store(&[(0, 0, 0)])),
        Err(ClusterError::InsufficientPoints {
            found: 1,
            required: 2
        })
    );
}

#[rstest]
#[case(Duplicates::Keep, Ok((1, 3)))]
#[case(Duplicates::Collapse, Ok((1, 2)))]
fn duplicate_policy_changes_the_answer(
    #[case] duplicates: Duplicates,
    #[case] expected: Result<(usize, usize), ClusterError>,
) {
    // The repeated origin is its own point only when duplicates are kept.
    let raw = [(0, 0, 0), (1, 0, 0), (0, 0, 0), (5, 0, 0)]
        .into_iter()
        .map(|(x, y, z)| Point::new(x, y, z));
    let points = PointStore::load_with(raw, duplicates);
    assert_eq!(cluster_full(&points), expected);
}
