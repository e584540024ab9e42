use bitvec::prelude::*;

use crate::edges::Edge;
use crate::error::{ClusterError, Result};

/// Circuit membership by id: each set's root carries the circuit size, so
/// the size lookups behind the queries are a root walk away.
#[derive(Debug, Clone)]
struct Dsu {
    parent: Vec<usize>,
    sizes: Vec<usize>,
}

impl Dsu {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            i
        } else {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
            root
        }
    }

    /// Root lookup without compression, for read-only views.
    fn root(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    /// Joins the circuits of `i` and `j`, the larger one absorbing the smaller.
    /// `false` means both were already in the same circuit.
    fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.sizes[root_i] < self.sizes[root_j] {
            self.parent[root_i] = root_j;
            self.sizes[root_j] += self.sizes[root_i];
        } else {
            self.parent[root_j] = root_i;
            self.sizes[root_i] += self.sizes[root_j];
        }
        true
    }

    fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.parent.len()).filter(|&i| self.parent[i] == i)
    }
}

/// What a single applied edge did to the partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Two singletons formed a new circuit.
    Paired,
    /// A singleton joined an existing circuit.
    Attached,
    /// Both endpoints already shared a circuit.
    Redundant,
    /// Two circuits became one.
    Merged,
}

/// Why [`PartitionState::advance`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    LimitReached,
    SingletonsExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Edges applied by this call.
    pub applied: usize,
    pub stop: Stop,
}

/// The evolving partition of point ids into circuits and untouched singletons.
///
/// Every id is either a singleton or a member of exactly one circuit; circuits
/// always have at least two members. Edges are consumed from a ranked slice in
/// order, and the state remembers how many it has consumed so a bounded run can
/// be continued later.
#[derive(Debug, Clone)]
pub struct PartitionState {
    dsu: Dsu,
    /// Ids touched by at least one applied edge.
    touched: BitVec,
    singletons: usize,
    circuits: usize,
    applied: usize,
    last_applied: Option<(usize, usize)>,
}

impl PartitionState {
    pub fn new(points: usize) -> Self {
        Self {
            dsu: Dsu::new(points),
            touched: bitvec![0; points],
            singletons: points,
            circuits: 0,
            applied: 0,
            last_applied: None,
        }
    }

    /// Applies one edge. Redundant edges still count as applied and still
    /// become the last applied edge.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is out of range for this partition.
    pub fn apply(&mut self, edge: &Edge) -> Transition {
        let (a, b) = edge.endpoints();
        let fresh_a = self.claim(a);
        let fresh_b = self.claim(b);
        let joined = self.dsu.union(a, b);

        let transition = match (fresh_a, fresh_b) {
            (true, true) => {
                self.circuits += 1;
                Transition::Paired
            }
            (true, false) | (false, true) => Transition::Attached,
            (false, false) if joined => {
                self.circuits -= 1;
                Transition::Merged
            }
            (false, false) => Transition::Redundant,
        };

        self.applied += 1;
        self.last_applied = Some((a, b));
        tracing::trace!(a, b, cost = edge.cost(), ?transition, "applied edge");
        transition
    }

    /// Marks `id` as touched. Returns `true` if it was a singleton.
    fn claim(&mut self, id: usize) -> bool {
        if self.touched[id] {
            return false;
        }
        self.touched.set(id, true);
        self.singletons -= 1;
        true
    }

    /// Applies ranked edges, resuming after the ones already applied.
    ///
    /// With `Some(limit)` it stops once `limit` edges have been applied in total,
    /// with `None` only once no singleton is left. Both modes stop early when the
    /// singletons run out.
    #[tracing::instrument(skip(self, edges), fields(points = self.len(), edges = edges.len()))]
    pub fn advance(&mut self, edges: &[Edge], limit: Option<usize>) -> Result<Advance> {
        match limit {
            Some(limit) if limit > edges.len() => {
                return Err(ClusterError::LimitExceedsEdgeCount {
                    limit,
                    edges: edges.len(),
                });
            }
            None if self.len() < 2 => {
                return Err(ClusterError::InsufficientPoints {
                    found: self.len(),
                    required: 2,
                });
            }
            _ => {}
        }

        let start = self.applied;
        let stop = loop {
            if self.singletons == 0 {
                break Stop::SingletonsExhausted;
            }
            if limit.is_some_and(|limit| self.applied >= limit) {
                break Stop::LimitReached;
            }
            let edge = self.next_edge(edges)?;
            self.apply(edge);
        };

        tracing::debug!(
            applied = self.applied - start,
            ?stop,
            circuits = self.circuits,
            singletons = self.singletons,
            "advanced partition"
        );
        Ok(Advance {
            applied: self.applied - start,
            stop,
        })
    }

    /// Applies ranked edges until a single circuit spans every point, and
    /// returns the endpoints of the edge that completed it.
    ///
    /// Running out of singletons is not enough: the last singleton can join one
    /// circuit while another is still separate.
    #[tracing::instrument(skip(self, edges), fields(points = self.len(), edges = edges.len()))]
    pub fn connect(&mut self, edges: &[Edge]) -> Result<(usize, usize)> {
        if self.len() < 2 {
            return Err(ClusterError::InsufficientPoints {
                found: self.len(),
                required: 2,
            });
        }

        while !self.is_connected() {
            let edge = self.next_edge(edges)?;
            self.apply(edge);
        }

        tracing::debug!(applied = self.applied, last = ?self.last_applied, "fully connected");
        self.last_applied
            .ok_or(ClusterError::UnreachableFullConnectivity {
                points: self.len(),
                edges: edges.len(),
            })
    }

    fn next_edge<'e>(&self, edges: &'e [Edge]) -> Result<&'e Edge> {
        edges
            .get(self.applied)
            .ok_or(ClusterError::UnreachableFullConnectivity {
                points: self.len(),
                edges: edges.len(),
            })
    }

    /// Total number of points, touched or not.
    pub fn len(&self) -> usize {
        self.touched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    pub fn singleton_count(&self) -> usize {
        self.singletons
    }

    /// Number of circuits (components with at least two members).
    pub fn component_count(&self) -> usize {
        self.circuits
    }

    /// Edges applied so far, redundant ones included.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn last_applied(&self) -> Option<(usize, usize)> {
        self.last_applied
    }

    pub fn is_connected(&self) -> bool {
        self.singletons == 0 && self.circuits == 1
    }

    pub fn singletons(&self) -> Vec<usize> {
        self.touched.iter_zeros().collect()
    }

    /// Circuit members, each list ascending, circuits ordered by their smallest id.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut slots: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.circuits);

        for id in self.touched.iter_ones() {
            let root = self.dsu.root(id);
            let slot = *slots[root].get_or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(id);
        }
        groups
    }

    /// Sizes of the circuits, singletons excluded.
    pub fn component_sizes(&self) -> Vec<usize> {
        self.dsu
            .roots()
            .filter(|&root| self.touched[root])
            .map(|root| self.dsu.sizes[root])
            .collect()
    }

    /// Sizes of every part of the partition, each singleton counted as a
    /// one-element component.
    pub fn partition_sizes(&self) -> Vec<usize> {
        self.dsu.roots().map(|root| self.dsu.sizes[root]).collect()
    }

    /// Checks that circuits and singletons cover every id exactly once and that
    /// the cached counters agree with the structure.
    pub fn is_consistent(&self) -> bool {
        let components = self.components();
        let mut seen: BitVec = bitvec![0; self.len()];

        for id in components.iter().flatten().copied().chain(self.singletons()) {
            if seen[id] {
                return false;
            }
            seen.set(id, true);
        }

        let covered: usize = components.iter().map(Vec::len).sum();
        seen.all()
            && covered + self.singletons == self.len()
            && components.len() == self.circuits
            && components.iter().all(|members| members.len() >= 2)
    }
}
