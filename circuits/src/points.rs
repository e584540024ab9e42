use glam::I64Vec3;
use itertools::Itertools;

/// A junction box position. Coordinates stay integral so distances are exact.
pub type Point = I64Vec3;

/// Largest coordinate magnitude the parser accepts. Within it every squared
/// distance fits a `u128` exactly.
pub const COORD_LIMIT: i64 = 1 << 62;

/// How repeated coordinate triples in the input are treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Duplicates {
    /// Every input line is its own point, even when coordinates repeat.
    #[default]
    Keep,
    /// Repeated triples collapse into the first occurrence.
    Collapse,
}

/// Immutable set of points addressed by their 0-based position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn load(raw: impl IntoIterator<Item = Point>) -> Self {
        Self::load_with(raw, Duplicates::Keep)
    }

    /// Loads points applying the given duplicate policy. Ids follow input order
    /// (first occurrence order when collapsing).
    pub fn load_with(raw: impl IntoIterator<Item = Point>, duplicates: Duplicates) -> Self {
        let points = match duplicates {
            Duplicates::Keep => raw.into_iter().collect(),
            Duplicates::Collapse => raw.into_iter().unique().collect(),
        };
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn coordinates(&self, id: usize) -> Option<Point> {
        self.points.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.points.iter().copied().enumerate()
    }

    pub(crate) fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::load(iter)
    }
}
