use crate::points::Duplicates;

/// Edges connected before part 1 measures the circuits.
pub const PUZZLE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Bounded-mode cutoff, in ranked edges.
    pub limit: usize,
    pub duplicates: Duplicates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: PUZZLE_LIMIT,
            duplicates: Duplicates::Keep,
        }
    }
}

impl Config {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }
}
