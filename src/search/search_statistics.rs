//! Counters collected while searching.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Positions reached by applying a move.
    pub nodes: u64,
    /// Calls into the static evaluator.
    pub evaluations: u64,
}

impl SearchStatistics {
    pub fn merge(&mut self, rhs: SearchStatistics) {
        self.nodes += rhs.nodes;
        self.evaluations += rhs.evaluations;
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nodes {} evaluations {}", self.nodes, self.evaluations)
    }
}
