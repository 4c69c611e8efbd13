use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An overlap score with a secondary key that decides between equal scores.
///
/// Entries are ordered by score first and by tie-break second.
/// To prefer smaller tie-break values, wrap them in [`std::cmp::Reverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredEntry<TieBreak> {
    pub score: u64,
    pub tie_break: TieBreak,
}

impl<TieBreak> ScoredEntry<TieBreak> {
    pub fn new(score: u64, tie_break: TieBreak) -> Self {
        Self { score, tie_break }
    }
}

impl<TieBreak: Ord> Ord for ScoredEntry<TieBreak> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.tie_break.cmp(&other.tie_break))
    }
}

impl<TieBreak: Ord> PartialOrd for ScoredEntry<TieBreak> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
