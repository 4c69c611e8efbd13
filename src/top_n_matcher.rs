use std::{
    cmp::{Ordering, Reverse},
    collections::BTreeMap,
};

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    bigram::bigrams, bigram_index::BigramIndex, bounded_max_heap::BoundedMaxHeap,
    scored_entry::ScoredEntry,
};

/// How the bigram occurrences shared by a query and a reference are turned into a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Scoring {
    /// Each occurrence of a bigram in the reference counts all its occurrences in the query.
    #[default]
    Weighted,
    /// Each occurrence of a bigram is matched at most once on either side.
    Clipped,
}

impl Scoring {
    fn score(self, reference_count: u32, query_count: u32) -> u64 {
        match self {
            Self::Weighted => u64::from(reference_count) * u64::from(query_count),
            Self::Clipped => u64::from(reference_count.min(query_count)),
        }
    }
}

/// A reference retained in the top-N heap of a query.
///
/// Ranks by score, then by the smaller length difference between query and reference, then by the smaller reference label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMatch {
    pub reference: usize,
    pub entry: ScoredEntry<Reverse<usize>>,
}

impl ReferenceMatch {
    pub fn new(reference: usize, score: u64, length_difference: usize) -> Self {
        Self {
            reference,
            entry: ScoredEntry::new(score, Reverse(length_difference)),
        }
    }

    pub fn score(&self) -> u64 {
        self.entry.score
    }

    pub fn length_difference(&self) -> usize {
        self.entry.tie_break.0
    }
}

impl Ord for ReferenceMatch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry
            .cmp(&other.entry)
            .then_with(|| other.reference.cmp(&self.reference))
    }
}

impl PartialOrd for ReferenceMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the best matching references for each query of a [`BigramIndex`].
pub struct TopNMatcher<'index, Element> {
    index: &'index BigramIndex<Element>,
    heaps: Vec<BoundedMaxHeap<ReferenceMatch>>,
    scoring: Scoring,
    scores: Vec<u64>,
}

impl<'index, Element: Ord + Clone> TopNMatcher<'index, Element> {
    pub fn new(index: &'index BigramIndex<Element>, top_n: usize, scoring: Scoring) -> Self {
        let query_count = index.sequence_count();

        Self {
            index,
            heaps: (0..query_count)
                .map(|_| BoundedMaxHeap::new(top_n))
                .collect(),
            scoring,
            scores: vec![0; query_count],
        }
    }

    /// Scores `reference` against all queries and offers it to the heap of every query.
    ///
    /// The score is aggregated over all bigrams of the reference before insertion,
    /// such that each query receives exactly one entry per reference.
    /// Queries that share no bigram with the reference receive a score of zero.
    pub fn match_reference(&mut self, reference_label: usize, reference: &[Element]) {
        let mut reference_counts = BTreeMap::new();
        for bigram in bigrams(reference) {
            let count = reference_counts.entry(bigram).or_insert(0u32);
            *count = count.saturating_add(1);
        }

        for (bigram, reference_count) in &reference_counts {
            let Some(entry) = self.index.get(bigram) else {
                continue;
            };

            for (&query_label, &query_count) in entry {
                self.scores[query_label] += self.scoring.score(*reference_count, query_count);
            }
        }

        for (query_label, score) in self.scores.iter_mut().enumerate() {
            let score = std::mem::take(score);
            let query_length = self.index.sequence_length(query_label).unwrap_or(0);
            let length_difference = reference.len().abs_diff(query_length);

            self.heaps[query_label].insert(ReferenceMatch::new(
                reference_label,
                score,
                length_difference,
            ));
        }
    }

    /// Matches each reference, labelled by its position in `references`.
    pub fn match_references<SequenceType: AsRef<[Element]>>(
        &mut self,
        references: impl IntoIterator<Item = SequenceType>,
    ) {
        for (reference_label, reference) in references.into_iter().enumerate() {
            if reference_label % 100_000 == 0 {
                debug!("Processed {reference_label} references");
            }
            self.match_reference(reference_label, reference.as_ref());
        }
    }
}

impl<Element> TopNMatcher<'_, Element> {
    /// Returns the best references for the given query, best first.
    pub fn top_n(&self, query_label: usize) -> Option<Vec<ReferenceMatch>> {
        self.heaps.get(query_label).map(BoundedMaxHeap::top_n)
    }

    /// Returns the best references for each query, best first.
    pub fn into_top_n(self) -> Vec<Vec<ReferenceMatch>> {
        self.heaps
            .into_iter()
            .map(BoundedMaxHeap::into_sorted_vec)
            .collect()
    }
}
