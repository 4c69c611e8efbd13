use log::debug;
use serde::{Deserialize, Serialize};

use crate::{bigram::bigrams, bigram_index::BigramIndex};

/// Dense row-major matrix of overlap counts, with one row per reference and one column per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMatrix {
    rows: usize,
    columns: usize,
    counts: Vec<u64>,
}

impl OverlapMatrix {
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            counts: vec![0; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u64> {
        if row < self.rows && column < self.columns {
            Some(self.counts[row * self.columns + column])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[u64]> {
        if row < self.rows {
            Some(&self.counts[row * self.columns..(row + 1) * self.columns])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u64]> {
        // `chunks_exact` panics on a chunk size of zero.
        (0..self.rows).map(|row| &self.counts[row * self.columns..(row + 1) * self.columns])
    }

    fn row_mut(&mut self, row: usize) -> &mut [u64] {
        &mut self.counts[row * self.columns..(row + 1) * self.columns]
    }
}

/// Computes the overlap of every reference with every query of a [`BigramIndex`].
pub struct BulkMatcher<'index, Element> {
    index: &'index BigramIndex<Element>,
}

impl<'index, Element: Ord + Clone> BulkMatcher<'index, Element> {
    pub fn new(index: &'index BigramIndex<Element>) -> Self {
        Self { index }
    }

    /// Each bigram occurrence in a reference adds the full occurrence count of that bigram in a query.
    /// A bigram that occurs `r` times in a reference and `q` times in a query hence contributes `r * q`.
    pub fn match_references<SequenceType: AsRef<[Element]>>(
        &self,
        references: &[SequenceType],
    ) -> OverlapMatrix {
        let mut matrix = OverlapMatrix::zeros(references.len(), self.index.sequence_count());

        for (reference_label, reference) in references.iter().enumerate() {
            if reference_label % 100_000 == 0 {
                debug!("Processed {reference_label}/{} references", references.len());
            }

            let row = matrix.row_mut(reference_label);
            for bigram in bigrams(reference.as_ref()) {
                let Some(entry) = self.index.get(&bigram) else {
                    continue;
                };

                for (&query_label, &count) in entry {
                    if let Some(cell) = row.get_mut(query_label) {
                        *cell += u64::from(count);
                    }
                }
            }
        }

        matrix
    }
}
