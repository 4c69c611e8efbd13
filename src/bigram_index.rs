use std::collections::BTreeMap;

use crate::bigram::{bigrams, Bigram};

/// Inverted index from bigram to the labels of the sequences containing it.
///
/// A sequence's label is its position in the collection the index was built from.
/// Every stored count is at least one; a bigram that does not occur in a sequence has no entry for it.
#[derive(Debug, Clone)]
pub struct BigramIndex<Element> {
    index: BTreeMap<Bigram<Element>, BTreeMap<usize, u32>>,
    sequence_lengths: Vec<usize>,
}

impl<Element: Ord + Clone> BigramIndex<Element> {
    pub fn from_sequences<SequenceType: AsRef<[Element]>>(
        sequences: impl IntoIterator<Item = SequenceType>,
    ) -> Self {
        let mut result = Self {
            index: Default::default(),
            sequence_lengths: Default::default(),
        };

        for (label, sequence) in sequences.into_iter().enumerate() {
            let sequence = sequence.as_ref();
            result.sequence_lengths.push(sequence.len());

            for bigram in bigrams(sequence) {
                let count = result
                    .index
                    .entry(bigram)
                    .or_default()
                    .entry(label)
                    .or_insert(0);
                *count = count.saturating_add(1);
            }
        }

        result
    }

    /// Returns the occurrence count of `bigram` for each sequence that contains it.
    pub fn get(&self, bigram: &Bigram<Element>) -> Option<&BTreeMap<usize, u32>> {
        self.index.get(bigram)
    }

    /// Returns how often `bigram` occurs in the sequence with the given label.
    pub fn count(&self, bigram: &Bigram<Element>, label: usize) -> u32 {
        self.get(bigram)
            .and_then(|entry| entry.get(&label))
            .copied()
            .unwrap_or(0)
    }
}

impl<Element> BigramIndex<Element> {
    /// The number of indexed sequences, including those too short to contain a bigram.
    pub fn sequence_count(&self) -> usize {
        self.sequence_lengths.len()
    }

    pub fn sequence_length(&self, label: usize) -> Option<usize> {
        self.sequence_lengths.get(label).copied()
    }

    /// The number of distinct bigrams.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Bigram<Element>, &BTreeMap<usize, u32>)> {
        self.index.iter()
    }
}
