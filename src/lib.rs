//! Scores query sequences against reference sequences by the adjacent element pairs (bigrams) they share.
//!
//! The queries are indexed once into a [`BigramIndex`].
//! Then the references are matched against it, either keeping the best references for each query
//! with a [`TopNMatcher`], or computing the full reference × query [`OverlapMatrix`] with a [`BulkMatcher`].

pub mod bigram;
pub mod bigram_index;
pub mod bounded_max_heap;
pub mod bulk_matcher;
pub mod error;
pub mod input;
pub mod output;
pub mod scored_entry;
pub mod top_n_matcher;

pub use bigram::Bigram;
pub use bigram_index::BigramIndex;
pub use bounded_max_heap::BoundedMaxHeap;
pub use bulk_matcher::{BulkMatcher, OverlapMatrix};
pub use scored_entry::ScoredEntry;
pub use top_n_matcher::{ReferenceMatch, Scoring, TopNMatcher};
