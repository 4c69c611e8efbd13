/// Two adjacent elements of a sequence, in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bigram<Element> {
    pub first: Element,
    pub second: Element,
}

impl<Element> Bigram<Element> {
    pub fn new(first: Element, second: Element) -> Self {
        Self { first, second }
    }
}

/// Iterates over the overlapping adjacent pairs of `sequence`.
///
/// Yields `sequence.len() - 1` bigrams, or none if the sequence has fewer than two elements.
pub fn bigrams<Element: Clone>(
    sequence: &[Element],
) -> impl Iterator<Item = Bigram<Element>> + '_ {
    sequence
        .windows(2)
        .map(|window| Bigram::new(window[0].clone(), window[1].clone()))
}

pub fn extract<Element: Clone>(sequence: &[Element]) -> Vec<Bigram<Element>> {
    bigrams(sequence).collect()
}
