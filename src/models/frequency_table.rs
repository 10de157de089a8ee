use crate::models::{Tokenizer, WordFrequency};
use crate::types::{Token, TokenRef, WordFrequencyCount, WordFrequencyMap};
use crate::utils::{count_word_frequencies, sort_word_frequencies};

/// Occurrence counts for every distinct token of one text document.
///
/// Built fresh per analyzed text in a single pass over its tokens. Every stored count
/// is at least 1; absent tokens report a frequency of 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    frequencies: WordFrequencyMap,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(Tokenizer::new().tokenize(text))
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        Self {
            frequencies: count_word_frequencies(tokens),
        }
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency of an already lowercased token.
    pub fn get(&self, token: &TokenRef) -> WordFrequencyCount {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    /// The largest count in the table, or 0 when the table is empty.
    pub fn highest_frequency(&self) -> WordFrequencyCount {
        self.frequencies.values().copied().max().unwrap_or(0)
    }

    /// All entries ordered by frequency descending, then token ascending.
    pub fn ranked(&self) -> Vec<WordFrequency> {
        self.most_frequent(self.len())
    }

    /// The first `n` entries of the ranking; fewer when the table has fewer distinct tokens.
    pub fn most_frequent(&self, n: usize) -> Vec<WordFrequency> {
        let mut sorted_frequencies = sort_word_frequencies(&self.frequencies);
        sorted_frequencies.truncate(n);

        sorted_frequencies
            .into_iter()
            .map(WordFrequency::from)
            .collect()
    }
}
