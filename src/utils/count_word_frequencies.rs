use crate::types::{Token, WordFrequencyMap};

/// Counts the frequency of tokens in the given sequence.
///
/// # Arguments
/// * `tokens` - Any sequence of owned tokens, typically produced by the `Tokenizer`.
///
/// # Returns
/// * A `WordFrequencyMap` where the keys are tokens and the values are their
///   respective frequencies. Every stored count is at least 1.
///
/// # Example
/// ```
/// use word_frequency::count_word_frequencies;
///
/// let tokens = vec!["the".to_string(), "sun".to_string(), "the".to_string()];
/// let frequencies = count_word_frequencies(tokens);
/// assert_eq!(frequencies.get("the"), Some(&2));
/// assert_eq!(frequencies.get("sun"), Some(&1));
/// ```
pub fn count_word_frequencies<I>(tokens: I) -> WordFrequencyMap
where
    I: IntoIterator<Item = Token>,
{
    let mut frequencies = WordFrequencyMap::new();

    for token in tokens {
        *frequencies.entry(token).or_insert(0) += 1;
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_produces_empty_map() {
        let frequencies = count_word_frequencies(Vec::<Token>::new());
        assert!(frequencies.is_empty());
    }

    #[test]
    fn test_counts_repeated_tokens() {
        let tokens = ["a", "b", "a", "a"].iter().map(|t| t.to_string());
        let frequencies = count_word_frequencies(tokens);

        assert_eq!(frequencies.len(), 2);
        assert_eq!(frequencies["a"], 3);
        assert_eq!(frequencies["b"], 1);
    }
}
