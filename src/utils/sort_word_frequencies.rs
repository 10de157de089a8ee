use crate::types::{TokenRef, WordFrequencyCount, WordFrequencyMap};

/// Sorts a mapping of tokens to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two tokens have the same frequency, sorts by token
///   in ascending lexicographical (byte-wise) order for deterministic ordering.
///
/// The map's own iteration order never leaks into the result.
///
/// ### Example:
/// ```rust
/// use word_frequency::{sort_word_frequencies, WordFrequencyMap};
///
/// let mut frequencies = WordFrequencyMap::new();
/// frequencies.insert("sun".to_string(), 1);
/// frequencies.insert("the".to_string(), 2);
/// frequencies.insert("lake".to_string(), 1);
///
/// let sorted = sort_word_frequencies(&frequencies);
/// assert_eq!(sorted, vec![("the", 2), ("lake", 1), ("sun", 1)]);
/// ```
pub fn sort_word_frequencies(
    frequencies: &WordFrequencyMap,
) -> Vec<(&TokenRef, WordFrequencyCount)> {
    let mut sorted_frequencies: Vec<(&TokenRef, WordFrequencyCount)> = frequencies
        .iter()
        .map(|(token, frequency)| (token.as_str(), *frequency))
        .collect();

    sorted_frequencies.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(b.0)) // Secondary sort by token (ascending)
    });

    sorted_frequencies
}
