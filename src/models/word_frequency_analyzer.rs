use crate::config::DEFAULT_WORD_FREQUENCY_ANALYZER_CONFIG;
use crate::models::{FrequencyTable, Tokenizer, WordFrequency};
use crate::types::WordFrequencyCount;
use crate::utils::preview_text;
use log::info;

/// Word frequency statistics over a text document.
///
/// Implementations must be pure: the same inputs always produce the same outputs and no
/// state survives between calls.
pub trait WordFrequencyAnalyzer {
    /// The highest occurrence count of any token, or 0 when the text has no tokens.
    fn calculate_highest_frequency(&self, text: &str) -> WordFrequencyCount;

    /// How often `word` occurs as a whole token, compared case-insensitively.
    fn calculate_frequency_for_word(&self, text: &str, word: &str) -> WordFrequencyCount;

    /// The `n` most frequent tokens, ordered by frequency descending and then alphabetically.
    fn calculate_most_frequent_n_words(&self, text: &str, n: usize) -> Vec<WordFrequency>;
}

#[derive(Copy, Clone, Debug)]
pub struct WordFrequencyAnalyzerConfig {
    /// Upper bound on how much of the analyzed text is echoed into log lines.
    pub log_text_preview_chars: usize,
}

#[derive(Copy, Clone, Debug)]
pub struct DefaultWordFrequencyAnalyzer {
    config: WordFrequencyAnalyzerConfig,
    tokenizer: Tokenizer,
}

impl DefaultWordFrequencyAnalyzer {
    pub fn new() -> Self {
        Self::with_custom_config(DEFAULT_WORD_FREQUENCY_ANALYZER_CONFIG)
    }

    pub fn with_custom_config(config: WordFrequencyAnalyzerConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn config(&self) -> &WordFrequencyAnalyzerConfig {
        &self.config
    }

    fn frequency_table(&self, text: &str) -> FrequencyTable {
        FrequencyTable::from_tokens(self.tokenizer.tokenize(text))
    }
}

impl Default for DefaultWordFrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordFrequencyAnalyzer for DefaultWordFrequencyAnalyzer {
    fn calculate_highest_frequency(&self, text: &str) -> WordFrequencyCount {
        info!(
            "Calculating the highest frequency in text: {}",
            preview_text(text, self.config.log_text_preview_chars)
        );

        self.frequency_table(text).highest_frequency()
    }

    fn calculate_frequency_for_word(&self, text: &str, word: &str) -> WordFrequencyCount {
        info!(
            "Calculating frequency for word: '{}' in text: {}",
            word,
            preview_text(text, self.config.log_text_preview_chars)
        );

        // Tokens are pure ASCII, so an ASCII case-insensitive comparison against the
        // lowercased word is exact, and a word with non-ASCII characters never matches.
        let target = word.to_lowercase();

        self.tokenizer
            .token_slices(text)
            .filter(|token| token.eq_ignore_ascii_case(&target))
            .count()
    }

    fn calculate_most_frequent_n_words(&self, text: &str, n: usize) -> Vec<WordFrequency> {
        info!(
            "Calculating the most frequent {} words in text: {}",
            n,
            preview_text(text, self.config.log_text_preview_chars)
        );

        if n == 0 {
            return Vec::new();
        }

        self.frequency_table(text).most_frequent(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_TEXT: &str = "The sun shines over the lake";

    #[test]
    fn test_highest_frequency() {
        let analyzer = DefaultWordFrequencyAnalyzer::new();

        assert_eq!(analyzer.calculate_highest_frequency(BASE_TEXT), 2);
        assert_eq!(analyzer.calculate_highest_frequency(""), 0);
    }

    #[test]
    fn test_frequency_for_word_is_case_insensitive() {
        let analyzer = DefaultWordFrequencyAnalyzer::new();

        assert_eq!(analyzer.calculate_frequency_for_word(BASE_TEXT, "the"), 2);
        assert_eq!(analyzer.calculate_frequency_for_word(BASE_TEXT, "THE"), 2);
        assert_eq!(analyzer.calculate_frequency_for_word("The Sun", "the"), 1);
        assert_eq!(analyzer.calculate_frequency_for_word("The Sun", "THE"), 1);
    }

    #[test]
    fn test_frequency_for_word_matches_whole_tokens_only() {
        let analyzer = DefaultWordFrequencyAnalyzer::new();

        assert_eq!(analyzer.calculate_frequency_for_word("sunny sun", "sun"), 1);
        assert_eq!(analyzer.calculate_frequency_for_word(BASE_TEXT, "moon"), 0);
        assert_eq!(analyzer.calculate_frequency_for_word("don't", "don't"), 0);
    }

    #[test]
    fn test_frequency_for_word_lowercases_beyond_ascii() {
        let analyzer = DefaultWordFrequencyAnalyzer::new();

        // KELVIN SIGN lowercases to an ASCII 'k'
        assert_eq!(analyzer.calculate_frequency_for_word("k K", "\u{212A}"), 2);
        assert_eq!(analyzer.calculate_frequency_for_word("café", "café"), 0);
    }

    #[test]
    fn test_most_frequent_n_words() {
        let analyzer = DefaultWordFrequencyAnalyzer::new();

        assert_eq!(
            analyzer.calculate_most_frequent_n_words(BASE_TEXT, 3),
            vec![
                WordFrequency::new("the", 2),
                WordFrequency::new("lake", 1),
                WordFrequency::new("over", 1),
            ]
        );
        assert!(analyzer
            .calculate_most_frequent_n_words(BASE_TEXT, 0)
            .is_empty());
        assert_eq!(
            analyzer
                .calculate_most_frequent_n_words(BASE_TEXT, 100)
                .len(),
            5
        );
    }

    #[test]
    fn test_custom_config_is_kept() {
        let analyzer = DefaultWordFrequencyAnalyzer::with_custom_config(
            WordFrequencyAnalyzerConfig {
                log_text_preview_chars: 3,
            },
        );

        assert_eq!(analyzer.config().log_text_preview_chars, 3);
        assert_eq!(analyzer.calculate_highest_frequency(BASE_TEXT), 2);
    }
}
