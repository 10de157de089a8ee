//! Word frequency statistics over a text document: the highest frequency, the frequency
//! of a given word and the top `n` most frequent words.

mod config;
pub use config::{DEFAULT_WORD_COUNT_CONTROLLER_CONFIG, DEFAULT_WORD_FREQUENCY_ANALYZER_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    DefaultWordFrequencyAnalyzer, Error, ErrorResponse, FrequencyTable, Response, ResponseStatus,
    Route, Tokenizer, WordCountController, WordCountControllerConfig, WordFrequency,
    WordFrequencyAnalyzer, WordFrequencyAnalyzerConfig,
};
pub mod types;
pub use types::{RequestParams, Token, TokenRef, WordFrequencyCount, WordFrequencyMap};
pub mod utils;
pub use utils::{
    count_word_frequencies, decompress_text_from_bytes, read_text_from_path,
    read_text_from_reader, sort_word_frequencies, write_value_csv, write_word_frequencies_csv,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Returns the highest occurrence count of any word in `text`, or 0 if it has no words.
pub fn calculate_highest_frequency(text: &str) -> WordFrequencyCount {
    calculate_highest_frequency_with_custom_config(DEFAULT_WORD_FREQUENCY_ANALYZER_CONFIG, text)
}

pub fn calculate_highest_frequency_with_custom_config(
    word_frequency_analyzer_config: WordFrequencyAnalyzerConfig,
    text: &str,
) -> WordFrequencyCount {
    DefaultWordFrequencyAnalyzer::with_custom_config(word_frequency_analyzer_config)
        .calculate_highest_frequency(text)
}

/// Returns how often `word` occurs in `text` as a whole word, ignoring case.
pub fn calculate_frequency_for_word(text: &str, word: &str) -> WordFrequencyCount {
    calculate_frequency_for_word_with_custom_config(
        DEFAULT_WORD_FREQUENCY_ANALYZER_CONFIG,
        text,
        word,
    )
}

pub fn calculate_frequency_for_word_with_custom_config(
    word_frequency_analyzer_config: WordFrequencyAnalyzerConfig,
    text: &str,
    word: &str,
) -> WordFrequencyCount {
    DefaultWordFrequencyAnalyzer::with_custom_config(word_frequency_analyzer_config)
        .calculate_frequency_for_word(text, word)
}

/// Returns the `n` most frequent words in `text`, highest frequency first and
/// alphabetical among equal frequencies.
pub fn calculate_most_frequent_n_words(text: &str, n: usize) -> Vec<WordFrequency> {
    calculate_most_frequent_n_words_with_custom_config(
        DEFAULT_WORD_FREQUENCY_ANALYZER_CONFIG,
        text,
        n,
    )
}

pub fn calculate_most_frequent_n_words_with_custom_config(
    word_frequency_analyzer_config: WordFrequencyAnalyzerConfig,
    text: &str,
    n: usize,
) -> Vec<WordFrequency> {
    DefaultWordFrequencyAnalyzer::with_custom_config(word_frequency_analyzer_config)
        .calculate_most_frequent_n_words(text, n)
}
