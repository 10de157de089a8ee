use crate::constants::{
    COMMENT_PREFIX, EXPECTED_FREQUENCY_PREFIX, EXPECTED_HIGHEST_FREQUENCY_PREFIX,
    EXPECTED_TOP_N_PREFIX, EXPECTED_TOP_PREFIX,
};
use std::{fs, path::Path};
use word_frequency::{WordFrequency, WordFrequencyCount};

/// A text document plus the statistics expected for it, read from a fixture file.
///
/// Fixture lines starting with `EXPECTED_HIGHEST_FREQUENCY:`, `EXPECTED_FREQUENCY: word=N`,
/// `EXPECTED_TOP: word=N`, `EXPECTED_TOP_N:` or `COMMENT:` are directives; all other lines
/// form the text. Without `EXPECTED_TOP_N`, `n` is the number of `EXPECTED_TOP` lines.
#[derive(Clone, Debug)]
pub struct TextFixture {
    pub text: String,
    pub expected_highest_frequency: Option<WordFrequencyCount>,
    pub expected_frequencies: Vec<(String, WordFrequencyCount)>,
    pub expected_top: Vec<WordFrequency>,
    pub top_n: usize,
}

impl TextFixture {
    pub fn from_file(file_path: &Path) -> Self {
        let content = fs::read_to_string(file_path).expect("Failed to read test file");
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Self {
        let mut text_lines = Vec::new();
        let mut expected_highest_frequency = None;
        let mut expected_frequencies = Vec::new();
        let mut expected_top = Vec::new();
        let mut top_n = None;

        for line in content.lines() {
            let trimmed = line.trim_start();

            if let Some(value) = trimmed.strip_prefix(EXPECTED_HIGHEST_FREQUENCY_PREFIX) {
                expected_highest_frequency = Some(parse_count(value));
            } else if let Some(value) = trimmed.strip_prefix(EXPECTED_FREQUENCY_PREFIX) {
                expected_frequencies.push(parse_pair(value));
            } else if let Some(value) = trimmed.strip_prefix(EXPECTED_TOP_PREFIX) {
                let (word, frequency) = parse_pair(value);
                expected_top.push(WordFrequency::new(word, frequency));
            } else if let Some(value) = trimmed.strip_prefix(EXPECTED_TOP_N_PREFIX) {
                top_n = Some(parse_count(value));
            } else if !trimmed.starts_with(COMMENT_PREFIX) {
                text_lines.push(line);
            }
        }

        Self {
            text: text_lines.join("\n"),
            expected_highest_frequency,
            expected_frequencies,
            top_n: top_n.unwrap_or(expected_top.len()),
            expected_top,
        }
    }
}

fn parse_count(value: &str) -> WordFrequencyCount {
    value
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("Invalid count in fixture: {:?}", value))
}

fn parse_pair(value: &str) -> (String, WordFrequencyCount) {
    let (word, count) = value
        .trim()
        .rsplit_once('=')
        .unwrap_or_else(|| panic!("Expected `word=count` in fixture, got {:?}", value));

    (word.to_string(), parse_count(count))
}
