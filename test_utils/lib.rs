use std::fs::read_dir;
use std::path::{Path, PathBuf};
use word_frequency::{
    calculate_frequency_for_word, calculate_highest_frequency, calculate_most_frequent_n_words,
    RequestParams,
};

pub mod constants;
pub mod models;
pub use models::{AnalyzerCall, RecordingAnalyzer, TextFixture};

/// Builds request parameters from `(name, value)` pairs.
pub fn params(pairs: &[(&str, &str)]) -> RequestParams {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// All fixture files in a directory, sorted by name.
pub fn list_test_files(test_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = read_dir(test_dir)
        .expect("Failed to read test files directory")
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to collect directory entries")
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    files
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(test_file_path: &Path) {
    let fixture = TextFixture::from_file(test_file_path);

    eprintln!("Testing file: {:?}", test_file_path);

    if let Some(expected) = fixture.expected_highest_frequency {
        assert_eq!(
            calculate_highest_frequency(&fixture.text),
            expected,
            "Highest frequency mismatch in {:?}",
            test_file_path
        );
    }

    for (word, expected) in &fixture.expected_frequencies {
        assert_eq!(
            calculate_frequency_for_word(&fixture.text, word),
            *expected,
            "Frequency mismatch for {:?} in {:?}",
            word,
            test_file_path
        );
    }

    assert_eq!(
        calculate_most_frequent_n_words(&fixture.text, fixture.top_n),
        fixture.expected_top,
        "Top {} mismatch in {:?}",
        fixture.top_n,
        test_file_path
    );
}
