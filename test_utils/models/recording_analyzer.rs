use std::sync::Mutex;
use word_frequency::{WordFrequency, WordFrequencyAnalyzer, WordFrequencyCount};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyzerCall {
    HighestFrequency { text: String },
    FrequencyForWord { text: String, word: String },
    MostFrequentNWords { text: String, n: usize },
}

/// Analyzer stand-in which returns canned results and records every call it receives.
///
/// Set `panic_on_call` to simulate an unexpected failure inside the analyzer.
#[derive(Debug, Default)]
pub struct RecordingAnalyzer {
    pub highest_frequency: WordFrequencyCount,
    pub frequency_for_word: WordFrequencyCount,
    pub most_frequent_n_words: Vec<WordFrequency>,
    pub panic_on_call: bool,
    calls: Mutex<Vec<AnalyzerCall>>,
}

impl RecordingAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highest_frequency(mut self, highest_frequency: WordFrequencyCount) -> Self {
        self.highest_frequency = highest_frequency;
        self
    }

    pub fn with_frequency_for_word(mut self, frequency_for_word: WordFrequencyCount) -> Self {
        self.frequency_for_word = frequency_for_word;
        self
    }

    pub fn with_most_frequent_n_words(
        mut self,
        most_frequent_n_words: Vec<WordFrequency>,
    ) -> Self {
        self.most_frequent_n_words = most_frequent_n_words;
        self
    }

    pub fn panicking() -> Self {
        Self {
            panic_on_call: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<AnalyzerCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: AnalyzerCall) {
        self.calls.lock().unwrap().push(call);

        if self.panic_on_call {
            panic!("RecordingAnalyzer configured to fail");
        }
    }
}

impl WordFrequencyAnalyzer for RecordingAnalyzer {
    fn calculate_highest_frequency(&self, text: &str) -> WordFrequencyCount {
        self.record(AnalyzerCall::HighestFrequency {
            text: text.to_string(),
        });
        self.highest_frequency
    }

    fn calculate_frequency_for_word(&self, text: &str, word: &str) -> WordFrequencyCount {
        self.record(AnalyzerCall::FrequencyForWord {
            text: text.to_string(),
            word: word.to_string(),
        });
        self.frequency_for_word
    }

    fn calculate_most_frequent_n_words(&self, text: &str, n: usize) -> Vec<WordFrequency> {
        self.record(AnalyzerCall::MostFrequentNWords {
            text: text.to_string(),
            n,
        });
        self.most_frequent_n_words.clone()
    }
}
