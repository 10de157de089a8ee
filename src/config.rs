use crate::models::{WordCountControllerConfig, WordFrequencyAnalyzerConfig};

pub const DEFAULT_WORD_FREQUENCY_ANALYZER_CONFIG: WordFrequencyAnalyzerConfig =
    WordFrequencyAnalyzerConfig {
        log_text_preview_chars: 80,
    };

pub const DEFAULT_WORD_COUNT_CONTROLLER_CONFIG: WordCountControllerConfig =
    WordCountControllerConfig {
        base_path: "/wordcount",
    };
