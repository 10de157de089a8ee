pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::{is_word_char, TokenSlices, Tokenizer, Tokens};

pub mod word_frequency;
pub use word_frequency::WordFrequency;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod word_frequency_analyzer;
pub use word_frequency_analyzer::{
    DefaultWordFrequencyAnalyzer, WordFrequencyAnalyzer, WordFrequencyAnalyzerConfig,
};

pub mod response;
pub use response::{ErrorResponse, Response, ResponseStatus};

pub mod route;
pub use route::Route;

pub mod word_count_controller;
pub use word_count_controller::{WordCountController, WordCountControllerConfig};
