use log::{error, info};
use std::env;
use std::path::PathBuf;
use word_frequency::{
    read_text_from_path, DefaultWordFrequencyAnalyzer, WordCountController, WordFrequencyAnalyzer,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = env::args().nth(1).map(PathBuf::from) else {
        error!("Usage: dev <text-file> [n]");
        return;
    };
    let n = env::args()
        .nth(2)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(10);

    let text = match read_text_from_path(&path) {
        Ok(text) => text,
        Err(err) => {
            error!("Could not read {:?}: {}", path, err);
            return;
        }
    };

    WordCountController::new().log_endpoints();

    let analyzer = DefaultWordFrequencyAnalyzer::new();

    info!(
        "Highest frequency: {}",
        analyzer.calculate_highest_frequency(&text)
    );

    for word_frequency in analyzer.calculate_most_frequent_n_words(&text, n) {
        println!("{}", word_frequency);
    }
}
