pub mod recording_analyzer;
pub use recording_analyzer::{AnalyzerCall, RecordingAnalyzer};

pub mod text_fixture;
pub use text_fixture::TextFixture;
