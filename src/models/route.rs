use crate::constants::{N_PARAM, TEXT_PARAM, WORD_PARAM};

/// The endpoints served by the `WordCountController`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    HighestFrequency,
    Frequency,
    WordFrequency,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::HighestFrequency, Route::Frequency, Route::WordFrequency];

    pub fn segment(self) -> &'static str {
        match self {
            Route::HighestFrequency => "highest-frequency",
            Route::Frequency => "frequency",
            Route::WordFrequency => "word-frequency",
        }
    }

    pub fn params(self) -> &'static [&'static str] {
        match self {
            Route::HighestFrequency => &[TEXT_PARAM],
            Route::Frequency => &[TEXT_PARAM, WORD_PARAM],
            Route::WordFrequency => &[TEXT_PARAM, N_PARAM],
        }
    }

    pub fn handler_name(self) -> &'static str {
        match self {
            Route::HighestFrequency => "WordCountController::get_highest_frequency",
            Route::Frequency => "WordCountController::get_frequency_for_word",
            Route::WordFrequency => "WordCountController::get_most_frequent_n_words",
        }
    }

    pub fn path(self, base_path: &str) -> String {
        format!("{}/{}", base_path.trim_end_matches('/'), self.segment())
    }

    /// Resolves a request path below `base_path`. A trailing slash is ignored.
    pub fn from_path(path: &str, base_path: &str) -> Option<Route> {
        let segment = path
            .strip_prefix(base_path.trim_end_matches('/'))?
            .strip_prefix('/')?
            .trim_end_matches('/');

        Route::ALL
            .into_iter()
            .find(|route| route.segment() == segment)
    }
}
