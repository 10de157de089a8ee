use crate::config::DEFAULT_WORD_COUNT_CONTROLLER_CONFIG;
use crate::constants::{N_PARAM, TEXT_PARAM, WORD_PARAM};
use crate::models::{
    DefaultWordFrequencyAnalyzer, Response, Route, WordFrequency, WordFrequencyAnalyzer,
};
use crate::types::{RequestParams, WordFrequencyCount};
use crate::utils::{
    combine_violations, parse_int_param, require_not_blank, require_param, require_positive,
};
use crate::Error;
use log::{debug, error, info, warn};
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

#[derive(Copy, Clone, Debug)]
pub struct WordCountControllerConfig {
    /// Prefix shared by every route, e.g. `/wordcount`.
    pub base_path: &'static str,
}

/// Validates requests, hands them to a `WordFrequencyAnalyzer` and maps the outcome,
/// including failures, onto a `Response`.
///
/// Validation always runs before the analyzer is invoked, so the analyzer only ever sees
/// non-blank text and words and a positive `n`.
pub struct WordCountController<A: WordFrequencyAnalyzer> {
    analyzer: A,
    config: WordCountControllerConfig,
}

impl WordCountController<DefaultWordFrequencyAnalyzer> {
    pub fn new() -> Self {
        Self::with_analyzer(DefaultWordFrequencyAnalyzer::new())
    }
}

impl Default for WordCountController<DefaultWordFrequencyAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: WordFrequencyAnalyzer> WordCountController<A> {
    pub fn with_analyzer(analyzer: A) -> Self {
        Self::with_custom_config(analyzer, DEFAULT_WORD_COUNT_CONTROLLER_CONFIG)
    }

    pub fn with_custom_config(analyzer: A, config: WordCountControllerConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn route_path(&self, route: Route) -> String {
        route.path(self.config.base_path)
    }

    pub fn log_endpoints(&self) {
        info!("Logging endpoints at startup.");

        for route in Route::ALL {
            info!(
                "Mapped \"{}\" to {}",
                self.route_path(route),
                route.handler_name()
            );
        }
    }

    /// Handles one request. Never fails: every error is turned into an error response.
    pub fn handle(&self, path: &str, params: &RequestParams) -> Response {
        debug!("Handling request for {}", path);

        let result = match Route::from_path(path, self.config.base_path) {
            Some(route) => self.dispatch(route, params),
            None => Err(Error::RouteNotFound(path.to_string())),
        };

        match result {
            Ok(body) => Response::ok(body),
            Err(err) => {
                if err.is_client_error() {
                    warn!("Rejected request for {}: {}", path, err);
                } else {
                    error!("Request for {} failed: {}", path, err);
                }

                Response::from_error(&err)
            }
        }
    }

    /// Runs a resolved route and serializes its result.
    ///
    /// A panic raised by the analyzer is caught and reported as `Error::Internal`.
    pub fn dispatch(&self, route: Route, params: &RequestParams) -> Result<Value, Error> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<Value, Error> {
            match route {
                Route::HighestFrequency => self.get_highest_frequency(params).map(Value::from),
                Route::Frequency => self.get_frequency_for_word(params).map(Value::from),
                Route::WordFrequency => {
                    let word_frequencies = self.get_most_frequent_n_words(params)?;
                    Ok(serde_json::to_value(word_frequencies)?)
                }
            }
        }));

        outcome.unwrap_or_else(|payload| Err(Error::Internal(panic_message(payload.as_ref()))))
    }

    pub fn get_highest_frequency(
        &self,
        params: &RequestParams,
    ) -> Result<WordFrequencyCount, Error> {
        let text = require_not_blank(TEXT_PARAM, require_param(params, TEXT_PARAM)?)?;

        Ok(self.analyzer.calculate_highest_frequency(text))
    }

    pub fn get_frequency_for_word(
        &self,
        params: &RequestParams,
    ) -> Result<WordFrequencyCount, Error> {
        let text = require_param(params, TEXT_PARAM)?;
        let word = require_param(params, WORD_PARAM)?;

        match (
            require_not_blank(TEXT_PARAM, text),
            require_not_blank(WORD_PARAM, word),
        ) {
            (Ok(text), Ok(word)) => Ok(self.analyzer.calculate_frequency_for_word(text, word)),
            (text, word) => Err(combine_violations([text.err(), word.err()])),
        }
    }

    pub fn get_most_frequent_n_words(
        &self,
        params: &RequestParams,
    ) -> Result<Vec<WordFrequency>, Error> {
        // Presence, then type conversion, then every constraint at once
        let text = require_param(params, TEXT_PARAM)?;
        let n = require_param(params, N_PARAM)?;
        let n = parse_int_param(N_PARAM, n)?;

        match (
            require_not_blank(TEXT_PARAM, text),
            require_positive(N_PARAM, n),
        ) {
            (Ok(text), Ok(n)) => Ok(self.analyzer.calculate_most_frequent_n_words(text, n)),
            (text, n) => Err(combine_violations([text.err(), n.err()])),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "analyzer panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponseStatus;
    use serde_json::json;

    const BASE_TEXT: &str = "The sun shines over the lake";

    fn params(pairs: &[(&str, &str)]) -> RequestParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    struct PanickingAnalyzer;

    impl WordFrequencyAnalyzer for PanickingAnalyzer {
        fn calculate_highest_frequency(&self, _text: &str) -> WordFrequencyCount {
            panic!("highest frequency exploded")
        }

        fn calculate_frequency_for_word(&self, _text: &str, _word: &str) -> WordFrequencyCount {
            panic!("frequency exploded")
        }

        fn calculate_most_frequent_n_words(
            &self,
            _text: &str,
            _n: usize,
        ) -> Vec<WordFrequency> {
            panic!("ranking exploded")
        }
    }

    #[test]
    fn test_highest_frequency_route() {
        let controller = WordCountController::new();
        let response = controller.handle(
            "/wordcount/highest-frequency",
            &params(&[("text", BASE_TEXT)]),
        );

        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.body, json!(2));
    }

    #[test]
    fn test_word_frequency_route() {
        let controller = WordCountController::new();
        let response = controller.handle(
            "/wordcount/word-frequency",
            &params(&[("text", BASE_TEXT), ("n", "3")]),
        );

        assert_eq!(
            response.body,
            json!([
                {"word": "the", "frequency": 2},
                {"word": "lake", "frequency": 1},
                {"word": "over", "frequency": 1}
            ])
        );
    }

    #[test]
    fn test_type_mismatch_is_reported_before_blank_text() {
        let controller = WordCountController::new();
        let err = controller
            .get_most_frequent_n_words(&params(&[("text", " "), ("n", "abc")]))
            .unwrap_err();

        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let controller = WordCountController::new();
        let response = controller.handle("/wordcount/nope", &params(&[("text", BASE_TEXT)]));

        assert_eq!(response.status, ResponseStatus::NotFound);
        assert_eq!(
            response.error_response().unwrap().message,
            "No handler found for /wordcount/nope"
        );
    }

    #[test]
    fn test_custom_base_path() {
        let controller = WordCountController::with_custom_config(
            DefaultWordFrequencyAnalyzer::new(),
            WordCountControllerConfig { base_path: "/api/v1" },
        );

        assert_eq!(controller.route_path(Route::Frequency), "/api/v1/frequency");
        let response = controller.handle(
            "/api/v1/frequency",
            &params(&[("text", BASE_TEXT), ("word", "SUN")]),
        );
        assert_eq!(response.body, json!(1));
    }

    #[test]
    fn test_analyzer_panic_becomes_internal_server_error() {
        let controller = WordCountController::with_analyzer(PanickingAnalyzer);
        let response = controller.handle(
            "/wordcount/highest-frequency",
            &params(&[("text", BASE_TEXT)]),
        );

        assert_eq!(response.status, ResponseStatus::InternalServerError);
        assert_eq!(
            response.body,
            json!({
                "error": "Internal Server Error",
                "message": "An unexpected error occurred",
                "status": "INTERNAL_SERVER_ERROR"
            })
        );
    }

    #[test]
    fn test_validation_runs_before_analyzer() {
        let controller = WordCountController::with_analyzer(PanickingAnalyzer);
        let response =
            controller.handle("/wordcount/highest-frequency", &params(&[("text", "   ")]));

        assert_eq!(response.status, ResponseStatus::BadRequest);
    }
}
