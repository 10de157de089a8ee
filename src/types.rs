use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lowercase runs of ASCII letters,
/// digits and underscores extracted from a text document.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text document.
pub type WordFrequencyCount = usize;

/// Represents a map of tokens to their frequency counts within a text document.
/// The key is the `Token`, and the value is the `WordFrequencyCount`.
pub type WordFrequencyMap = HashMap<Token, WordFrequencyCount>;

/// Named request parameters, as they arrive from a query string or the command line.
pub type RequestParams = HashMap<String, String>;
