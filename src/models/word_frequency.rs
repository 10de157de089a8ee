use crate::types::{Token, TokenRef, WordFrequencyCount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A token paired with the number of times it occurs in a text document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: Token,
    pub frequency: WordFrequencyCount,
}

impl WordFrequency {
    pub fn new(word: impl Into<Token>, frequency: WordFrequencyCount) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }

    pub fn word(&self) -> &TokenRef {
        &self.word
    }

    pub fn frequency(&self) -> WordFrequencyCount {
        self.frequency
    }
}

impl From<(&TokenRef, WordFrequencyCount)> for WordFrequency {
    fn from((word, frequency): (&TokenRef, WordFrequencyCount)) -> Self {
        Self::new(word, frequency)
    }
}

impl From<(Token, WordFrequencyCount)> for WordFrequency {
    fn from((word, frequency): (Token, WordFrequencyCount)) -> Self {
        Self::new(word, frequency)
    }
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.frequency)
    }
}
