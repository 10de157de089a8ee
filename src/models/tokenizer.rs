use crate::types::{Token, TokenRef};
use std::iter::FusedIterator;

/// Returns `true` for characters that make up a token: ASCII letters, ASCII digits and `_`.
///
/// Everything else, including apostrophes, hyphens and non-ASCII letters, separates tokens.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Lazily splits the text into lowercase tokens.
    ///
    /// The returned iterator borrows the text and can be cloned to restart the sequence
    /// from its current position.
    pub fn tokenize(self, text: &str) -> Tokens<'_> {
        Tokens {
            slices: self.token_slices(text),
        }
    }

    /// Lazily splits the text into tokens without modifying their case.
    pub fn token_slices(self, text: &str) -> TokenSlices<'_> {
        TokenSlices { text, position: 0 }
    }
}

/// Iterator over the raw token slices of a text, case preserved.
#[derive(Clone, Debug)]
pub struct TokenSlices<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for TokenSlices<'a> {
    type Item = &'a TokenRef;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = &self.text[self.position..];

        let Some(offset) = remaining.find(is_word_char) else {
            self.position = self.text.len();
            return None;
        };

        let start = self.position + offset;
        let end = self.text[start..]
            .find(|c: char| !is_word_char(c))
            .map_or(self.text.len(), |len| start + len);

        self.position = end;

        Some(&self.text[start..end])
    }
}

impl FusedIterator for TokenSlices<'_> {}

/// Iterator over the lowercase tokens of a text.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    slices: TokenSlices<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        // Tokens only ever contain ASCII, so ASCII lowercasing is exact
        self.slices.next().map(|slice| slice.to_ascii_lowercase())
    }
}

impl FusedIterator for Tokens<'_> {}
