//! Word-level tokenizers used by the token pass

use crate::error::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into word-level tokens.
///
/// Implementations must not carry mutable state: one instance is shared by
/// every extraction in the process.
pub trait Tokenizer: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Whitespace splitter that strips surrounding punctuation from each word
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect())
    }
}

/// UAX #29 word segmentation. Keeps `node.js` together, splits `scikit-learn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn name(&self) -> &str {
        "unicode"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.unicode_words().map(|word| word.to_string()).collect())
    }
}
