//! Skill matching: literal word-boundary pass plus per-token pass

use crate::error::{Result, SkillExtractorError};
use crate::processing::tokenizer::Tokenizer;
use crate::processing::vocabulary::Vocabulary;
use log::debug;
use regex::RegexSet;
use std::collections::{BTreeSet, HashSet};

/// Matches a fixed vocabulary against free text.
///
/// All patterns are compiled once at construction; `extract` is a pure
/// function of its input and can be called from any thread.
pub struct SkillMatcher {
    vocabulary: Vocabulary,
    literal_patterns: RegexSet,
    lookup: HashSet<String>,
}

impl SkillMatcher {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        // Boundaries wrap the whole entry so "machine learning" is one unit
        // and "java" never matches inside "javascript".
        let patterns: Vec<String> = vocabulary
            .iter()
            .map(|skill| format!(r"\b{}\b", regex::escape(skill)))
            .collect();

        let literal_patterns = RegexSet::new(&patterns).map_err(|e| {
            SkillExtractorError::Configuration(format!("Failed to build skill patterns: {}", e))
        })?;

        let lookup = vocabulary.iter().map(|s| s.to_string()).collect();

        Ok(Self {
            vocabulary,
            literal_patterns,
            lookup,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Find every vocabulary entry present in `text`.
    ///
    /// Passing `None` for the tokenizer runs the literal pass only.
    pub fn extract(&self, text: &str, tokenizer: Option<&dyn Tokenizer>) -> Result<BTreeSet<String>> {
        let lowered = text.to_lowercase();

        let mut found = self.literal_matches(&lowered);
        debug!("Literal pass matched {} skills", found.len());

        if let Some(tokenizer) = tokenizer {
            let token_found = self.token_matches(&lowered, tokenizer)?;
            debug!(
                "Token pass ({}) matched {} skills",
                tokenizer.name(),
                token_found.len()
            );
            found.extend(token_found);
        }

        Ok(found)
    }

    /// Entries that occur as whole words or phrases in already-lowercased text
    pub fn literal_matches(&self, lowered: &str) -> BTreeSet<String> {
        self.literal_patterns
            .matches(lowered)
            .iter()
            .map(|idx| self.vocabulary.entries()[idx].clone())
            .collect()
    }

    /// Entries equal to some token produced by `tokenizer`
    pub fn token_matches(&self, lowered: &str, tokenizer: &dyn Tokenizer) -> Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();

        for token in tokenizer.tokenize(lowered)? {
            let token = token.to_lowercase();
            if self.lookup.contains(&token) {
                found.insert(token);
            }
        }

        Ok(found)
    }
}
