//! Skill vocabulary: the fixed list of terms the matcher recognizes

use crate::error::{Result, SkillExtractorError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Built-in technical skill table
pub const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "javascript", "react", "node", "node.js",
    "express", "html", "css", "sql", "mongodb",
    "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch",
    "machine learning", "deep learning", "nlp",
    "aws", "linux", "git", "docker", "kubernetes",
];

/// Ordered, lowercased and deduplicated skill terms.
///
/// Immutable once built, so a single instance can be shared by any number
/// of matchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, lowercasing and trimming every entry.
    /// Later duplicates are dropped; first-occurrence order is kept.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for (idx, entry) in entries.into_iter().enumerate() {
            let term = entry.as_ref().trim().to_lowercase();
            if term.is_empty() {
                return Err(SkillExtractorError::Configuration(format!(
                    "Vocabulary entry {} is empty",
                    idx
                )));
            }
            if seen.insert(term.clone()) {
                normalized.push(term);
            }
        }

        if normalized.is_empty() {
            return Err(SkillExtractorError::Configuration(
                "Vocabulary must contain at least one skill".to_string(),
            ));
        }

        Ok(Self { entries: normalized })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.iter().any(|e| e == term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = SkillExtractorError;

    fn try_from(entries: Vec<String>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries
    }
}
