//! Skill extractor library

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, SkillExtractorError};
pub use processing::extractor::SkillExtractor;
pub use processing::skill_matcher::SkillMatcher;
pub use processing::tokenizer::Tokenizer;
pub use processing::vocabulary::Vocabulary;

use processing::tokenizer::UnicodeWordTokenizer;

/// Find `vocabulary` skills in `text` with the default Unicode tokenizer,
/// sorted lexicographically
pub fn extract_skills(text: &str, vocabulary: &Vocabulary) -> Result<Vec<String>> {
    let matcher = SkillMatcher::new(vocabulary.clone())?;
    let found = matcher.extract(text, Some(&UnicodeWordTokenizer))?;
    Ok(found.into_iter().collect())
}
