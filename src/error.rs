//! Error handling for the skill extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Tokenizer model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Tokenization error: {0}")]
    Tokenization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillExtractorError>;

impl SkillExtractorError {
    /// True when the token pass can be dropped instead of failing the run
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, SkillExtractorError::ModelUnavailable(_))
    }
}
