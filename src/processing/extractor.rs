//! Extraction engine wiring the configured vocabulary and tokenizer together

use crate::config::{Config, TokenizerKind};
use crate::error::Result;
use crate::model::tokenizer_model;
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::tokenizer::{Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Skill matcher paired with the tokenizer for its token pass
pub struct SkillExtractor {
    matcher: SkillMatcher,
    tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl SkillExtractor {
    pub fn new(matcher: SkillMatcher, tokenizer: Option<Arc<dyn Tokenizer>>) -> Self {
        Self { matcher, tokenizer }
    }

    /// Build from configuration, loading the pretrained model if requested.
    ///
    /// With `literal_only` set no tokenizer is built at all. With
    /// `fallback_to_literal` set, a model that cannot be loaded turns the
    /// token pass off instead of failing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = config.vocabulary();
        info!("Using vocabulary of {} skills", vocabulary.len());
        let matcher = SkillMatcher::new(vocabulary)?;

        if config.tokenizer.literal_only {
            debug!("Token pass disabled");
            return Ok(Self::new(matcher, None));
        }

        let tokenizer = match Self::build_tokenizer(config) {
            Ok(tokenizer) => Some(tokenizer),
            Err(e) if e.is_model_unavailable() && config.tokenizer.fallback_to_literal => {
                warn!("{}; continuing with the literal pass only", e);
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self::new(matcher, tokenizer))
    }

    fn build_tokenizer(config: &Config) -> Result<Arc<dyn Tokenizer>> {
        match config.tokenizer.kind {
            TokenizerKind::Whitespace => Ok(Arc::new(WhitespaceTokenizer)),
            TokenizerKind::Unicode => Ok(Arc::new(UnicodeWordTokenizer)),
            TokenizerKind::Pretrained => {
                let source = config.tokenizer.model_source()?;
                let model: Arc<dyn Tokenizer> = tokenizer_model::load_shared(&source)?;
                Ok(model)
            }
        }
    }

    pub fn tokenizer_name(&self) -> Option<&str> {
        self.tokenizer.as_deref().map(|t| t.name())
    }

    pub fn extract(&self, text: &str) -> Result<BTreeSet<String>> {
        self.matcher.extract(text, self.tokenizer.as_deref())
    }
}
