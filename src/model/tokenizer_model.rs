//! Pretrained tokenizer loading from local files or the Hugging Face Hub

use crate::error::{Result, SkillExtractorError};
use crate::processing::tokenizer::Tokenizer;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

const TOKENIZER_FILE: &str = "tokenizer.json";

static SHARED_MODEL: OnceLock<Arc<PretrainedTokenizer>> = OnceLock::new();

/// Where a pretrained tokenizer comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Local `tokenizer.json`
    File(PathBuf),
    /// Hub repository containing a `tokenizer.json`
    Hub { repo_id: String, revision: String },
}

impl ModelSource {
    /// Treat `value` as a file when it exists on disk, otherwise as a repo id
    pub fn parse(value: &str) -> Self {
        let path = Path::new(value);
        if path.exists() {
            ModelSource::File(path.to_path_buf())
        } else {
            ModelSource::Hub {
                repo_id: value.to_string(),
                revision: "main".to_string(),
            }
        }
    }
}

/// Word-level view over a Hugging Face tokenizer.
///
/// Only the pre-tokenizer is used: its splits are the word boundaries the
/// model was trained with, before any subword segmentation.
pub struct PretrainedTokenizer {
    inner: tokenizers::Tokenizer,
    origin: String,
}

impl PretrainedTokenizer {
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SkillExtractorError::ModelUnavailable(format!(
                "Tokenizer file does not exist: {}",
                path.display()
            )));
        }

        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            SkillExtractorError::ModelUnavailable(format!(
                "Failed to load tokenizer from {}: {}",
                path.display(),
                e
            ))
        })?;

        if inner.get_pre_tokenizer().is_none() {
            return Err(SkillExtractorError::ModelUnavailable(format!(
                "Tokenizer at {} has no pre-tokenizer, word-level tokens unavailable",
                path.display()
            )));
        }

        Ok(Self {
            inner,
            origin: path.display().to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl Tokenizer for PretrainedTokenizer {
    fn name(&self) -> &str {
        "pretrained"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let pre_tokenizer = self.inner.get_pre_tokenizer().ok_or_else(|| {
            SkillExtractorError::Tokenization("Tokenizer has no pre-tokenizer".to_string())
        })?;

        let mut pretokenized = PreTokenizedString::from(text);
        pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| SkillExtractorError::Tokenization(e.to_string()))?;

        let tokens = pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .filter_map(|(_, (start, end), _)| text.get(start..end))
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect();

        Ok(tokens)
    }
}

/// Locate the `tokenizer.json` for `source`, downloading it if needed
pub fn resolve_model_file(source: &ModelSource) -> Result<PathBuf> {
    match source {
        ModelSource::File(path) => {
            if path.is_dir() {
                Ok(path.join(TOKENIZER_FILE))
            } else {
                Ok(path.clone())
            }
        }
        ModelSource::Hub { repo_id, revision } => {
            info!("Fetching {} from {} ({})", TOKENIZER_FILE, repo_id, revision);

            let api = Api::new().map_err(|e| {
                SkillExtractorError::ModelUnavailable(format!("Failed to initialize HF API: {}", e))
            })?;

            let repo = api.repo(Repo::with_revision(
                repo_id.clone(),
                RepoType::Model,
                revision.clone(),
            ));

            repo.get(TOKENIZER_FILE).map_err(|e| {
                SkillExtractorError::ModelUnavailable(format!(
                    "Failed to download {} from {}: {}",
                    TOKENIZER_FILE, repo_id, e
                ))
            })
        }
    }
}

/// Process-wide tokenizer model, loaded on first use.
///
/// The first successful load wins; later calls get the same instance
/// regardless of `source`.
pub fn load_shared(source: &ModelSource) -> Result<Arc<PretrainedTokenizer>> {
    if let Some(model) = SHARED_MODEL.get() {
        debug!("Reusing loaded tokenizer model from {}", model.origin());
        return Ok(Arc::clone(model));
    }

    let path = resolve_model_file(source)?;
    info!("Loading tokenizer model from {}", path.display());
    let model = Arc::new(PretrainedTokenizer::from_file(&path)?);

    // A concurrent initializer may have won; hand back whichever is stored.
    let _ = SHARED_MODEL.set(Arc::clone(&model));
    Ok(SHARED_MODEL.get().map(Arc::clone).unwrap_or(model))
}
