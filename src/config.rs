//! Configuration management for the skill extractor

use crate::error::{Result, SkillExtractorError};
use crate::model::tokenizer_model::ModelSource;
use crate::processing::vocabulary::Vocabulary;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub tokenizer: TokenizerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Replaces the built-in skill table when set
    pub skills: Option<Vocabulary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub kind: TokenizerKind,
    pub model_path: Option<PathBuf>,
    pub repo_id: Option<String>,
    pub revision: String,
    /// Run literal-only instead of failing when the model cannot be loaded
    pub fallback_to_literal: bool,
    /// Skip the token pass entirely; no tokenizer or model is built
    pub literal_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    Whitespace,
    #[default]
    Unicode,
    Pretrained,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            kind: TokenizerKind::Unicode,
            model_path: None,
            repo_id: None,
            revision: "main".to_string(),
            fallback_to_literal: false,
            literal_only: false,
        }
    }
}

impl TokenizerConfig {
    /// Model source for the pretrained tokenizer; a local path wins over a repo id
    pub fn model_source(&self) -> Result<ModelSource> {
        if let Some(path) = &self.model_path {
            return Ok(ModelSource::File(path.clone()));
        }

        match &self.repo_id {
            Some(repo_id) => Ok(ModelSource::Hub {
                repo_id: repo_id.clone(),
                revision: self.revision.clone(),
            }),
            None => Err(SkillExtractorError::Configuration(
                "Pretrained tokenizer requires tokenizer.model_path or tokenizer.repo_id".to_string(),
            )),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields built-in defaults; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SkillExtractorError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SkillExtractorError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-extractor")
            .join("config.toml")
    }

    /// Apply command-line flags, which take precedence over the file.
    ///
    /// `model` names a `tokenizer.json` path or a Hub repo id and implies the
    /// pretrained tokenizer.
    pub fn apply_cli_overrides(
        &mut self,
        tokenizer: Option<TokenizerKind>,
        model: Option<&str>,
        literal_only: bool,
        pretty: bool,
    ) {
        if let Some(kind) = tokenizer {
            self.tokenizer.kind = kind;
        }

        if let Some(model) = model {
            self.tokenizer.kind = TokenizerKind::Pretrained;
            match ModelSource::parse(model) {
                ModelSource::File(path) => self.tokenizer.model_path = Some(path),
                ModelSource::Hub { repo_id, .. } => {
                    self.tokenizer.model_path = None;
                    self.tokenizer.repo_id = Some(repo_id);
                }
            }
        }

        if literal_only {
            self.tokenizer.literal_only = true;
        }

        if pretty {
            self.output.pretty = true;
        }
    }

    /// Configured vocabulary, or the built-in skill table
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary.skills.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.tokenizer.kind, TokenizerKind::Unicode);
        assert!(!config.tokenizer.fallback_to_literal);
        assert!(!config.output.pretty);
        assert_eq!(config.vocabulary(), Vocabulary::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            [tokenizer]
            kind = "whitespace"
            "#,
        )
        .unwrap();

        assert_eq!(config.tokenizer.kind, TokenizerKind::Whitespace);
        assert_eq!(config.tokenizer.revision, "main");
        assert_eq!(config.vocabulary(), Vocabulary::default());
    }

    #[test]
    fn test_custom_vocabulary() {
        let config = Config::from_toml(
            r#"
            [vocabulary]
            skills = ["Rust", "Go", "rust"]
            "#,
        )
        .unwrap();

        assert_eq!(config.vocabulary().entries(), &["rust", "go"]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_kind = Config::from_toml("[tokenizer]\nkind = \"spacy\"\n");
        assert!(matches!(bad_kind, Err(SkillExtractorError::Configuration(_))));

        let empty_vocab = Config::from_toml("[vocabulary]\nskills = []\n");
        assert!(matches!(empty_vocab, Err(SkillExtractorError::Configuration(_))));
    }

    #[test]
    fn test_model_source() {
        let mut tokenizer = TokenizerConfig::default();
        assert!(tokenizer.model_source().is_err());

        tokenizer.repo_id = Some("bert-base-uncased".to_string());
        assert_eq!(
            tokenizer.model_source().unwrap(),
            ModelSource::Hub {
                repo_id: "bert-base-uncased".to_string(),
                revision: "main".to_string(),
            }
        );

        tokenizer.model_path = Some(PathBuf::from("/models/tokenizer.json"));
        assert_eq!(
            tokenizer.model_source().unwrap(),
            ModelSource::File(PathBuf::from("/models/tokenizer.json"))
        );
    }

    #[test]
    fn test_cli_overrides_leave_config_when_unset() {
        let mut config = Config::from_toml("[tokenizer]\nkind = \"whitespace\"\n[output]\npretty = true\n").unwrap();
        config.apply_cli_overrides(None, None, false, false);

        assert_eq!(config.tokenizer.kind, TokenizerKind::Whitespace);
        assert!(config.output.pretty);
        assert!(!config.tokenizer.literal_only);
    }

    #[test]
    fn test_cli_overrides_tokenizer_and_flags() {
        let mut config = Config::default();
        config.apply_cli_overrides(Some(TokenizerKind::Whitespace), None, true, true);

        assert_eq!(config.tokenizer.kind, TokenizerKind::Whitespace);
        assert!(config.tokenizer.literal_only);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_cli_model_override_with_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, "{}").unwrap();

        let mut config = Config::default();
        config.apply_cli_overrides(
            Some(TokenizerKind::Unicode),
            Some(path.to_str().unwrap()),
            false,
            false,
        );

        assert_eq!(config.tokenizer.kind, TokenizerKind::Pretrained);
        assert_eq!(config.tokenizer.model_path, Some(path.clone()));
        assert_eq!(config.tokenizer.model_source().unwrap(), ModelSource::File(path));
    }

    #[test]
    fn test_cli_model_override_with_repo_id() {
        let mut config = Config::default();
        config.tokenizer.model_path = Some(PathBuf::from("/models/old/tokenizer.json"));

        config.apply_cli_overrides(None, Some("bert-base-uncased"), false, false);

        assert_eq!(config.tokenizer.kind, TokenizerKind::Pretrained);
        assert_eq!(config.tokenizer.model_path, None);
        assert_eq!(config.tokenizer.repo_id.as_deref(), Some("bert-base-uncased"));
        assert_eq!(
            config.tokenizer.model_source().unwrap(),
            ModelSource::Hub {
                repo_id: "bert-base-uncased".to_string(),
                revision: "main".to_string(),
            }
        );
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.pretty = true;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert!(loaded.output.pretty);

        let missing = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(missing, Err(SkillExtractorError::Io(_))));
    }
}
