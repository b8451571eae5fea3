//! The pretrained tokenizer model is loaded once per process

use skill_extractor::config::TokenizerKind;
use skill_extractor::model::tokenizer_model::{load_shared, ModelSource};
use skill_extractor::{Config, SkillExtractor};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

const WORD_LEVEL_TOKENIZER: &str = r#"{
    "version": "1.0",
    "truncation": null,
    "padding": null,
    "added_tokens": [],
    "normalizer": null,
    "pre_tokenizer": { "type": "Whitespace" },
    "post_processor": null,
    "decoder": null,
    "model": {
        "type": "WordLevel",
        "vocab": { "[UNK]": 0 },
        "unk_token": "[UNK]"
    }
}"#;

#[test]
fn test_shared_model_loaded_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokenizer.json");
    std::fs::write(&path, WORD_LEVEL_TOKENIZER).unwrap();

    let first = load_shared(&ModelSource::File(path.clone())).unwrap();
    let second = load_shared(&ModelSource::File(PathBuf::from("/elsewhere"))).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let mut config = Config::default();
    config.tokenizer.kind = TokenizerKind::Pretrained;
    config.tokenizer.model_path = Some(path);

    let extractor = SkillExtractor::from_config(&config).unwrap();
    assert_eq!(extractor.tokenizer_name(), Some("pretrained"));

    let found = extractor.extract("Node.js, numpy and machine learning").unwrap();
    assert_eq!(
        found.into_iter().collect::<Vec<_>>(),
        vec!["machine learning", "node", "node.js", "numpy"]
    );
}
