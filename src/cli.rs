//! CLI interface for the skill extractor

use crate::config::TokenizerKind;
use crate::error::{Result, SkillExtractorError};
use clap::Parser;
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skill-extractor")]
#[command(about = "Extract known technical skills from free text")]
#[command(long_about = "Find vocabulary skills in text using word-boundary matching plus a tokenizer pass, printed as a JSON array")]
pub struct Cli {
    /// Text to analyze; use "-" to read from standard input
    pub text: Option<OsString>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tokenizer for the token pass
    #[arg(long, value_enum)]
    pub tokenizer: Option<TokenizerKind>,

    /// Pretrained tokenizer: tokenizer.json path or Hugging Face repo id
    #[arg(long)]
    pub model: Option<String>,

    /// Skip the token pass
    #[arg(long)]
    pub literal_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Resolve the positional argument into the text to analyze
pub fn read_input_text<R: Read>(arg: Option<OsString>, stdin: R) -> Result<String> {
    let arg = arg.ok_or_else(|| {
        SkillExtractorError::MissingArgument("no input text supplied".to_string())
    })?;

    if arg.to_str() == Some("-") {
        let mut bytes = Vec::new();
        let mut stdin = stdin;
        stdin.read_to_end(&mut bytes)?;
        return String::from_utf8(bytes).map_err(|e| {
            SkillExtractorError::InvalidInput(format!("Standard input is not valid UTF-8: {}", e))
        });
    }

    arg.into_string().map_err(|raw| {
        SkillExtractorError::InvalidInput(format!(
            "Input text is not valid UTF-8: {}",
            raw.to_string_lossy()
        ))
    })
}
