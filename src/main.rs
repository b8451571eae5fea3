//! Skill extractor: find known technical skills in free text

use clap::Parser;
use log::{debug, error, info};
use skill_extractor::cli::{self, Cli};
use skill_extractor::output::formatter::JsonFormatter;
use skill_extractor::{Config, Result, SkillExtractor};
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; stdout carries only the JSON result
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let text = cli::read_input_text(cli.text, std::io::stdin().lock())?;

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli_overrides(
        cli.tokenizer,
        cli.model.as_deref(),
        cli.literal_only,
        cli.pretty,
    );

    let extractor = SkillExtractor::from_config(&config)?;

    debug!(
        "Extracting from {} characters with tokenizer {:?}",
        text.chars().count(),
        extractor.tokenizer_name()
    );
    let skills = extractor.extract(&text)?;
    info!("Found {} skills", skills.len());

    let output = JsonFormatter::new(config.output.pretty).format_skills(&skills)?;
    println!("{}", output);
    Ok(())
}
