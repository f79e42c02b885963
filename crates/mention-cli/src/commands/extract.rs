//! Extract command
//!
//! Print the mentions found in a comment body.

use anyhow::{Context, Result};
use clap::Args;
use mention_core::config::OutputFormat;
use mention_core::{Comment, Config, MentionExtractor};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

use super::FormatArg;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Comment body (read from stdin when omitted)
    pub text: Option<String>,

    /// Read the comment body from a file
    #[arg(long, short, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Mention sigil (defaults to the configured sigil)
    #[arg(long)]
    pub sigil: Option<char>,

    /// Print each name only once
    #[arg(long)]
    pub unique: bool,
}

#[derive(Debug, Serialize)]
struct ExtractOutput<'a> {
    body: &'a str,
    mentions: Vec<&'a str>,
}

/// Execute the extract command
pub fn execute(args: ExtractArgs, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if let Some(sigil) = args.sigil {
        config.extract.sigil = sigil;
        config.validate()?;
    }

    let body = read_body(&args)?;
    let comment = Comment::new(body);
    let extractor = MentionExtractor::from_config(&config.extract);

    let mut names: Vec<&str> = extractor.names(comment.body()).collect();
    if args.unique {
        let mut seen = HashSet::new();
        names.retain(|name| seen.insert(*name));
    }
    tracing::debug!("Found {} mentions", names.len());

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    match format {
        OutputFormat::Plain => {
            for name in &names {
                println!("{}", name);
            }
        }
        OutputFormat::Json => {
            let output = ExtractOutput {
                body: comment.body(),
                mentions: names,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn read_body(args: &ExtractArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("Failed to read comment from stdin")?;
    Ok(body)
}
