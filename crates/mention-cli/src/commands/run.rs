//! Run command
//!
//! Run feature scenarios against the mention steps.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use mention_core::config::OutputFormat;
use mention_core::{Config, MentionExtractor};
use mention_steps::{discover_features, Feature, RunReport, Runner, StepRegistry, StepStatus};
use std::path::PathBuf;

use super::FormatArg;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Feature files or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Execute the run command
pub fn execute(args: RunArgs, config: &Config) -> Result<()> {
    let paths = discover_features(&args.paths).context("Failed to find feature files")?;
    if paths.is_empty() {
        bail!("No feature files found");
    }

    let features = paths
        .iter()
        .map(|path| {
            Feature::from_file(path).with_context(|| format!("Failed to parse {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::info!("Running {} feature files", features.len());

    let registry = StepRegistry::with_mention_steps()?;
    let report = Runner::new(&registry)
        .with_extractor(MentionExtractor::from_config(&config.extract))
        .run(&features);

    match args.format.map(OutputFormat::from).unwrap_or(config.output.format) {
        OutputFormat::Plain => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.success() {
        bail!(
            "{} of {} scenarios failed",
            report.summary.scenarios_failed,
            report.summary.scenarios
        );
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    for feature in &report.features {
        match &feature.path {
            Some(path) => println!("{} {}", feature.name.bold(), path.dimmed()),
            None => println!("{}", feature.name.bold()),
        }

        for scenario in &feature.scenarios {
            if scenario.passed() {
                println!("  {} {}", "✓".green(), scenario.name);
                continue;
            }

            println!("  {} {}", "✗".red(), scenario.name);
            for step in &scenario.steps {
                let label = format!("{} {}", step.keyword, step.text);
                match &step.status {
                    StepStatus::Passed => println!("      {} {}", "✓".green(), label),
                    StepStatus::Failed { message } => {
                        println!("      {} {} (line {})", "✗".red(), label, step.line);
                        println!("        {}", message.red());
                    }
                    StepStatus::Undefined => {
                        println!("      {} {} (line {})", "?".yellow(), label, step.line);
                        println!("        {}", "undefined step".yellow());
                    }
                    StepStatus::Skipped => println!("      {} {}", "-".dimmed(), label.dimmed()),
                }
            }
        }
        println!();
    }

    let summary = &report.summary;
    println!(
        "{} scenarios ({} passed, {} failed)",
        summary.scenarios,
        summary.scenarios_passed.to_string().green(),
        summary.scenarios_failed.to_string().red()
    );
    println!(
        "{} steps ({} passed, {} failed, {} undefined, {} skipped)",
        summary.steps_passed + summary.steps_failed + summary.steps_undefined + summary.steps_skipped,
        summary.steps_passed,
        summary.steps_failed,
        summary.steps_undefined,
        summary.steps_skipped
    );
}
