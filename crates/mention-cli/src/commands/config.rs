//! Config command
//!
//! Manage mention-helper configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use mention_core::Config;
use std::fs;
use std::path::Path;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which configuration file is in use
    Path,

    /// Write a default configuration file (to `--config` when given, else the project path)
    Init {
        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config: &Config, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config, json),
        ConfigCommand::Path => show_path(explicit),
        ConfigCommand::Init { force } => {
            let path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::project_path);
            init_config(&path, force)
        }
    }
}

fn show_config(config: &Config, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_toml_string()?);
    }
    Ok(())
}

fn show_path(explicit: Option<&Path>) -> Result<()> {
    match explicit.map(Path::to_path_buf).or_else(Config::discover_path) {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("{} No configuration file found, using defaults.", "⚠".yellow());
            eprintln!("Searched:");
            eprintln!("  {}", Config::project_path().display());
            if let Some(user) = Config::user_path() {
                eprintln!("  {}", user.display());
            }
        }
    }
    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() {
        if !force {
            use dialoguer::Confirm;

            let confirmed = Confirm::new()
                .with_prompt(format!("Overwrite {}?", config_path.display()))
                .default(false)
                .interact()?;

            if !confirmed {
                println!("Init cancelled.");
                return Ok(());
            }
        }

        let backup_path = format!(
            "{}.backup-{}",
            config_path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(config_path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = format!(
        "# mention-helper configuration\n\n{}",
        Config::default().to_toml_string()?
    );
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{} Wrote {}", "✓".green(), config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".mention-helper").join("config.toml");

        init_config(&path, true).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_force_backs_up_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[extract]\nsigil = \"+\"\n").unwrap();

        init_config(&path, true).unwrap();

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".backup-"))
            .count();
        assert_eq!(backups, 1);
        assert_eq!(Config::load(&path).unwrap().extract.sigil, '@');
    }
}
