//! Feature file parser
//!
//! Understands the subset of Gherkin the mention scenarios use: one
//! `Feature:` header with an optional description, `Scenario:` blocks,
//! `@tag` lines, `#` comments and Given/When/Then/And/But steps.

use crate::error::{Result, StepError};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension of feature files
pub const FEATURE_EXTENSION: &str = "feature";

/// Step keyword, with And/But resolved to the keyword they continue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keyword {
    Given,
    When,
    Then,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keyword::Given => write!(f, "Given"),
            Keyword::When => write!(f, "When"),
            Keyword::Then => write!(f, "Then"),
        }
    }
}

/// A single step line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub keyword: Keyword,
    /// Step text without the keyword
    pub text: String,
    /// 1-based line number
    pub line: usize,
}

/// A named list of steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub tags: Vec<String>,
    /// 1-based line number of the `Scenario:` header
    pub line: usize,
    pub steps: Vec<Step>,
}

/// A parsed feature file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub description: Vec<String>,
    pub scenarios: Vec<Scenario>,
    /// Source file, when parsed from disk
    pub path: Option<PathBuf>,
}

impl Feature {
    /// Parse feature text
    pub fn parse(input: &str) -> Result<Self> {
        let mut name: Option<String> = None;
        let mut description = Vec::new();
        let mut scenarios: Vec<Scenario> = Vec::new();
        let mut pending_tags: Vec<String> = Vec::new();
        let mut tag_line: Option<usize> = None;

        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix("Feature:") {
                if name.is_some() {
                    return Err(StepError::parse(line_no, "only one Feature is allowed per file"));
                }
                name = Some(rest.trim().to_string());
                pending_tags.clear();
                tag_line = None;
                continue;
            }

            if is_tag_line(line) {
                pending_tags.extend(line.split_whitespace().map(str::to_string));
                tag_line = Some(line_no);
                continue;
            }

            if name.is_none() {
                return Err(StepError::parse(line_no, "expected 'Feature:' header"));
            }

            if let Some(rest) = line
                .strip_prefix("Scenario:")
                .or_else(|| line.strip_prefix("Example:"))
            {
                scenarios.push(Scenario {
                    name: rest.trim().to_string(),
                    tags: std::mem::take(&mut pending_tags),
                    line: line_no,
                    steps: Vec::new(),
                });
                tag_line = None;
                continue;
            }

            if let Some((word, text)) = split_keyword(line) {
                let scenario = scenarios.last_mut().ok_or_else(|| {
                    StepError::parse(line_no, "step appears before any Scenario")
                })?;
                let keyword = match word {
                    "Given" => Keyword::Given,
                    "When" => Keyword::When,
                    "Then" => Keyword::Then,
                    // And / But continue the previous step
                    _ => scenario.steps.last().map(|s| s.keyword).ok_or_else(|| {
                        StepError::parse(line_no, format!("'{}' must follow another step", word))
                    })?,
                };
                scenario.steps.push(Step {
                    keyword,
                    text: text.to_string(),
                    line: line_no,
                });
                continue;
            }

            if scenarios.is_empty() {
                description.push(line.to_string());
                continue;
            }

            return Err(StepError::parse(
                line_no,
                format!("unexpected line '{}'", line),
            ));
        }

        let name = name.ok_or_else(|| StepError::parse(1, "missing 'Feature:' header"))?;
        if let Some(line_no) = tag_line {
            return Err(StepError::parse(line_no, "tags must precede a Scenario"));
        }
        debug!("Parsed feature '{}' with {} scenarios", name, scenarios.len());

        Ok(Feature {
            name,
            description,
            scenarios,
            path: None,
        })
    }

    /// Read and parse a feature file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StepError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let mut feature = Self::parse(&content)?;
        feature.path = Some(path.to_path_buf());
        Ok(feature)
    }

    /// Total number of steps across all scenarios
    pub fn step_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.steps.len()).sum()
    }
}

/// A line made only of `@tag` tokens
fn is_tag_line(line: &str) -> bool {
    line.split_whitespace().all(|token| token.len() > 1 && token.starts_with('@'))
}

/// Split `Given some text` into its keyword and text
fn split_keyword(line: &str) -> Option<(&str, &str)> {
    ["Given", "When", "Then", "And", "But"]
        .into_iter()
        .find_map(|word| {
            let rest = line.strip_prefix(word)?;
            if rest.starts_with(char::is_whitespace) {
                Some((word, rest.trim()))
            } else {
                None
            }
        })
}

/// Expand files and directories into a sorted list of feature files.
///
/// Directories are searched recursively for `*.feature` files.
pub fn discover_features(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_dir() {
            collect_dir(path, &mut found)?;
        } else if path.exists() {
            found.push(path.clone());
        } else {
            return Err(StepError::FileNotFound(path.clone()));
        }
    }

    Ok(found)
}

fn collect_dir(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_dir(&path, found)?;
        } else if path.extension().is_some_and(|ext| ext == FEATURE_EXTENSION) {
            found.push(path);
        }
    }

    Ok(())
}
