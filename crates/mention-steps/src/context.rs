//! Per-scenario state handed to every step

use crate::error::{Result, StepError};
use mention_core::{Comment, Mention, MentionExtractor};
use tracing::info;

/// State shared by the steps of one scenario.
///
/// A fresh context is created for each scenario and passed to each step
/// explicitly.
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    comment: Option<Comment>,
    extractor: MentionExtractor,
    transcript: Vec<String>,
}

impl ScenarioContext {
    /// Create a context using the given extractor
    pub fn new(extractor: MentionExtractor) -> Self {
        Self {
            comment: None,
            extractor,
            transcript: Vec::new(),
        }
    }

    /// Replace the current comment
    pub fn set_comment(&mut self, comment: Comment) {
        self.comment = Some(comment);
    }

    /// The comment written by an earlier step
    pub fn comment(&self) -> Result<&Comment> {
        self.comment
            .as_ref()
            .ok_or_else(|| StepError::MissingContext("no comment has been written yet".to_string()))
    }

    /// Mentions of the current comment
    pub fn mentions(&self) -> Result<Vec<Mention>> {
        Ok(self.comment()?.mentions_with(&self.extractor))
    }

    /// The extractor in use
    pub fn extractor(&self) -> &MentionExtractor {
        &self.extractor
    }

    /// Record a line of scenario output
    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!("{}", line);
        self.transcript.push(line);
    }

    /// Lines recorded with [`ScenarioContext::say`]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Take the recorded lines, leaving the transcript empty
    pub fn take_transcript(&mut self) -> Vec<String> {
        std::mem::take(&mut self.transcript)
    }
}
