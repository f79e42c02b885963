//! Comment data model

use super::extract::MentionExtractor;
use crate::types::Mention;
use serde::{Deserialize, Serialize};

/// A comment body. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    body: String,
}

impl Comment {
    /// Create a comment with the given body
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The comment body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Mentions in the body, using the `@` sigil
    pub fn mentions(&self) -> Vec<Mention> {
        self.mentions_with(&MentionExtractor::new())
    }

    /// Mentions in the body, using the given extractor
    pub fn mentions_with(&self, extractor: &MentionExtractor) -> Vec<Mention> {
        extractor.extract(&self.body)
    }

    /// Check whether `name` is mentioned
    pub fn mentions_user(&self, name: &str) -> bool {
        MentionExtractor::new().names(&self.body).any(|n| n == name)
    }
}

impl From<&str> for Comment {
    fn from(body: &str) -> Self {
        Comment::new(body)
    }
}

impl From<String> for Comment {
    fn from(body: String) -> Self {
        Comment::new(body)
    }
}
