//! Core type definitions for mention-helper

use serde::{Deserialize, Serialize};
use std::fmt;

/// A name referenced from a comment body through an `@name` token.
///
/// Holds the bare name, without the sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mention(pub String);

impl Mention {
    /// Create a Mention from a bare name
    pub fn new(name: impl Into<String>) -> Self {
        Mention(name.into())
    }

    /// The bare name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the mention back as a handle, e.g. `@alice`
    pub fn handle(&self, sigil: char) -> String {
        format!("{}{}", sigil, self.0)
    }

    /// Consume into the bare name
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Mention {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Mention {
    fn from(s: &str) -> Self {
        Mention(s.to_string())
    }
}

impl PartialEq<str> for Mention {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Mention {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
