//! @mention extraction
//!
//! A mention is a whitespace-delimited token that starts with the sigil.
//! The name is the longest run of word characters directly after the sigil,
//! so `@alice,` yields `alice` and `@bob!` yields `bob`. Tokens with no word
//! character after the sigil (`@`, `@!`, `@@bob`) yield nothing.

use crate::config::ExtractConfig;
use crate::types::Mention;
use tracing::trace;

/// Sigil used when none is configured
pub const DEFAULT_SIGIL: char = '@';

/// Whether `c` may appear in a mention name (letter, digit or underscore)
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Extracts mention names from comment bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionExtractor {
    sigil: char,
}

impl MentionExtractor {
    /// Create an extractor using the `@` sigil
    pub fn new() -> Self {
        Self {
            sigil: DEFAULT_SIGIL,
        }
    }

    /// Create an extractor with a custom sigil
    pub fn with_sigil(sigil: char) -> Self {
        Self { sigil }
    }

    /// Create an extractor from the `[extract]` configuration section
    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::with_sigil(config.sigil)
    }

    /// The sigil this extractor looks for
    pub fn sigil(&self) -> char {
        self.sigil
    }

    /// Iterate over the mention names in `body`, borrowing from it.
    ///
    /// Names are yielded in the order their tokens appear; repeated names are
    /// yielded each time.
    pub fn names<'a>(&self, body: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let sigil = self.sigil;
        body.split_whitespace()
            .filter_map(move |token| token.strip_prefix(sigil))
            .map(leading_word)
            .filter(|name| !name.is_empty())
    }

    /// Extract the mentions in `body`
    pub fn extract(&self, body: &str) -> Vec<Mention> {
        let mentions: Vec<Mention> = self.names(body).map(Mention::from).collect();
        trace!(
            sigil = %self.sigil,
            count = mentions.len(),
            "extracted mentions"
        );
        mentions
    }
}

impl Default for MentionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the `@` mentions in `body`
pub fn extract_mentions(body: &str) -> Vec<Mention> {
    MentionExtractor::new().extract(body)
}

/// Longest prefix of `s` made of word characters
fn leading_word(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}
