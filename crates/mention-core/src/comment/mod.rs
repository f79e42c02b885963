//! Comment module
//!
//! The comment value and the rule that pulls @mentions out of its body.

pub mod model;
pub mod extract;

pub use model::Comment;
pub use extract::{extract_mentions, is_word_char, MentionExtractor, DEFAULT_SIGIL};
