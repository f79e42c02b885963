//! mention-core - Core library for mention-helper
//!
//! This crate provides the comment model and the @mention extraction rule,
//! together with the error and configuration types shared by the harness and CLI.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;

pub use comment::{extract_mentions, Comment, MentionExtractor, DEFAULT_SIGIL};
pub use config::Config;
pub use error::{MentionError, Result};
pub use types::*;
