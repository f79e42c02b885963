//! Step definitions for comment mentions

use crate::context::ScenarioContext;
use crate::error::{Result, StepError};
use crate::registry::StepRegistry;
use mention_core::{Comment, Mention};

pub const WRITE_COMMENT: &str = r#"I write a comment with body "(.*?)""#;
pub const MENTIONS_INCLUDE: &str =
    r#"the comment's mentions should include the (?:user|users) "(.*?)""#;
pub const NO_MENTIONS: &str = r"the comment should have no mentions";
pub const MENTIONS_EXACTLY: &str = r#"the comment's mentions should be exactly "(.*?)""#;

/// Register the mention steps
pub fn register(registry: &mut StepRegistry) -> Result<()> {
    registry.register(WRITE_COMMENT, |ctx, args| write_comment(ctx, &args[0]))?;
    registry.register(MENTIONS_INCLUDE, |ctx, args| mentions_include(ctx, &args[0]))?;
    registry.register(NO_MENTIONS, |ctx, _| no_mentions(ctx))?;
    registry.register(MENTIONS_EXACTLY, |ctx, args| mentions_exactly(ctx, &args[0]))?;
    Ok(())
}

fn write_comment(ctx: &mut ScenarioContext, body: &str) -> Result<()> {
    let comment = Comment::new(body);
    ctx.say(comment.body());
    ctx.set_comment(comment);
    Ok(())
}

fn mentions_include(ctx: &mut ScenarioContext, names: &str) -> Result<()> {
    let mentions = ctx.mentions()?;
    let missing: Vec<&str> = split_names(names)
        .filter(|name| !mentions.iter().any(|m| m == name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected mentions to include {:?}, got {:?}",
            missing,
            as_strs(&mentions)
        )))
    }
}

fn no_mentions(ctx: &mut ScenarioContext) -> Result<()> {
    let mentions = ctx.mentions()?;
    if mentions.is_empty() {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected no mentions, got {:?}",
            as_strs(&mentions)
        )))
    }
}

fn mentions_exactly(ctx: &mut ScenarioContext, names: &str) -> Result<()> {
    let mentions = ctx.mentions()?;
    let expected: Vec<&str> = split_names(names).collect();
    let actual = as_strs(&mentions);

    if expected == actual {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected mentions {:?}, got {:?}",
            expected, actual
        )))
    }
}

/// Comma separated names, trimmed, blanks dropped
fn split_names(names: &str) -> impl Iterator<Item = &str> {
    names.split(',').map(str::trim).filter(|name| !name.is_empty())
}

fn as_strs(mentions: &[Mention]) -> Vec<&str> {
    mentions.iter().map(Mention::as_str).collect()
}
