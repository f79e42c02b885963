//! Regex-bound step definitions

use crate::context::ScenarioContext;
use crate::error::{Result, StepError};
use regex::Regex;
use tracing::trace;

/// Handler invoked with the scenario context and the pattern's capture groups
pub type StepFn = Box<dyn Fn(&mut ScenarioContext, &[String]) -> Result<()> + Send + Sync>;

/// A step pattern and its handler
pub struct StepDefinition {
    source: String,
    pattern: Regex,
    handler: StepFn,
}

impl StepDefinition {
    /// The pattern as it was registered
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDefinition")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The definition matching a step, with its captured arguments
#[derive(Debug)]
pub struct StepMatch<'r> {
    pub definition: &'r StepDefinition,
    /// Capture groups in order; groups that did not participate are empty
    pub args: Vec<String>,
}

impl StepMatch<'_> {
    /// Run the matched handler
    pub fn invoke(&self, ctx: &mut ScenarioContext) -> Result<()> {
        (self.definition.handler)(ctx, &self.args)
    }
}

/// Registry of step definitions
#[derive(Debug, Default)]
pub struct StepRegistry {
    definitions: Vec<StepDefinition>,
}

impl StepRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the comment mention steps
    pub fn with_mention_steps() -> Result<Self> {
        let mut registry = Self::new();
        crate::steps::register(&mut registry)?;
        Ok(registry)
    }

    /// Register a step. The pattern must match the whole step text.
    pub fn register<F>(&mut self, pattern: &str, handler: F) -> Result<()>
    where
        F: Fn(&mut ScenarioContext, &[String]) -> Result<()> + Send + Sync + 'static,
    {
        let anchored = Regex::new(&format!("^(?:{})$", pattern))?;
        self.definitions.push(StepDefinition {
            source: pattern.to_string(),
            pattern: anchored,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Find the single definition matching `text`
    pub fn find(&self, text: &str) -> Result<StepMatch<'_>> {
        let mut matches: Vec<StepMatch<'_>> = self
            .definitions
            .iter()
            .filter_map(|definition| {
                let caps = definition.pattern.captures(text)?;
                let args = caps
                    .iter()
                    .skip(1)
                    .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect();
                Some(StepMatch { definition, args })
            })
            .collect();

        match matches.len() {
            0 => Err(StepError::UndefinedStep(text.to_string())),
            1 => {
                let found = matches.remove(0);
                trace!("'{}' matched {}", text, found.definition.source);
                Ok(found)
            }
            _ => Err(StepError::AmbiguousStep {
                text: text.to_string(),
                patterns: matches
                    .iter()
                    .map(|m| m.definition.source.clone())
                    .collect(),
            }),
        }
    }

    /// Find and invoke the definition matching `text`
    pub fn run(&self, ctx: &mut ScenarioContext, text: &str) -> Result<()> {
        self.find(text)?.invoke(ctx)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if no definitions are registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mention_core::Comment;

    fn registry() -> StepRegistry {
        let mut registry = StepRegistry::new();
        registry
            .register(r#"I say "(.*?)""#, |ctx, args| {
                ctx.say(args[0].clone());
                Ok(())
            })
            .unwrap();
        registry
            .register(r"I (?:pass|skip)( quietly)?", |_, _| Ok(()))
            .unwrap();
        registry
    }

    #[test]
    fn test_find_and_invoke() {
        let registry = registry();
        let mut ctx = ScenarioContext::default();
        registry.run(&mut ctx, r#"I say "hi""#).unwrap();
        assert_eq!(ctx.transcript().to_vec(), vec!["hi".to_string()]);
    }

    #[test]
    fn test_patterns_are_anchored() {
        let registry = registry();
        let err = registry.find(r#"then I say "hi" twice"#).unwrap_err();
        assert!(matches!(err, StepError::UndefinedStep(_)));
    }

    #[test]
    fn test_optional_group_is_empty() {
        let registry = registry();
        let found = registry.find("I pass").unwrap();
        assert_eq!(found.args, vec![String::new()]);

        let found = registry.find("I skip quietly").unwrap();
        assert_eq!(found.args, vec![" quietly".to_string()]);
    }

    #[test]
    fn test_ambiguous_step() {
        let mut registry = registry();
        registry.register(r"I pass", |_, _| Ok(())).unwrap();
        let err = registry.find("I pass").unwrap_err();
        match err {
            StepError::AmbiguousStep { patterns, .. } => assert_eq!(patterns.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let mut registry = StepRegistry::new();
        let err = registry.register(r"I (broke", |_, _| Ok(())).unwrap_err();
        assert!(matches!(err, StepError::InvalidPattern(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_handler_errors_propagate() {
        let mut registry = StepRegistry::new();
        registry
            .register(r"the comment exists", |ctx, _| ctx.comment().map(|_| ()))
            .unwrap();

        let mut ctx = ScenarioContext::default();
        let err = registry.run(&mut ctx, "the comment exists").unwrap_err();
        assert!(matches!(err, StepError::MissingContext(_)));

        ctx.set_comment(Comment::new("hi"));
        assert!(registry.run(&mut ctx, "the comment exists").is_ok());
    }
}
