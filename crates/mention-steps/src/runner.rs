//! Scenario runner and reports

use crate::context::ScenarioContext;
use crate::feature::{Feature, Keyword, Scenario};
use crate::registry::StepRegistry;
use crate::error::StepError;
use mention_core::MentionExtractor;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Passed,
    Failed { message: String },
    Undefined,
    Skipped,
}

impl StepStatus {
    /// Check if the step passed
    pub fn is_passed(&self) -> bool {
        matches!(self, StepStatus::Passed)
    }
}

/// Report for one step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub keyword: Keyword,
    pub text: String,
    pub line: usize,
    #[serde(flatten)]
    pub status: StepStatus,
}

/// Report for one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub steps: Vec<StepReport>,
    /// Lines the steps printed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transcript: Vec<String>,
}

impl ScenarioReport {
    /// A scenario passes when every step passed
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.status.is_passed())
    }
}

/// Report for one feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub scenarios: Vec<ScenarioReport>,
}

/// Summary counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub scenarios: usize,
    pub scenarios_passed: usize,
    pub scenarios_failed: usize,
    pub steps_passed: usize,
    pub steps_failed: usize,
    pub steps_undefined: usize,
    pub steps_skipped: usize,
}

/// Report for a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub features: Vec<FeatureReport>,
    pub summary: Summary,
}

impl RunReport {
    /// Check if every scenario passed
    pub fn success(&self) -> bool {
        self.summary.scenarios_failed == 0
    }

    fn push(&mut self, feature: FeatureReport) {
        let summary = &mut self.summary;
        for scenario in &feature.scenarios {
            summary.scenarios += 1;
            if scenario.passed() {
                summary.scenarios_passed += 1;
            } else {
                summary.scenarios_failed += 1;
            }
            for step in &scenario.steps {
                match step.status {
                    StepStatus::Passed => summary.steps_passed += 1,
                    StepStatus::Failed { .. } => summary.steps_failed += 1,
                    StepStatus::Undefined => summary.steps_undefined += 1,
                    StepStatus::Skipped => summary.steps_skipped += 1,
                }
            }
        }
        self.features.push(feature);
    }
}

/// Runs scenarios against a step registry
pub struct Runner<'r> {
    registry: &'r StepRegistry,
    extractor: MentionExtractor,
}

impl<'r> Runner<'r> {
    /// Create a runner using the default extractor
    pub fn new(registry: &'r StepRegistry) -> Self {
        Self {
            registry,
            extractor: MentionExtractor::new(),
        }
    }

    /// Use a specific extractor for every scenario
    pub fn with_extractor(mut self, extractor: MentionExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Run every feature
    pub fn run(&self, features: &[Feature]) -> RunReport {
        let mut report = RunReport::default();
        for feature in features {
            report.push(self.run_feature(feature));
        }
        report
    }

    /// Run every scenario of one feature
    pub fn run_feature(&self, feature: &Feature) -> FeatureReport {
        debug!("Running feature '{}'", feature.name);
        FeatureReport {
            name: feature.name.clone(),
            path: feature.path.as_ref().map(|p| p.display().to_string()),
            scenarios: feature
                .scenarios
                .iter()
                .map(|s| self.run_scenario(s))
                .collect(),
        }
    }

    /// Run one scenario with a fresh context
    pub fn run_scenario(&self, scenario: &Scenario) -> ScenarioReport {
        let mut ctx = ScenarioContext::new(self.extractor);
        let mut halted = false;
        let mut steps = Vec::with_capacity(scenario.steps.len());

        for step in &scenario.steps {
            let status = if halted {
                StepStatus::Skipped
            } else {
                match self.registry.run(&mut ctx, &step.text) {
                    Ok(()) => StepStatus::Passed,
                    Err(StepError::UndefinedStep(_)) => {
                        warn!("Undefined step at line {}: {}", step.line, step.text);
                        StepStatus::Undefined
                    }
                    Err(e) => StepStatus::Failed {
                        message: e.to_string(),
                    },
                }
            };
            halted |= !status.is_passed();

            steps.push(StepReport {
                keyword: step.keyword,
                text: step.text.clone(),
                line: step.line,
                status,
            });
        }

        ScenarioReport {
            name: scenario.name.clone(),
            line: scenario.line,
            tags: scenario.tags.clone(),
            steps,
            transcript: ctx.take_transcript(),
        }
    }
}
