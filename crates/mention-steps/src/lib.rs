//! mention-steps - Behavioural step harness for mention-helper
//!
//! Parses `.feature` files, binds their Given/When/Then lines to regex step
//! definitions and runs every scenario against a fresh, explicitly passed
//! [`ScenarioContext`].

pub mod error;
pub mod feature;
pub mod context;
pub mod registry;
pub mod steps;
pub mod runner;

pub use context::ScenarioContext;
pub use error::{Result, StepError};
pub use feature::{discover_features, Feature, Keyword, Scenario, Step};
pub use registry::{StepMatch, StepRegistry};
pub use runner::{FeatureReport, RunReport, Runner, ScenarioReport, StepReport, StepStatus, Summary};
