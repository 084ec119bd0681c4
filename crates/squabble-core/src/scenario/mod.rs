//! Scenario domain module.
//!
//! This module contains the scenario catalog: the fixed set of confrontation
//! scenarios the user can pick from, plus the recommendation output type.
//!
//! # Module Structure
//!
//! - `model`: Scenario domain models (`ScenarioDefinition`, `RecommendedScenario`)
//! - `catalog`: Immutable catalog constructed at startup (`ScenarioCatalog`)
//! - `preset`: Built-in scenario definitions

mod catalog;
mod model;
mod preset;

// Re-export public API
pub use catalog::ScenarioCatalog;
pub use model::{RecommendedScenario, ScenarioDefinition};
pub use preset::get_default_scenarios;
