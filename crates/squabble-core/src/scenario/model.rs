//! Scenario domain models.

use serde::{Deserialize, Serialize};

/// A predefined confrontation scenario the user can pick from the selection menu.
///
/// Scenarios bundle the situation description shown to the user with the
/// counterpart character the assistant plays and that character's opening
/// line. The set of scenarios is fixed at startup (see `ScenarioCatalog`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDefinition {
    /// Unique identifier (e.g., "noisy-neighbor")
    pub id: String,
    /// Display title shown in the selection menu
    pub title: String,
    /// Situation description presented when the scenario starts
    pub description: String,
    /// The counterpart character the assistant plays
    pub character: String,
    /// Opening line spoken by the counterpart
    pub initial_message: String,
}

/// A scenario emitted by the recommendation engine.
///
/// Every emitted item carries `is_recommended = true`; the flag exists so the
/// UI can mark recommended entries apart from the plain catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedScenario {
    /// The recommended scenario definition
    #[serde(flatten)]
    pub scenario: ScenarioDefinition,
    /// Always `true` for engine output
    pub is_recommended: bool,
}

impl RecommendedScenario {
    /// Wraps a scenario as a recommendation.
    pub fn new(scenario: ScenarioDefinition) -> Self {
        Self {
            scenario,
            is_recommended: true,
        }
    }
}
