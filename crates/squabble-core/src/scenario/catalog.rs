//! Immutable scenario catalog.

use super::model::ScenarioDefinition;
use super::preset::get_default_scenarios;
use crate::error::{Result, SquabbleError};
use std::collections::HashSet;

/// The fixed, ordered set of scenarios known to the application.
///
/// A catalog is constructed once at startup and passed read-only to the
/// recommendation engine. There is no insertion or removal API: concurrent
/// readers never observe mutation, and tests can substitute a small catalog
/// by constructing their own.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<ScenarioDefinition>,
}

impl ScenarioCatalog {
    /// Creates a catalog from an ordered list of scenario definitions.
    ///
    /// # Arguments
    ///
    /// * `scenarios` - Scenario definitions, in menu order
    ///
    /// # Errors
    ///
    /// Returns `SquabbleError::Config` if two definitions share an `id`.
    pub fn new(scenarios: Vec<ScenarioDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for scenario in &scenarios {
            if !seen.insert(scenario.id.as_str()) {
                return Err(SquabbleError::config(format!(
                    "duplicate scenario id '{}'",
                    scenario.id
                )));
            }
        }
        Ok(Self { scenarios })
    }

    /// Creates a catalog holding the built-in scenario set.
    pub fn builtin() -> Self {
        // Built-in ids are covered by the preset unit tests, no validation needed
        Self {
            scenarios: get_default_scenarios(),
        }
    }

    /// Returns the scenarios in menu order.
    pub fn scenarios(&self) -> &[ScenarioDefinition] {
        &self.scenarios
    }

    /// Returns the number of scenarios in the catalog.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns `true` if the catalog holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Finds a scenario by its id.
    pub fn find_by_id(&self, id: &str) -> Option<&ScenarioDefinition> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Finds a scenario by its display title.
    pub fn find_by_title(&self, title: &str) -> Option<&ScenarioDefinition> {
        self.scenarios.iter().find(|s| s.title == title)
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
