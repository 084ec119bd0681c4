//! Scenario recommendation engine.

use crate::recommendation::analyzer::PreferenceAnalyzer;
use crate::recommendation::profile::PreferenceProfile;
use crate::recommendation::sampler::ScenarioSampler;
use crate::scenario::{RecommendedScenario, ScenarioCatalog, ScenarioDefinition};
use std::collections::HashSet;
use std::sync::Arc;

/// Ranks catalog scenarios against a user's preference profile.
///
/// The engine never fails and never returns duplicates: favorites come
/// first (in favorite rank order), then keyword matches (in catalog
/// order), then random padding until the requested count or the catalog
/// is exhausted. A user without usable history gets a purely random,
/// duplicate-free draw. Every returned entry is flagged as recommended.
pub struct RecommendationEngine {
    catalog: Arc<ScenarioCatalog>,
    analyzer: PreferenceAnalyzer,
    sampler: Arc<dyn ScenarioSampler>,
}

impl RecommendationEngine {
    /// Creates an engine over an immutable catalog.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The fixed scenario catalog, shared read-only
    /// * `analyzer` - Produces the per-request preference profile
    /// * `sampler` - Randomness source for fallback padding
    pub fn new(
        catalog: Arc<ScenarioCatalog>,
        analyzer: PreferenceAnalyzer,
        sampler: Arc<dyn ScenarioSampler>,
    ) -> Self {
        Self {
            catalog,
            analyzer,
            sampler,
        }
    }

    /// Recommends scenarios for a user.
    ///
    /// The returned list has length `min(count, catalog size)` and
    /// pairwise-distinct scenario ids. Any history-fetch problem inside
    /// the analyzer degrades to the random fallback; this method has no
    /// error path of its own.
    pub async fn recommend(&self, user_id: &str, count: usize) -> Vec<RecommendedScenario> {
        let profile = self.analyzer.analyze(user_id).await;
        self.select(&profile, count)
            .into_iter()
            .cloned()
            .map(RecommendedScenario::new)
            .collect()
    }

    /// Selects catalog entries for a profile.
    ///
    /// Pure except for the padding draw: the same profile always yields
    /// the same matched prefix.
    fn select(&self, profile: &PreferenceProfile, count: usize) -> Vec<&ScenarioDefinition> {
        let scenarios = self.catalog.scenarios();

        // No favorites: purely random draw over the whole catalog
        if !profile.has_favorites() {
            return self
                .sampler
                .sample_indices(scenarios.len(), count)
                .into_iter()
                .map(|i| &scenarios[i])
                .collect();
        }

        let mut picked: Vec<&ScenarioDefinition> = Vec::new();
        let mut picked_ids: HashSet<&str> = HashSet::new();

        // Favorites first, ordered by favorite rank rather than catalog order
        for title in &profile.favorite_scenario_titles {
            for scenario in scenarios.iter().filter(|s| &s.title == title) {
                if picked_ids.insert(scenario.id.as_str()) {
                    picked.push(scenario);
                }
            }
        }

        // Keyword matches next, in catalog order; the first matching keyword
        // claims an entry, so no entry appears twice
        for scenario in scenarios {
            if picked_ids.contains(scenario.id.as_str()) {
                continue;
            }
            let matches = profile.keywords.iter().any(|keyword| {
                scenario.title.contains(keyword.as_str())
                    || scenario.description.contains(keyword.as_str())
            });
            if matches {
                picked_ids.insert(scenario.id.as_str());
                picked.push(scenario);
            }
        }

        // Pad with random draws from the not-yet-included remainder
        if picked.len() < count {
            let remainder: Vec<&ScenarioDefinition> = scenarios
                .iter()
                .filter(|s| !picked_ids.contains(s.id.as_str()))
                .collect();
            let needed = count - picked.len();
            for index in self.sampler.sample_indices(remainder.len(), needed) {
                picked.push(remainder[index]);
            }
        }

        picked.truncate(count);
        picked
    }
}
