//! Recommendation use case.
//!
//! The sole entry point the selection UI calls to obtain personalized
//! scenario recommendations.

use squabble_core::recommendation::{
    AnalyzerConfig, PreferenceAnalyzer, RecommendationEngine, ScenarioSampler, ThreadRngSampler,
    TokenizerConfig,
};
use squabble_core::scenario::{RecommendedScenario, ScenarioCatalog};
use squabble_core::session::SessionHistoryStore;
use std::sync::Arc;

/// Number of recommendations shown in the selection menu by default.
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 3;

/// Use case computing scenario recommendations for a user.
///
/// `RecommendationUseCase` wires the session history store, the immutable
/// scenario catalog, and a randomness source into the analysis/ranking
/// pipeline. It is cheap to share behind an `Arc` and safe to call
/// concurrently: the catalog is read-only and each call builds its own
/// ephemeral profile.
pub struct RecommendationUseCase {
    engine: RecommendationEngine,
}

impl RecommendationUseCase {
    /// Creates a use case with the default sampler and analysis policy.
    ///
    /// # Arguments
    ///
    /// * `store` - Read access to the user's past sessions
    /// * `catalog` - The fixed scenario catalog
    pub fn new(store: Arc<dyn SessionHistoryStore>, catalog: Arc<ScenarioCatalog>) -> Self {
        Self::with_sampler(store, catalog, Arc::new(ThreadRngSampler))
    }

    /// Creates a use case with an injected sampler (deterministic in tests).
    pub fn with_sampler(
        store: Arc<dyn SessionHistoryStore>,
        catalog: Arc<ScenarioCatalog>,
        sampler: Arc<dyn ScenarioSampler>,
    ) -> Self {
        let analyzer = PreferenceAnalyzer::new(store);
        Self {
            engine: RecommendationEngine::new(catalog, analyzer, sampler),
        }
    }

    /// Creates a use case with full control over tokenization and analysis
    /// policy.
    pub fn with_config(
        store: Arc<dyn SessionHistoryStore>,
        catalog: Arc<ScenarioCatalog>,
        sampler: Arc<dyn ScenarioSampler>,
        tokenizer: TokenizerConfig,
        config: AnalyzerConfig,
    ) -> Self {
        let analyzer = PreferenceAnalyzer::with_config(store, tokenizer, config);
        Self {
            engine: RecommendationEngine::new(catalog, analyzer, sampler),
        }
    }

    /// Computes up to `count` recommendations for a user.
    ///
    /// Always returns a valid bounded list of length
    /// `min(count, catalog size)`; a user without usable history receives
    /// a random draw.
    pub async fn get_recommendations(
        &self,
        user_id: &str,
        count: usize,
    ) -> Vec<RecommendedScenario> {
        let items = self.engine.recommend(user_id, count).await;
        tracing::debug!(
            "Computed {} recommendation(s) for user '{}'",
            items.len(),
            user_id
        );
        items
    }

    /// Computes recommendations with the default menu count.
    pub async fn default_recommendations(&self, user_id: &str) -> Vec<RecommendedScenario> {
        self.get_recommendations(user_id, DEFAULT_RECOMMENDATION_COUNT)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use squabble_core::recommendation::SeededSampler;
    use squabble_core::scenario::ScenarioDefinition;
    use squabble_core::session::{ConversationMessage, MessageRole, SessionRecord};
    use std::collections::HashSet;

    struct FixedHistoryStore {
        records: Vec<SessionRecord>,
    }

    #[async_trait]
    impl SessionHistoryStore for FixedHistoryStore {
        async fn fetch_recent(
            &self,
            _user_id: &str,
            limit: usize,
        ) -> anyhow::Result<Vec<SessionRecord>> {
            Ok(self.records.iter().take(limit).cloned().collect())
        }
    }

    fn scenario(id: &str, title: &str) -> ScenarioDefinition {
        ScenarioDefinition {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            character: "对方".to_string(),
            initial_message: "你想怎样？".to_string(),
        }
    }

    fn record(id: &str, scenario_title: &str) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            scenario_title: scenario_title.to_string(),
            messages: vec![ConversationMessage {
                role: MessageRole::User,
                content: "让我们谈谈".to_string(),
            }],
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn usecase(records: Vec<SessionRecord>) -> RecommendationUseCase {
        let catalog = Arc::new(
            ScenarioCatalog::new(vec![
                scenario("a", "场景A"),
                scenario("b", "场景B"),
                scenario("c", "场景C"),
                scenario("d", "场景D"),
            ])
            .unwrap(),
        );
        RecommendationUseCase::with_sampler(
            Arc::new(FixedHistoryStore { records }),
            catalog,
            Arc::new(SeededSampler::new(11)),
        )
    }

    #[tokio::test]
    async fn test_default_count_is_three() {
        let usecase = usecase(vec![]);
        let items = usecase.default_recommendations("user-1").await;
        assert_eq!(items.len(), DEFAULT_RECOMMENDATION_COUNT);
    }

    #[tokio::test]
    async fn test_output_is_bounded_and_distinct() {
        let usecase = usecase(vec![record("s1", "场景B"), record("s2", "场景B")]);

        let items = usecase.get_recommendations("user-1", 10).await;

        assert_eq!(items.len(), 4, "bounded by catalog size");
        let ids: HashSet<&str> = items.iter().map(|r| r.scenario.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(items[0].scenario.id, "b", "favorite leads the list");
    }

    #[tokio::test]
    async fn test_every_item_is_flagged_recommended() {
        let usecase = usecase(vec![record("s1", "场景A")]);
        let items = usecase.get_recommendations("user-1", 3).await;
        assert!(items.iter().all(|r| r.is_recommended));
    }
}
