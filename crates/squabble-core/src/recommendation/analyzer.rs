//! Preference analysis over session history.

use crate::recommendation::profile::{ContentPreference, PreferenceProfile};
use crate::recommendation::tokenizer::TokenizerConfig;
use crate::session::{SessionHistoryStore, SessionRecord};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Tunables for history analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Maximum number of recent sessions fetched per analysis
    pub max_history: usize,
    /// Maximum number of favorite scenario titles in the profile
    pub favorite_limit: usize,
    /// Maximum number of keywords in the profile
    pub keyword_limit: usize,
    /// Optional upper bound on the history fetch; elapsing is treated the
    /// same as a fetch failure
    pub fetch_timeout: Option<Duration>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_history: 20,
            favorite_limit: 3,
            keyword_limit: 5,
            fetch_timeout: None,
        }
    }
}

/// Derives a [`PreferenceProfile`] from a user's recent session history.
///
/// The analyzer tallies how often each catalog scenario was used, extracts
/// the most frequent tokens from the user's own messages, and derives the
/// preset/custom content bias. Analysis never fails: any problem fetching
/// history (error or timeout) is treated identically to "no history found"
/// and produces the neutral profile.
pub struct PreferenceAnalyzer {
    store: Arc<dyn SessionHistoryStore>,
    tokenizer: TokenizerConfig,
    config: AnalyzerConfig,
}

impl PreferenceAnalyzer {
    /// Creates an analyzer with the default tokenizer and limits.
    pub fn new(store: Arc<dyn SessionHistoryStore>) -> Self {
        Self::with_config(store, TokenizerConfig::default(), AnalyzerConfig::default())
    }

    /// Creates an analyzer with explicit tokenization and analysis policy.
    pub fn with_config(
        store: Arc<dyn SessionHistoryStore>,
        tokenizer: TokenizerConfig,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            store,
            tokenizer,
            config,
        }
    }

    /// Analyzes a user's history into a preference profile.
    ///
    /// Records are scanned most-recent-first as returned by the store.
    /// Favorites and keywords rank by descending frequency; equal counts
    /// keep the order they were first encountered in the scan.
    pub async fn analyze(&self, user_id: &str) -> PreferenceProfile {
        let records = self.fetch_history(user_id).await;
        if records.is_empty() {
            return PreferenceProfile::neutral();
        }

        let mut titles = FrequencyCounter::new();
        let mut custom_count = 0usize;
        for record in &records {
            if record.is_custom() {
                custom_count += 1;
            } else {
                titles.add(&record.scenario_title);
            }
        }
        let distinct_preset_titles = titles.distinct();

        let mut tokens = FrequencyCounter::new();
        for record in &records {
            for content in record.user_contents() {
                for token in self.tokenizer.tokenize(content) {
                    tokens.add(token);
                }
            }
        }

        let preferred_content_type = if custom_count > distinct_preset_titles {
            ContentPreference::Custom
        } else {
            ContentPreference::Preset
        };

        PreferenceProfile {
            favorite_scenario_titles: titles.top(self.config.favorite_limit),
            keywords: tokens.top(self.config.keyword_limit),
            preferred_content_type,
        }
    }

    /// Fetches history, normalizing every failure mode to an empty list.
    async fn fetch_history(&self, user_id: &str) -> Vec<SessionRecord> {
        let fetch = self.store.fetch_recent(user_id, self.config.max_history);
        let outcome = match self.config.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::debug!(
                        "History fetch for user '{}' timed out after {:?}, treating as empty",
                        user_id,
                        limit
                    );
                    return Vec::new();
                }
            },
            None => fetch.await,
        };

        match outcome {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!(
                    "History fetch for user '{}' failed, treating as empty: {}",
                    user_id,
                    e
                );
                Vec::new()
            }
        }
    }
}

/// Counts occurrences while remembering first-seen order, so equal counts
/// rank by the order their keys appeared in the scan.
struct FrequencyCounter {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyCounter {
    fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
                self.order.push(key.to_string());
            }
        }
    }

    /// Number of distinct keys seen.
    fn distinct(&self) -> usize {
        self.order.len()
    }

    /// The top `limit` keys by descending count; the sort is stable, so
    /// equal counts keep first-seen order.
    fn top(self, limit: usize) -> Vec<String> {
        let Self { counts, order } = self;
        let mut entries: Vec<(String, usize)> = order
            .into_iter()
            .map(|key| {
                let count = counts[&key];
                (key, count)
            })
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries.into_iter().map(|(key, _)| key).collect()
    }
}
