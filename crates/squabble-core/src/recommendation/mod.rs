//! Scenario recommendation pipeline.
//!
//! Turns a user's raw session history into a bounded, deduplicated, ranked
//! list of scenarios: history → preference profile → ranked selection →
//! random padding.
//!
//! # Module Structure
//!
//! - `profile`: Derived preference summary (`PreferenceProfile`, `ContentPreference`)
//! - `tokenizer`: Swappable keyword tokenization policy (`TokenizerConfig`)
//! - `analyzer`: History analysis (`PreferenceAnalyzer`, `AnalyzerConfig`)
//! - `sampler`: Injectable randomness for padding (`ScenarioSampler`)
//! - `engine`: Ranking and padding (`RecommendationEngine`)

mod analyzer;
mod engine;
mod profile;
mod sampler;
mod tokenizer;

// Re-export public API
pub use analyzer::{AnalyzerConfig, PreferenceAnalyzer};
pub use engine::RecommendationEngine;
pub use profile::{ContentPreference, PreferenceProfile};
pub use sampler::{ScenarioSampler, SeededSampler, ThreadRngSampler};
pub use tokenizer::{
    DEFAULT_DELIMITERS, DEFAULT_MIN_TOKEN_CHARS, DEFAULT_STOP_WORDS, TokenizerConfig,
};
