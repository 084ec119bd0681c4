//! Derived user preference profile.

use serde::{Deserialize, Serialize};

/// Which kind of scenario content a user leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPreference {
    /// Catalog scenarios
    Preset,
    /// User-authored scenarios
    Custom,
}

impl Default for ContentPreference {
    fn default() -> Self {
        ContentPreference::Preset
    }
}

/// Summary of a user's scenario habits, recomputed per recommendation
/// request and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    /// Scenario titles ranked by descending usage frequency, at most three.
    /// Ties keep first-encountered order in the most-recent-first scan.
    pub favorite_scenario_titles: Vec<String>,
    /// Tokens ranked by descending frequency across the user's own
    /// messages, at most five, same tie-break policy.
    pub keywords: Vec<String>,
    /// Preset/custom bias derived from the scenario titles used
    pub preferred_content_type: ContentPreference,
}

impl PreferenceProfile {
    /// The profile used when a user has no usable history.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Returns `true` if the profile names at least one favorite scenario.
    pub fn has_favorites(&self) -> bool {
        !self.favorite_scenario_titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_profile_shape() {
        let profile = PreferenceProfile::neutral();
        assert!(profile.favorite_scenario_titles.is_empty());
        assert!(profile.keywords.is_empty());
        assert_eq!(profile.preferred_content_type, ContentPreference::Preset);
        assert!(!profile.has_favorites());
    }
}
