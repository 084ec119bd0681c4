//! Session record domain model.

use super::message::{ConversationMessage, MessageRole};
use serde::{Deserialize, Serialize};

/// Scenario title sentinel marking a session that used a user-authored
/// scenario instead of a catalog entry.
///
/// Sessions carrying this title are never counted as scenario favorites;
/// they only feed the preset/custom content-preference bias.
pub const CUSTOM_SCENARIO_TITLE: &str = "自定义场景";

/// A stored transcript of one past interaction.
///
/// Records are owned by the session store; the recommendation core only
/// reads them. The `scenario_title` is either the title of a catalog
/// scenario or [`CUSTOM_SCENARIO_TITLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Identifier of the user who owns this session
    pub user_id: String,
    /// Title of the scenario this session used, or the custom sentinel
    pub scenario_title: String,
    /// Timestamp when the session was created (RFC 3339 format)
    pub created_at: String,
    /// Conversation transcript, in message order
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
}

impl SessionRecord {
    /// Returns `true` if this session used a user-authored scenario.
    pub fn is_custom(&self) -> bool {
        self.scenario_title == CUSTOM_SCENARIO_TITLE
    }

    /// Contents of the user-authored messages, in message order.
    pub fn user_contents(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(scenario_title: &str, messages: Vec<ConversationMessage>) -> SessionRecord {
        SessionRecord {
            id: "session-1".to_string(),
            user_id: "user-1".to_string(),
            scenario_title: scenario_title.to_string(),
            messages,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_is_custom() {
        assert!(record(CUSTOM_SCENARIO_TITLE, vec![]).is_custom());
        assert!(!record("排队时碰到人插队", vec![]).is_custom());
    }

    #[test]
    fn test_user_contents_filters_roles() {
        let record = record(
            "排队时碰到人插队",
            vec![
                ConversationMessage {
                    role: MessageRole::System,
                    content: "场景描述".to_string(),
                },
                ConversationMessage {
                    role: MessageRole::User,
                    content: "请你排队".to_string(),
                },
                ConversationMessage {
                    role: MessageRole::Assistant,
                    content: "我就买个东西".to_string(),
                },
                ConversationMessage {
                    role: MessageRole::User,
                    content: "大家都在排".to_string(),
                },
            ],
        );

        let contents: Vec<&str> = record.user_contents().collect();
        assert_eq!(contents, vec!["请你排队", "大家都在排"]);
    }
}
