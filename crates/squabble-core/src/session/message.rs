//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI counterpart.
    Assistant,
    /// System-generated message (scenario description, notices).
    System,
}

/// A single message in a stored conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_snake_case() {
        let message = ConversationMessage {
            role: MessageRole::User,
            content: "我的邻居很吵".to_string(),
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "我的邻居很吵");
    }

    #[test]
    fn test_role_deserializes_snake_case() {
        let message: ConversationMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"你说什么？"}"#).unwrap();
        assert_eq!(message.role, MessageRole::Assistant);
    }
}
