//! Session logging use case.
//!
//! Records finished chats and serves the history screen (list and delete).

use anyhow::Result;
use squabble_core::session::{CUSTOM_SCENARIO_TITLE, ConversationMessage, SessionRecord};
use squabble_infrastructure::TomlSessionStore;
use std::sync::Arc;
use uuid::Uuid;

/// Use case for persisting and browsing a user's past sessions.
///
/// The chat screen calls [`record_session`](Self::record_session) when a
/// conversation ends; the history screen lists and deletes records. The
/// recommendation pipeline reads the same store through its
/// `SessionHistoryStore` interface.
pub struct SessionLogUseCase {
    store: Arc<TomlSessionStore>,
}

impl SessionLogUseCase {
    /// Creates a new `SessionLogUseCase` over a session store.
    pub fn new(store: Arc<TomlSessionStore>) -> Self {
        Self { store }
    }

    /// Records a finished chat as a session record.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Owner of the session
    /// * `scenario_title` - Title of the catalog scenario used, or `None`
    ///   for a user-authored scenario (stored under the custom sentinel)
    /// * `messages` - The transcript, in message order
    ///
    /// # Returns
    ///
    /// The stored record, with its generated id and creation timestamp.
    pub async fn record_session(
        &self,
        user_id: &str,
        scenario_title: Option<String>,
        messages: Vec<ConversationMessage>,
    ) -> Result<SessionRecord> {
        let record = SessionRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            scenario_title: scenario_title
                .unwrap_or_else(|| CUSTOM_SCENARIO_TITLE.to_string()),
            messages,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        self.store.save(&record).await?;
        tracing::info!("Recorded session '{}' for user '{}'", record.id, user_id);

        Ok(record)
    }

    /// Lists a user's session records, most-recent-first.
    pub async fn list_history(&self, user_id: &str) -> Result<Vec<SessionRecord>> {
        self.store.list_for_user(user_id).await
    }

    /// Deletes a session record. Deleting an unknown id is not an error.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.store.delete(session_id).await?;
        tracing::info!("Deleted session '{}'", session_id);
        Ok(())
    }
}
