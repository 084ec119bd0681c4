//! TOML-based session store.
//!
//! The surrounding application's adapter behind the core's
//! `SessionHistoryStore` read interface, plus the write operations the
//! chat and history screens need.

use anyhow::{Context, Result};
use async_trait::async_trait;
use squabble_core::session::{SessionHistoryStore, SessionRecord};
use std::path::{Path, PathBuf};
use tokio::fs;

/// A store keeping each session record in its own TOML file.
///
/// Directory structure:
/// ```text
/// base_dir/
/// └── sessions/
///     ├── session-id-1.toml
///     └── session-id-2.toml
/// ```
///
/// Listings tolerate unreadable or unparseable files: such entries are
/// skipped with a warning so one corrupt record never hides the rest of a
/// user's history.
pub struct TomlSessionStore {
    base_dir: PathBuf,
}

impl TomlSessionStore {
    /// Creates a new `TomlSessionStore` rooted at the given directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Base directory for session data
    ///
    /// # Errors
    ///
    /// Returns an error if the directory structure cannot be created.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let sessions_dir = base_dir.join("sessions");
        fs::create_dir_all(&sessions_dir)
            .await
            .context("Failed to create sessions directory")?;

        Ok(Self { base_dir })
    }

    /// Returns the file path for a given session ID.
    fn session_file_path(&self, session_id: &str) -> PathBuf {
        self.base_dir
            .join("sessions")
            .join(format!("{}.toml", session_id))
    }

    /// Saves a session record to storage.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to save
    pub async fn save(&self, record: &SessionRecord) -> Result<()> {
        let file_path = self.session_file_path(&record.id);

        let toml_content = toml::to_string_pretty(record)
            .context("Failed to serialize session record to TOML")?;

        fs::write(&file_path, toml_content)
            .await
            .context(format!("Failed to write session file: {:?}", file_path))?;

        Ok(())
    }

    /// Finds a session record by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SessionRecord))`: Record found
    /// - `Ok(None)`: Record not found
    /// - `Err(_)`: Error occurred during retrieval
    pub async fn find_by_id(&self, session_id: &str) -> Result<Option<SessionRecord>> {
        let file_path = self.session_file_path(session_id);

        if !fs::try_exists(&file_path).await? {
            return Ok(None);
        }

        let toml_content = fs::read_to_string(&file_path)
            .await
            .context(format!("Failed to read session file: {:?}", file_path))?;

        let record: SessionRecord = toml::from_str(&toml_content)
            .context(format!("Failed to parse session file: {:?}", file_path))?;

        Ok(Some(record))
    }

    /// Deletes a session record from storage.
    ///
    /// Deleting a record that does not exist is not an error.
    pub async fn delete(&self, session_id: &str) -> Result<()> {
        let file_path = self.session_file_path(session_id);

        if fs::try_exists(&file_path).await? {
            fs::remove_file(&file_path)
                .await
                .context(format!("Failed to delete session file: {:?}", file_path))?;
        }

        Ok(())
    }

    /// Lists all of a user's session records, most-recent-first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<SessionRecord>> {
        let mut records: Vec<SessionRecord> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|record| record.user_id == user_id)
            .collect();

        // Sort by created_at descending (most recent first); RFC 3339 UTC
        // timestamps order lexicographically
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(records)
    }

    /// Loads every parseable record in the sessions directory.
    async fn load_all(&self) -> Result<Vec<SessionRecord>> {
        let sessions_dir = self.base_dir.join("sessions");
        let mut records = Vec::new();

        let mut entries = fs::read_dir(&sessions_dir)
            .await
            .context("Failed to read sessions directory")?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            let toml_content = match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Skipping unreadable session file {:?}: {}", path, e);
                    continue;
                }
            };

            match toml::from_str::<SessionRecord>(&toml_content) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping unparseable session file {:?}: {}", path, e);
                }
            }
        }

        Ok(records)
    }
}

#[async_trait]
impl SessionHistoryStore for TomlSessionStore {
    async fn fetch_recent(&self, user_id: &str, limit: usize) -> Result<Vec<SessionRecord>> {
        let mut records = self.list_for_user(user_id).await?;
        records.truncate(limit);
        Ok(records)
    }
}
