//! Session history store trait.
//!
//! Defines the narrow read interface the recommendation core depends on.

use super::model::SessionRecord;
use anyhow::Result;
use async_trait::async_trait;

/// An abstract read-only source of a user's past sessions.
///
/// This trait decouples the recommendation pipeline from the specific
/// storage mechanism (e.g., TOML files, database, remote API). The core
/// never writes through it; persistence belongs to the surrounding
/// application's adapter.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Return records most-recent-first
/// - Return at most `limit` records
/// - Report failures as errors; the analyzer normalizes any failure to
///   "no history found", so implementations need no fallback of their own
#[async_trait]
pub trait SessionHistoryStore: Send + Sync {
    /// Fetches a user's most recent session records.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose history to fetch
    /// * `limit` - Maximum number of records to return
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<SessionRecord>)`: Records, most-recent-first (possibly empty)
    /// - `Err(_)`: Error occurred during retrieval
    async fn fetch_recent(&self, user_id: &str, limit: usize) -> Result<Vec<SessionRecord>>;
}
