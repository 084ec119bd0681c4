//! Session domain module.
//!
//! This module contains the session record models and the read-only history
//! store interface the recommendation pipeline consumes.
//!
//! # Module Structure
//!
//! - `model`: Stored session transcript (`SessionRecord`) and the custom
//!   scenario sentinel
//! - `message`: Conversation message types (`MessageRole`, `ConversationMessage`)
//! - `repository`: Read interface for session history (`SessionHistoryStore`)

mod message;
mod model;
mod repository;

// Re-export public API
pub use message::{ConversationMessage, MessageRole};
pub use model::{CUSTOM_SCENARIO_TITLE, SessionRecord};
pub use repository::SessionHistoryStore;
