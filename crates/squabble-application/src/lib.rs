//! Application layer for Squabble.
//!
//! This crate provides use case implementations that coordinate between the
//! domain core and the storage adapters: computing scenario recommendations
//! for the selection menu, and recording/browsing past sessions.

pub mod recommendation_usecase;
pub mod session_log_usecase;

pub use recommendation_usecase::{DEFAULT_RECOMMENDATION_COUNT, RecommendationUseCase};
pub use session_log_usecase::SessionLogUseCase;
