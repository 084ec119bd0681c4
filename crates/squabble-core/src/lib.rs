//! Core domain for Squabble: the scenario catalog, read access to session
//! history, and the preference-based scenario recommendation pipeline.
//!
//! The crate is a library-level component invoked in-process by the
//! surrounding application; it exposes no wire protocol or CLI surface.

pub mod error;
pub mod recommendation;
pub mod scenario;
pub mod session;

// Re-export common error type
pub use error::SquabbleError;
