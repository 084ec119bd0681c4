//! Infrastructure adapters for Squabble.
//!
//! This crate implements the storage seams the core depends on: the
//! TOML-file session store behind `SessionHistoryStore`, and startup
//! loading of a custom scenario catalog.

pub mod toml_catalog_loader;
pub mod toml_session_store;

pub use crate::toml_catalog_loader::TomlCatalogLoader;
pub use crate::toml_session_store::TomlSessionStore;
