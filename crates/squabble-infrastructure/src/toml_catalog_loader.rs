//! Scenario catalog loading from a TOML file.
//!
//! Deployments can replace the built-in scenario set with a catalog file of
//! `[[scenario]]` tables. Loading happens once at startup; the resulting
//! `ScenarioCatalog` is immutable afterward.

use serde::Deserialize;
use squabble_core::error::Result;
use squabble_core::scenario::{ScenarioCatalog, ScenarioDefinition};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Root of a catalog file.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(rename = "scenario", default)]
    scenarios: Vec<ScenarioDefinition>,
}

/// Loads a scenario catalog from a TOML file.
///
/// File format:
/// ```text
/// [[scenario]]
/// id = "noisy-neighbor"
/// title = "楼上邻居小孩制造噪音，家长视而不见"
/// description = "..."
/// character = "邻居家长"
/// initialMessage = "..."
/// ```
pub struct TomlCatalogLoader {
    path: PathBuf,
}

impl TomlCatalogLoader {
    /// Creates a loader for the given catalog file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the catalog file path this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// contains duplicate scenario ids.
    pub async fn load(&self) -> Result<ScenarioCatalog> {
        let content = fs::read_to_string(&self.path).await?;
        let file: CatalogFile = toml::from_str(&content)?;
        ScenarioCatalog::new(file.scenarios)
    }

    /// Loads the catalog file, falling back to the built-in scenarios when
    /// the file does not exist.
    ///
    /// A present-but-broken file is still an error: silently replacing a
    /// misconfigured catalog with the built-ins would mask the problem.
    pub async fn load_or_default(&self) -> Result<ScenarioCatalog> {
        if !fs::try_exists(&self.path).await? {
            tracing::info!(
                "No catalog file at {:?}, using built-in scenarios",
                self.path
            );
            return Ok(ScenarioCatalog::builtin());
        }

        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG_TOML: &str = r#"
[[scenario]]
id = "noisy-neighbor"
title = "楼上邻居小孩制造噪音，家长视而不见"
description = "周末早上7点，楼上又开始了噪音污染..."
character = "邻居家长"
initialMessage = "有什么事吗？我们家孩子只是在正常玩耍而已。"

[[scenario]]
id = "queue-jumper"
title = "排队时碰到人插队"
description = "你排了半小时队，一个人直接插到你前面..."
character = "插队者"
initialMessage = "我就买个东西，很快的，你不介意吧？"
"#;

    #[tokio::test]
    async fn test_load_catalog_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scenarios.toml");
        fs::write(&path, CATALOG_TOML).await.unwrap();

        let catalog = TomlCatalogLoader::new(&path).load().await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.find_by_id("queue-jumper").unwrap().character,
            "插队者"
        );
    }

    #[tokio::test]
    async fn test_load_or_default_falls_back_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let catalog = TomlCatalogLoader::new(&path).load_or_default().await.unwrap();

        assert_eq!(catalog.len(), ScenarioCatalog::builtin().len());
    }

    #[tokio::test]
    async fn test_load_or_default_propagates_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[[scenario]]\nid = 42").await.unwrap();

        let result = TomlCatalogLoader::new(&path).load_or_default().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dup.toml");
        let duplicated = format!("{}{}", CATALOG_TOML, CATALOG_TOML);
        fs::write(&path, duplicated).await.unwrap();

        let result = TomlCatalogLoader::new(&path).load().await;
        let err = result.unwrap_err();
        assert!(err.is_config(), "expected Config error, got {:?}", err);
    }

    #[tokio::test]
    async fn test_empty_file_yields_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.toml");
        fs::write(&path, "").await.unwrap();

        let catalog = TomlCatalogLoader::new(&path).load().await.unwrap();
        assert!(catalog.is_empty());
    }
}
