//! CLI configuration

use std::path::{Path, PathBuf};

use lineage_core::QualifiedClassifications;
use serde::{Deserialize, Serialize};

/// Get default config file location
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lineage")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Classification names carried into lineage
    #[serde(default)]
    pub qualified_classifications: QualifiedClassifications,
}

impl Config {
    /// Load config from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(
            config.qualified_classifications,
            QualifiedClassifications::default()
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            qualified_classifications: QualifiedClassifications::new(["Memento", "SubjectArea"]),
        };
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("qualified_classifications"));

        let loaded = Config::load(&path).unwrap();
        assert!(loaded.qualified_classifications.is_lineage_qualified("Memento"));
        assert!(!loaded.qualified_classifications.is_lineage_qualified("Confidentiality"));
    }

    #[test]
    fn test_empty_file_uses_default_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.qualified_classifications.is_lineage_qualified("Confidentiality"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "qualified_classifications = 7").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
