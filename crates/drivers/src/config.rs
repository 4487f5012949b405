use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Where the gallery's initial records come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedConfig {
    #[default]
    Builtin,
    File {
        path: PathBuf,
    },
    Folder {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub columns: usize,
    pub long_press_ms: u64,
    pub seed: SeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 600.0,
            columns: 3,
            long_press_ms: 500,
            seed: SeedConfig::Builtin,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Invalid("columns must be at least 1".to_string()));
        }
        if !(self.window_width.is_finite() && self.window_width > 0.0)
            || !(self.window_height.is_finite() && self.window_height > 0.0)
        {
            return Err(ConfigError::Invalid(
                "window size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_config_uses_builtin_three_column_grid() {
        let config = AppConfig::default();
        assert_eq!(config.columns, 3);
        assert_eq!(config.long_press_ms, 500);
        assert_eq!(config.seed, SeedConfig::Builtin);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("gallery.json");
        fs::write(
            &path,
            r#"{"columns": 4, "seed": {"kind": "folder", "path": "/photos"}}"#,
        )
        .expect("config should be written");

        let config = AppConfig::load(&path).expect("config should load");
        assert_eq!(config.columns, 4);
        assert_eq!(config.window_width, 900.0);
        assert_eq!(
            config.seed,
            SeedConfig::Folder {
                path: PathBuf::from("/photos")
            }
        );
    }

    #[test]
    fn zero_columns_are_rejected() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("gallery.json");
        fs::write(&path, r#"{"columns": 0}"#).expect("config should be written");

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("gallery.json");
        fs::write(&path, "{columns").expect("config should be written");

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
