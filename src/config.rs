use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_PREVIEW_COUNT,
};
use crate::error::{PortError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub io: IoConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of records printed after a run
    pub preview: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview: DEFAULT_PREVIEW_COUNT,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `config.toml` in the working
    /// directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            PortError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.io.input, PathBuf::from("osm_data.json"));
        assert_eq!(config.io.output, PathBuf::from("cleaned_ports.json"));
        assert_eq!(config.report.preview, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[io]\ninput = \"data/region.geojson\"\n").unwrap();
        assert_eq!(config.io.input, PathBuf::from("data/region.geojson"));
        assert_eq!(config.io.output, PathBuf::from("cleaned_ports.json"));
        assert_eq!(config.report.preview, 10);
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str(
            "[io]\ninput = \"in.json\"\noutput = \"out/ports.json\"\n\n[report]\npreview = 3\n",
        )
        .unwrap();
        assert_eq!(config.io.output, PathBuf::from("out/ports.json"));
        assert_eq!(config.report.preview, 3);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = Config::from_toml_str("[report]\npreview = \"many\"\n").unwrap_err();
        assert!(matches!(err, PortError::Toml(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(matches!(err, PortError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[report]\npreview = 0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.report.preview, 0);
    }
}
