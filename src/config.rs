use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ScribeError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source scanning configuration
    pub scan: ScanConfig,

    /// Output artifact settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions picked up during folder conversion (without the dot)
    pub extensions: Vec<String>,

    /// Maximum file size to convert (in bytes)
    pub max_file_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Whether to emit the companion flowchart document by default
    pub include_flowcharts: bool,

    /// Suffix appended to the output stem for flowchart documents
    pub flowchart_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig {
                extensions: vec![
                    "js".to_string(),
                    "ts".to_string(),
                    "py".to_string(),
                    "java".to_string(),
                    "c".to_string(),
                    "cpp".to_string(),
                    "cs".to_string(),
                    "php".to_string(),
                    "rb".to_string(),
                    "go".to_string(),
                ],
                max_file_size: 1024 * 1024, // 1MB
            },
            output: OutputConfig {
                include_flowcharts: true,
                flowchart_suffix: "_flowchart".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ScribeError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScribeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => {
                if p.as_ref().exists() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                // Try common config file locations
                let candidates = [
                    "Codescribe.toml",
                    "codescribe.toml",
                    ".codescribe.toml",
                ];

                for candidate in &candidates {
                    if Path::new(candidate).exists() {
                        return Self::load(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = Config::default();
        assert_eq!(config.scan.extensions.len(), 10);
        assert!(config.scan.extensions.iter().any(|e| e == "java"));
        assert!(config.output.include_flowcharts);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(restored.scan.extensions, config.scan.extensions);
        assert_eq!(restored.scan.max_file_size, config.scan.max_file_size);
        assert_eq!(restored.output.flowchart_suffix, config.output.flowchart_suffix);
    }

    #[test]
    fn test_load_missing_path_falls_back_to_default() {
        let config = Config::load_or_default(Some("/definitely/not/here.toml")).unwrap();
        assert_eq!(config.scan.max_file_size, 1024 * 1024);
    }
}
