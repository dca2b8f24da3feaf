//! Configuration management for sitemap-export.
//!
//! Settings are read from `~/.config/sitemap-export/config.toml` unless a
//! path is given explicitly. If the default file doesn't exist, one with
//! commented defaults is created. Command-line flags override every value.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fetcher::HttpConfig;

pub const DEFAULT_SELECTOR: &str = "body";
pub const DEFAULT_FILTER: &str = "*";
pub const DEFAULT_FILENAME: &str = "output";
pub const DEFAULT_FILETYPE: &str = "txt";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub crawl: CrawlConfig,
    pub output: OutputConfig,
}

/// Defaults for what each crawl extracts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// CSS selector of the content region
    pub selector: String,

    /// URL-path prefix filter, `*` for everything
    pub filter: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file name without extension
    pub filename: String,

    /// One of `txt`, `json`, `jsonl`, `md`, `pdf`
    pub filetype: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            filetype: DEFAULT_FILETYPE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/sitemap-export/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("sitemap-export").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!("Created default config at {}", path.display());
        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# sitemap-export configuration
#
# Every value can be overridden on the command line.

[http]
# Per-request timeout in seconds, feed fetch included
timeout_secs = 10

# User-Agent header sent with every request
user_agent = "sitemap-export"

[crawl]
# CSS selector of the content region; only the first match is used
selector = "body"

# URL-path prefix filter ("blog/" or "blog/*"); "*" keeps every page
filter = "*"

[output]
# Output file name, the extension comes from the file type
filename = "output"

# txt, json, jsonl, md or pdf
filetype = "txt"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config = toml::from_str(Config::default_config_content())
            .expect("Default config should be valid TOML");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[http]
user_agent = "my-crawler/1.0"

[crawl]
selector = "article.post"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.http.user_agent, "my-crawler/1.0");
        assert_eq!(config.crawl.selector, "article.post");
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.crawl.filter, "*");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nfiletype = \"jsonl\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.filetype, "jsonl");
        assert_eq!(config.output.filename, "output");
    }

    #[test]
    fn test_load_from_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[http]\ntimeout_secs = \"soon\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));

        let missing = dir.path().join("missing.toml");
        match Config::load_from(&missing) {
            Err(ConfigError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
