//! TOML configuration for the `claimview` binary.
//!
//! Default location: `<config_dir>/claimview/config.toml`. A missing file
//! means defaults; a file that exists but cannot be read or parsed is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "claimview=info,claimview_core=info,claimview_tui=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Records file (`.json` / `.toml`); the embedded sample set when unset.
    pub records: Option<PathBuf>,
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
    pub mouse: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            records: None,
            tick_rate_ms: 250,
            mouse: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// `<config_dir>/claimview/config.toml`, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("claimview").join("config.toml"))
    }

    /// Load from `path`. Returns defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply command-line flags on top of the file values. A `--records`
    /// path replaces `records`; `--no-mouse` turns mouse capture off.
    pub fn with_cli_overrides(mut self, records: Option<PathBuf>, no_mouse: bool) -> Self {
        if records.is_some() {
            self.records = records;
        }
        if no_mouse {
            self.mouse = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = AppConfig::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
        assert_eq!(loaded.tick_rate_ms, 250);
        assert!(loaded.mouse);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::parse("mouse = false\nrecords = \"claims.json\"\n").unwrap();
        assert!(!config.mouse);
        assert_eq!(config.records, Some(PathBuf::from("claims.json")));
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::parse("colour = \"blue\"\n").is_err());
    }

    #[test]
    fn cli_flags_override_file_values() {
        let config = AppConfig::parse("mouse = true\nrecords = \"config.json\"\n")
            .unwrap()
            .with_cli_overrides(Some(PathBuf::from("cli.toml")), true);
        assert!(!config.mouse);
        assert_eq!(config.records, Some(PathBuf::from("cli.toml")));
    }

    #[test]
    fn absent_cli_flags_keep_file_values() {
        let config = AppConfig::parse("mouse = true\nrecords = \"config.json\"\n")
            .unwrap()
            .with_cli_overrides(None, false);
        assert!(config.mouse);
        assert_eq!(config.records, Some(PathBuf::from("config.json")));

        // --no-mouse only ever disables.
        let config = AppConfig::parse("mouse = false\n")
            .unwrap()
            .with_cli_overrides(None, false);
        assert!(!config.mouse);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn roundtrip_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = 100\nlog_filter = \"claimview=debug\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_filter, "claimview=debug");
    }
}
