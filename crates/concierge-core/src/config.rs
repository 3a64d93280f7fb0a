//! Configuration resolution for Concierge Admin.
//!
//! Resolution order (lowest to highest priority):
//! 1. Built-in defaults
//! 2. Config file (`--config` path, else `~/.concierge/config.json`)
//! 3. Environment variables (`CONCIERGE_*`)
//! 4. CLI arguments, applied by the binary

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::StatusFilter;

/// Complete Concierge configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConciergeConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Status filter applied to the request list on start-up.
    pub default_filter: StatusFilter,
    /// Event poll interval (milliseconds).
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_filter: StatusFilter::All,
            tick_ms: 50,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Default level used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON log lines.
    pub json: bool,
    /// Log file for the interactive UI. `None` uses [`default_log_path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl LogConfig {
    /// `EnvFilter` directive for the workspace crates at the configured level.
    pub fn filter_directive(&self) -> String {
        format!(
            "concierge={lvl},concierge_core={lvl},concierge_cli={lvl}",
            lvl = self.level
        )
    }
}

/// Directory holding the config and log files: `~/.concierge/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".concierge"))
}

/// Default config file: `~/.concierge/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.json"))
}

/// Default log file for the interactive UI: `~/.concierge/concierge.log`.
pub fn default_log_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("concierge.log"))
}

/// Load configuration from `path` (or the default location) plus env overrides.
///
/// A missing file yields the defaults; an unreadable or malformed file is an
/// error.
pub fn load_config(path: Option<&Path>) -> Result<ConciergeConfig> {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);
    let mut config = match path {
        Some(ref p) if p.exists() => load_config_file(p)?,
        _ => ConciergeConfig::default(),
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<ConciergeConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

/// Apply `CONCIERGE_*` overrides. Unparseable values are ignored.
fn apply_env_overrides(config: &mut ConciergeConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(val) = var("CONCIERGE_LOG_LEVEL") {
        config.log.level = val;
    }
    if let Some(val) = var("CONCIERGE_LOG_JSON") {
        if let Ok(b) = val.parse() {
            config.log.json = b;
        }
    }
    if let Some(val) = var("CONCIERGE_LOG_FILE") {
        config.log.file = Some(PathBuf::from(val));
    }
    if let Some(val) = var("CONCIERGE_DEFAULT_FILTER") {
        if let Ok(f) = val.parse() {
            config.ui.default_filter = f;
        }
    }
    if let Some(val) = var("CONCIERGE_TICK_MS") {
        if let Ok(n) = val.parse() {
            config.ui.tick_ms = n;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let config = ConciergeConfig::default();
        assert_eq!(config.ui.default_filter, StatusFilter::All);
        assert_eq!(config.ui.tick_ms, 50);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_config(Some(&path)).is_ok());
        assert!(matches!(load_config_file(&path), Err(Error::Config(_))));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ui": {"default_filter": "inProgress"}}"#).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.ui.default_filter, StatusFilter::InProgress);
        assert_eq!(config.ui.tick_ms, 50);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ui": {"default_filter": "archived"}}"#).unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut config = ConciergeConfig::default();
        config.log.level = "warn".into();
        let env: HashMap<&str, &str> = [
            ("CONCIERGE_LOG_LEVEL", "debug"),
            ("CONCIERGE_LOG_JSON", "true"),
            ("CONCIERGE_LOG_FILE", "/tmp/c.log"),
            ("CONCIERGE_DEFAULT_FILTER", "completed"),
            ("CONCIERGE_TICK_MS", "100"),
        ]
        .into_iter()
        .collect();
        apply_env_overrides(&mut config, |k| env.get(k).map(ToString::to_string));

        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert_eq!(config.log.file.as_deref(), Some(Path::new("/tmp/c.log")));
        assert_eq!(config.ui.default_filter, StatusFilter::Completed);
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let mut config = ConciergeConfig::default();
        apply_env_overrides(&mut config, |k| match k {
            "CONCIERGE_TICK_MS" => Some("fast".into()),
            "CONCIERGE_DEFAULT_FILTER" => Some("archived".into()),
            "CONCIERGE_LOG_JSON" => Some("yes".into()),
            _ => None,
        });
        assert_eq!(config, ConciergeConfig::default());
    }

    #[test]
    fn filter_directive_covers_workspace_crates() {
        let log = LogConfig {
            level: "debug".into(),
            ..LogConfig::default()
        };
        assert_eq!(
            log.filter_directive(),
            "concierge=debug,concierge_core=debug,concierge_cli=debug"
        );
    }

    #[test]
    fn default_paths_live_under_dot_concierge() {
        if let Some(path) = default_config_path() {
            assert!(path.to_string_lossy().contains(".concierge"));
            assert!(path.ends_with("config.json"));
        }
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("concierge.log"));
        }
    }
}
