//! Configuration loading and parsing.
//!
//! Parses `textcmd.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [history]
//! capacity = 200        # optional; absent keeps every command
//!
//! [log]
//! filter = "info"       # used when RUST_LOG is unset
//! file = "textcmd.log"
//! ```
//!
//! A missing file or a parse error yields defaults. Unknown fields are ignored
//! so older binaries tolerate newer files.
//!
//! Loading happens before the binary installs its tracing subscriber, so
//! `load_from` only records what happened in `Config::load_issue`; the caller
//! emits it with `Config::log_load_outcome` once logging is live.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, info, warn};

pub const CONFIG_FILE_NAME: &str = "textcmd.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of undoable commands retained; `None` = unbounded.
    #[serde(default)]
    pub capacity: Option<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_filter")]
    pub filter: String,
    #[serde(default = "LogConfig::default_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
            file: Self::default_file(),
        }
    }
}

impl LogConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
    fn default_file() -> String {
        "textcmd.log".to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Why a config file was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// An explicitly requested file could not be read.
    Unreadable { path: PathBuf, error: String },
    /// The file was read but is not valid config TOML.
    Invalid { path: PathBuf, error: String },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File the settings came from; `None` when running on defaults.
    pub path: Option<PathBuf>,
    pub file: ConfigFile,
    pub load_issue: Option<LoadIssue>,
}

impl Config {
    pub fn history_capacity(&self) -> Option<usize> {
        self.file.history.capacity
    }

    fn with_issue(issue: LoadIssue) -> Self {
        Self {
            load_issue: Some(issue),
            ..Self::default()
        }
    }

    /// Emit the outcome of `load_from` under the `config` target.
    pub fn log_load_outcome(&self) {
        match (&self.load_issue, &self.path) {
            (Some(LoadIssue::Invalid { path, error }), _) => {
                warn!(target: "config", path = %path.display(), %error, "config_parse_failed_using_defaults");
            }
            (Some(LoadIssue::Unreadable { path, error }), _) => {
                warn!(target: "config", path = %path.display(), %error, "config_unreadable_using_defaults");
            }
            (None, Some(path)) => {
                info!(target: "config", path = %path.display(), capacity = ?self.history_capacity(), "config_loaded");
            }
            (None, None) => {
                debug!(target: "config", "config_absent_using_defaults");
            }
        }
    }
}

/// Config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("textcmd").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load config from `path`, or from `discover()` when `None`.
///
/// A discovered file that does not exist is the normal no-config case. An
/// explicit path that cannot be read, or any file that fails to parse, falls
/// back to defaults with the reason kept in `load_issue`.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if explicit => {
            return Ok(Config::with_issue(LoadIssue::Unreadable {
                path,
                error: e.to_string(),
            }));
        }
        Err(_) => return Ok(Config::default()),
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            path: Some(path),
            file,
            load_issue: None,
        }),
        Err(e) => Ok(Config::with_issue(LoadIssue::Invalid {
            path,
            error: e.to_string(),
        })),
    }
}
