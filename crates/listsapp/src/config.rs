//! # Configuration
//!
//! Server configuration is managed by [`confique`], which layers TOML files, environment
//! variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `LISTS_PORT`, `LISTS_DATA_DIR`, etc.
//! 2. **Explicit file**: the path given with `--config`.
//! 3. **User file**: `lists.toml` in the OS config directory (via the `directories` crate).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Command-line flags are applied on top by the binary.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `bind` | `127.0.0.1` | Address to listen on |
//! | `port` | `4567` | Port to listen on |
//! | `data_dir` | unset | Directory for session files; sessions stay in memory when unset |
//! | `cookie_name` | `lists.session` | Name of the session cookie |
//! | `session_ttl_hours` | `336` | Sessions idle for longer are swept (at startup, then hourly) |

use crate::error::{ListsError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "lists.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListsConfig {
    /// Address to listen on
    #[config(env = "LISTS_BIND", default = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[config(env = "LISTS_PORT", default = 4567)]
    pub port: u16,

    /// Directory holding one JSON file per session. When absent, sessions live in memory.
    #[config(env = "LISTS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name of the cookie carrying the session id
    #[config(env = "LISTS_COOKIE_NAME", default = "lists.session")]
    pub cookie_name: String,

    /// Sessions not touched for this many hours are removed by the periodic sweep
    #[config(env = "LISTS_SESSION_TTL_HOURS", default = 336)]
    pub session_ttl_hours: u64,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 4567,
            data_dir: None,
            cookie_name: "lists.session".to_string(),
            session_ttl_hours: 336,
        }
    }
}

impl ListsConfig {
    /// Loads configuration from the environment, `explicit` (if given) and the user's
    /// config file, in that order of precedence.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(explicit, default_config_path().as_deref())
    }

    /// Like [`ListsConfig::load`], with the user config file given instead of looked up.
    /// A missing `user_file` is skipped; a missing `explicit` file is an error.
    pub fn load_from(explicit: Option<&Path>, user_file: Option<&Path>) -> Result<Self> {
        let mut builder = ListsConfig::builder().env();
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ListsError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        if let Some(path) = user_file {
            builder = builder.file(path);
        }
        builder.load().map_err(|e| ListsError::Config(e.to_string()))
    }

    /// The `host:port` string to bind to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        let hours = i64::try_from(self.session_ttl_hours).unwrap_or(i64::MAX);
        chrono::Duration::try_hours(hours).unwrap_or(chrono::Duration::MAX)
    }
}

/// `lists.toml` in the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lists").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
