//! Process configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve logging settings for hosts without a UI-provided config.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; invalid values surface at `init_logging`.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "SELAS_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "SELAS_LOG_DIR";

/// Runtime settings for core bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Requested log level (`trace|debug|info|warn|error`).
    pub log_level: String,
    /// Directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `SELAS_LOG_LEVEL` and `SELAS_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_level = non_blank(lookup(LOG_LEVEL_ENV)).unwrap_or(defaults.log_level);
        let log_dir = non_blank(lookup(LOG_DIR_ENV)).map(PathBuf::from);
        Self { log_level, log_dir }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
