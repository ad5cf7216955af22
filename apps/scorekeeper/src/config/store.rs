use std::env;
use std::path::PathBuf;

use crate::error::AppError;

pub const STORE_PATH_VAR: &str = "SCOREKEEPER_STORE_PATH";
pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
pub const DEFAULT_STORE_FILE: &str = "games.json";

/// Where completed games are kept on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the store path from the process environment.
    ///
    /// `SCOREKEEPER_STORE_PATH` wins; otherwise `games.json` inside
    /// `SCOREKEEPER_DATA_DIR` (default: the working directory).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        if let Some(path) = optional_var(&lookup, STORE_PATH_VAR)? {
            return Ok(Self::new(path));
        }
        let dir = optional_var(&lookup, DATA_DIR_VAR)?.unwrap_or_else(|| ".".to_string());
        Ok(Self::new(PathBuf::from(dir).join(DEFAULT_STORE_FILE)))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

/// Unset is fine; set-but-blank is a mistake worth reporting
fn optional_var(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<String>, AppError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(AppError::config(format!(
            "Environment variable '{name}' is set but empty"
        ))),
        Some(value) => Ok(Some(value)),
    }
}
