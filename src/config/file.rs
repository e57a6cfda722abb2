//! Configuration file loading.
//!
//! Configuration lives in a single JSON file passed explicitly on the command
//! line. There is no discovery chain: no path means defaults, a path that
//! cannot be read or parsed is an error.

use std::path::{Path, PathBuf};

use super::types::SearchConfig;
use crate::error::{Result, SimscoreError};

/// Load a `SearchConfig` from a JSON file.
pub fn load_config_file(path: &Path) -> Result<SearchConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SimscoreError::io(path, e))?;
    let config: SearchConfig = serde_json::from_str(&content)
        .map_err(|e| SimscoreError::config(format!("failed to parse {}: {e}", path.display())))?;
    Ok(config)
}

/// Load config from an explicit path, or fall back to defaults when no path
/// was given. Returns the path actually loaded, if any.
pub fn load_or_default(explicit_path: Option<&Path>) -> Result<(SearchConfig, Option<PathBuf>)> {
    match explicit_path {
        None => Ok((SearchConfig::default(), None)),
        Some(path) => {
            let config = load_config_file(path)?;
            Ok((config, Some(path.to_path_buf())))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
