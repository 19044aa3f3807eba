//! Reference list path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the reference list location.
pub const NOGO_LIST_ENV_VAR: &str = "NOGO_LIST_PATH";

/// Get the default reference list path.
///
/// Resolution order:
/// 1. `NOGO_LIST_PATH` environment variable
/// 2. `data/nogo_ingredients.csv` relative to workspace root
pub fn default_nogo_list_path() -> PathBuf {
    if let Ok(path) = std::env::var(NOGO_LIST_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/nogo_ingredients.csv")
}

/// Use an explicit path when given, otherwise the default.
pub fn resolve_nogo_list_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_nogo_list_path, Path::to_path_buf)
}
