// Utilities Module
//
// Common utilities and helper functions used throughout the deltatest codebase.

/// File utilities
pub mod file_utils {
    use crate::error::{DeltaTestError, Result};
    use std::fs;
    use std::path::Path;

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| DeltaTestError::io(path, e))
    }

    /// Create `dir` and its parents. Succeeds when it already exists.
    pub fn ensure_dir(dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| DeltaTestError::io(dir, e))
    }

    /// Write the whole file in one call, creating parent directories first
    pub fn write_file_content(path: &Path, data: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }
        fs::write(path, data).map_err(|e| DeltaTestError::io(path, e))
    }
}
