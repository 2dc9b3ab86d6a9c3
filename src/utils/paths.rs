//! Path utilities for odin-build

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::BuildError;

/// Derive the project name from the base name of a directory
pub fn project_name(dir: &Path) -> Result<String, BuildError> {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| BuildError::ProjectName {
            path: dir.to_path_buf(),
        })
}

/// Ensure a directory exists, creating missing parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}
