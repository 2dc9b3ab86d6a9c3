//! Project layout probing

use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::utils::paths::project_name;

/// Directory registered as the `shared` collection when present
pub const SHARED_COLLECTION: &str = "shared";

/// Facts about the project derived from its root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project root, the working directory of the run
    pub root: PathBuf,
    /// Base name of the root; names the output binary
    pub name: String,
    /// Whether `shared/` exists under the root
    pub has_shared_collection: bool,
}

impl Project {
    /// Probe a project root
    pub fn detect(root: &Path) -> Result<Self, BuildError> {
        Ok(Self {
            root: root.to_path_buf(),
            name: project_name(root)?,
            has_shared_collection: root.join(SHARED_COLLECTION).is_dir(),
        })
    }
}
