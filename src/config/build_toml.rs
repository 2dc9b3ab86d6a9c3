//! odin-build.toml parsing
//!
//! The file is optional. When present it supplies defaults that command-line
//! flags override.
//!
//! ```toml
//! [build]
//! compiler = "odin"
//! strictness = "very-strict"
//! pre_build = "scripts/generate.sh"
//! extra_args = ["-o:speed"]
//!
//! [collections]
//! vendor = "third_party"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::Strictness;
use crate::error::BuildError;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "odin-build.toml";

/// Root of odin-build.toml
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildFile {
    /// Compiler invocation defaults
    #[serde(default)]
    pub build: BuildSection,

    /// Additional named collections, alias -> path
    #[serde(default)]
    pub collections: BTreeMap<String, String>,
}

/// The [build] section
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Compiler executable
    pub compiler: Option<String>,

    /// Vetting policy
    pub strictness: Option<Strictness>,

    /// Pre-build script, relative to the project root
    pub pre_build: Option<PathBuf>,

    /// Extra flags appended to every compiler invocation
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl BuildFile {
    /// Parse config file contents
    pub fn parse(content: &str, path: &Path) -> Result<Self, BuildError> {
        toml::from_str(content).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load a config file
    ///
    /// With `explicit` unset a missing file yields the defaults; an explicitly
    /// requested file must exist.
    pub fn load(path: &Path, explicit: bool) -> Result<Option<Self>, BuildError> {
        if !path.exists() && !explicit {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content, path).map(Some)
    }
}
