//! Build configuration
//!
//! A [`BuildConfig`] is resolved once per run from command-line flags, the
//! environment and the optional `odin-build.toml`, then handed to the build
//! orchestrator unchanged.

pub mod build_toml;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

pub use build_toml::{BuildFile, CONFIG_FILE_NAME};

/// Compiler used when neither flag, environment nor config file names one
pub const DEFAULT_COMPILER: &str = "odin";

/// Vetting policy for the compiler invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strictness {
    /// Narrow vet checks that skip unused-symbol diagnostics
    #[default]
    Default,
    /// Every vet check
    VeryStrict,
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strictness::Default => write!(f, "default"),
            Strictness::VeryStrict => write!(f, "very-strict"),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Pass the debug flag to the compiler
    pub debug: bool,

    /// Use `run` instead of `build`
    pub run: bool,

    /// Vetting policy
    pub strictness: Strictness,

    /// Script executed before compiling, relative to the project root
    pub pre_build: Option<PathBuf>,

    /// Compiler executable
    pub compiler: String,

    /// Extra flags appended to the compiler invocation
    pub extra_args: Vec<String>,

    /// Additional named collections, alias -> path
    pub collections: BTreeMap<String, String>,

    /// Arguments forwarded to the built program when running it
    pub program_args: Vec<String>,

    /// Print the invocation without executing anything
    pub dry_run: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            debug: false,
            run: false,
            strictness: Strictness::Default,
            pre_build: None,
            compiler: DEFAULT_COMPILER.to_string(),
            extra_args: Vec::new(),
            collections: BTreeMap::new(),
            program_args: Vec::new(),
            dry_run: false,
        }
    }
}
