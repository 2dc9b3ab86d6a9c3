//! Build orchestration
//!
//! A run is a fixed sequence:
//!
//! ```text
//! pre-build script (optional) → assemble command → ensure build/ → compiler
//! ```
//!
//! Every step fails fast. Child exit codes surface through
//! [`BuildError`](crate::error::BuildError) so `main` can propagate them.
//!
//! ## Modules
//!
//! - `project` - Project name and `shared/` collection probing
//! - `pre_build` - Optional script executed before the compiler
//! - `compiler` - Compiler command assembly and execution

pub mod compiler;
pub mod pre_build;
pub mod project;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::BuildConfig;
use crate::utils::paths::ensure_dir;
use crate::utils::terminal::print_step;

pub use compiler::CompilerInvocation;
pub use project::Project;

/// Output directory for compiled binaries, relative to the project root
pub const OUTPUT_DIR: &str = "build";

/// Everything a run needs, fixed before the first step executes
#[derive(Debug)]
pub struct BuildContext {
    /// Probed project layout
    pub project: Project,
    /// Resolved configuration
    pub config: BuildConfig,
    /// Verbose output
    pub verbose: bool,
}

impl BuildContext {
    /// Create a new build context
    pub fn new(project: Project, config: BuildConfig, verbose: bool) -> Self {
        Self {
            project,
            config,
            verbose,
        }
    }

    /// Absolute path of the output directory
    pub fn output_dir(&self) -> PathBuf {
        self.project.root.join(OUTPUT_DIR)
    }
}

/// Execute a full build run
pub fn run(ctx: &BuildContext) -> Result<()> {
    if let Some(script) = &ctx.config.pre_build {
        pre_build::run_pre_build(ctx, script)?;
    }

    let invocation = CompilerInvocation::assemble(&ctx.config, &ctx.project);

    if ctx.config.dry_run {
        print_step(&format!("Would run compiler: {}", invocation.command_line()));
        return Ok(());
    }

    ensure_dir(&ctx.output_dir())?;

    compiler::execute(ctx, &invocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_dir_is_under_root() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = BuildContext::new(
            Project::detect(temp_dir.path()).unwrap(),
            BuildConfig::default(),
            false,
        );
        assert_eq!(ctx.output_dir(), temp_dir.path().join("build"));
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = BuildConfig {
            dry_run: true,
            compiler: "odin-build-definitely-missing-program".to_string(),
            ..Default::default()
        };
        let ctx = BuildContext::new(Project::detect(temp_dir.path()).unwrap(), config, false);

        run(&ctx).unwrap();
        assert!(!ctx.output_dir().exists());
    }

    #[test]
    fn test_missing_compiler_still_creates_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = BuildConfig {
            compiler: "odin-build-definitely-missing-program".to_string(),
            ..Default::default()
        };
        let ctx = BuildContext::new(Project::detect(temp_dir.path()).unwrap(), config, false);

        let err = run(&ctx).unwrap_err();
        let build_err = err.downcast_ref::<crate::error::BuildError>().unwrap();
        assert!(matches!(build_err, crate::error::BuildError::CompilerNotFound { .. }));
        assert!(ctx.output_dir().is_dir());
    }
}
