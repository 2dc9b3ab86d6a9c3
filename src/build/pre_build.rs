//! Pre-build script execution

use std::io;
use std::path::Path;

use anyhow::Result;

use super::BuildContext;
use crate::error::BuildError;
use crate::exec::subprocess::run_command;
use crate::utils::terminal::{print_step, print_verbose};

/// Run the pre-build script, failing fast on any problem
///
/// The script path is resolved against the project root and executed with
/// no arguments. A dry run only checks that the script exists.
pub fn run_pre_build(ctx: &BuildContext, script: &Path) -> Result<()> {
    print_step(&format!("Running pre-build script: {}", script.display()));

    let script_path = ctx.project.root.join(script);
    if !script_path.is_file() {
        return Err(BuildError::PreBuildNotFound {
            path: script.to_path_buf(),
        }
        .into());
    }

    if ctx.config.dry_run {
        print_verbose(ctx.verbose, "Dry run, skipping pre-build script");
        return Ok(());
    }

    let result = run_command(&script_path, &[] as &[&str]).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => BuildError::PreBuildPermissionDenied {
            path: script.to_path_buf(),
        },
        _ => BuildError::PreBuildSpawn {
            path: script.to_path_buf(),
            source: e,
        },
    })?;

    print_verbose(
        ctx.verbose,
        &format!("Pre-build script finished in {:.2}s", result.duration.as_secs_f64()),
    );

    if !result.success {
        return Err(BuildError::PreBuildFailed {
            path: script.to_path_buf(),
            code: result.exit_code,
        }
        .into());
    }

    Ok(())
}
