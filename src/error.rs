//! Error types and helpers for user-friendly error messages
//!
//! Every failure of a run maps to one [`BuildError`] variant. The variant
//! decides the process exit code: child exit codes are passed through
//! unchanged, everything without an underlying code exits with `1`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code used when no child process exit code is available
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Failures of a single build run
#[derive(Error, Debug)]
pub enum BuildError {
    /// The configured pre-build script does not exist
    #[error("Pre-build script '{}' not found.", path.display())]
    PreBuildNotFound { path: PathBuf },

    /// The pre-build script exists but cannot be executed
    #[error("Permission denied for the pre-build script '{}'.", path.display())]
    PreBuildPermissionDenied { path: PathBuf },

    /// The pre-build script ran and returned a non-zero status
    #[error("Pre-build script failed with exit code {code}")]
    PreBuildFailed { path: PathBuf, code: i32 },

    /// The pre-build script could not be started for another reason
    #[error("Failed to run pre-build script '{}': {source}", path.display())]
    PreBuildSpawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The compiler executable could not be found
    #[error("Compiler '{compiler}' not found")]
    CompilerNotFound { compiler: String },

    /// The compiler could not be started for another reason
    #[error("Failed to run compiler '{compiler}': {source}")]
    CompilerSpawn {
        compiler: String,
        #[source]
        source: io::Error,
    },

    /// The compiler ran and returned a non-zero status
    #[error("Build failed with exit code {code}")]
    CompileFailed { code: i32 },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The working directory has no usable base name
    #[error("Cannot derive a project name from '{}'", path.display())]
    ProjectName { path: PathBuf },
}

impl BuildError {
    /// Process exit code for this error
    ///
    /// Child exit codes are propagated verbatim so calling tools can tell
    /// failure causes apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::PreBuildFailed { code, .. } | BuildError::CompileFailed { code } => *code,
            _ => FALLBACK_EXIT_CODE,
        }
    }

    /// Actionable hint shown below the error, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            BuildError::PreBuildPermissionDenied { path } => Some(hints::chmod(path)),
            BuildError::CompilerNotFound { .. } => Some(hints::odin().to_string()),
            BuildError::Config { .. } => Some(hints::config_file().to_string()),
            _ => None,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("{}", style(self).bold());

        if let Some(hint) = self.hint() {
            eprintln!("{} {}", style("HINT:").yellow().bold(), hint);
        }
    }
}

/// Report an error to stderr and return the exit code the process should use
pub fn report(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BuildError>() {
        Some(build_err) => {
            build_err.display_with_hints();
            build_err.exit_code()
        }
        None => {
            crate::utils::terminal::print_error(&format!("{:#}", err));
            FALLBACK_EXIT_CODE
        }
    }
}

/// Common error hints
pub mod hints {
    use std::path::Path;

    /// Hint for a pre-build script without the execute bit
    pub fn chmod(path: &Path) -> String {
        format!("Please run: chmod +x {}", path.display())
    }

    /// Hint for a missing Odin compiler
    pub fn odin() -> &'static str {
        "Install Odin from https://odin-lang.org/docs/install/ and make sure `odin` is on your PATH.\n\
         To use a different executable, pass --compiler <program> or set ODIN_BUILD_COMPILER."
    }

    /// Hint for an invalid odin-build.toml
    pub fn config_file() -> &'static str {
        "odin-build.toml is invalid. Common issues:\n\
         • Unknown key (allowed: [build] compiler, strictness, pre_build, extra_args; [collections])\n\
         • strictness must be \"default\" or \"very-strict\"\n\
         • Invalid TOML syntax (check quotes, brackets, commas)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_exit_codes_pass_through() {
        let err = BuildError::PreBuildFailed {
            path: PathBuf::from("gen.sh"),
            code: 7,
        };
        assert_eq!(err.exit_code(), 7);
        assert_eq!(BuildError::CompileFailed { code: 3 }.exit_code(), 3);
    }

    #[test]
    fn test_errors_without_child_code_exit_one() {
        let not_found = BuildError::PreBuildNotFound {
            path: PathBuf::from("missing.sh"),
        };
        assert_eq!(not_found.exit_code(), 1);

        let denied = BuildError::PreBuildPermissionDenied {
            path: PathBuf::from("gen.sh"),
        };
        assert_eq!(denied.exit_code(), 1);

        let compiler = BuildError::CompilerNotFound {
            compiler: "odin".into(),
        };
        assert_eq!(compiler.exit_code(), 1);
    }

    #[test]
    fn test_messages() {
        let err = BuildError::PreBuildNotFound {
            path: PathBuf::from("scripts/gen.sh"),
        };
        assert_eq!(err.to_string(), "Pre-build script 'scripts/gen.sh' not found.");
        assert_eq!(
            BuildError::CompileFailed { code: 3 }.to_string(),
            "Build failed with exit code 3"
        );
    }

    #[test]
    fn test_permission_denied_hint_mentions_chmod() {
        let err = BuildError::PreBuildPermissionDenied {
            path: PathBuf::from("gen.sh"),
        };
        assert_eq!(err.hint().as_deref(), Some("Please run: chmod +x gen.sh"));
        assert!(BuildError::CompileFailed { code: 1 }.hint().is_none());
    }

    #[test]
    fn test_report_downcasts_build_errors() {
        let err = anyhow::Error::new(BuildError::CompileFailed { code: 42 });
        assert_eq!(report(&err), 42);

        let other = anyhow::anyhow!("something else");
        assert_eq!(report(&other), FALLBACK_EXIT_CODE);
    }
}
