//! Compiler invocation assembly and execution

use std::io;

use anyhow::Result;

use super::project::{Project, SHARED_COLLECTION};
use super::{BuildContext, OUTPUT_DIR};
use crate::config::{BuildConfig, Strictness};
use crate::error::BuildError;
use crate::exec::subprocess::{format_command_line, run_command};
use crate::utils::terminal::{print_step, print_verbose};

/// Source directory handed to the compiler
pub const SOURCE_DIR: &str = "src";

pub const STRICT_STYLE_FLAG: &str = "-strict-style";
pub const VET_FLAG: &str = "-vet";
pub const DEBUG_FLAG: &str = "-debug";

/// Vet checks used by [`Strictness::Default`]; unused-symbol checks are left out
pub const NARROW_VET_FLAGS: [&str; 7] = [
    "-vet-cast",
    "-vet-semicolon",
    "-vet-shadowing",
    "-vet-style",
    "-vet-tabs",
    "-vet-using-param",
    "-vet-using-stmt",
];

/// A fully assembled compiler command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl CompilerInvocation {
    /// Assemble the invocation for a project
    pub fn assemble(config: &BuildConfig, project: &Project) -> Self {
        let subcommand = if config.run { "run" } else { "build" };

        let mut args = vec![
            subcommand.to_string(),
            SOURCE_DIR.to_string(),
            format!("-out={}/{}", OUTPUT_DIR, project.name),
            STRICT_STYLE_FLAG.to_string(),
        ];

        match config.strictness {
            Strictness::VeryStrict => args.push(VET_FLAG.to_string()),
            Strictness::Default => args.extend(NARROW_VET_FLAGS.iter().map(|f| f.to_string())),
        }

        if config.debug {
            args.push(DEBUG_FLAG.to_string());
        }

        if project.has_shared_collection {
            args.push(collection_flag(SHARED_COLLECTION, SHARED_COLLECTION));
        }

        // `shared` is owned by the directory probe
        for (name, path) in config.collections.iter().filter(|(name, _)| *name != SHARED_COLLECTION) {
            args.push(collection_flag(name, path));
        }

        args.extend(config.extra_args.iter().cloned());

        if config.run && !config.program_args.is_empty() {
            args.push("--".to_string());
            args.extend(config.program_args.iter().cloned());
        }

        Self {
            program: config.compiler.clone(),
            args,
        }
    }

    /// Printable command line
    pub fn command_line(&self) -> String {
        format_command_line(&self.program, &self.args)
    }
}

fn collection_flag(name: &str, path: &str) -> String {
    format!("-collection:{}={}", name, path)
}

/// Print and run the compiler, mapping failures to [`BuildError`]
pub fn execute(ctx: &BuildContext, invocation: &CompilerInvocation) -> Result<()> {
    if ctx.verbose {
        match which::which(&invocation.program) {
            Ok(path) => print_verbose(true, &format!("Compiler resolved to {}", path.display())),
            Err(_) => print_verbose(true, &format!("Compiler '{}' not found on PATH", invocation.program)),
        }
    }

    print_step(&format!("Running compiler: {}", invocation.command_line()));

    let result = run_command(&invocation.program, &invocation.args).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BuildError::CompilerNotFound {
            compiler: invocation.program.clone(),
        },
        _ => BuildError::CompilerSpawn {
            compiler: invocation.program.clone(),
            source: e,
        },
    })?;

    print_verbose(
        ctx.verbose,
        &format!("Compiler finished in {:.2}s", result.duration.as_secs_f64()),
    );

    if !result.success {
        return Err(BuildError::CompileFailed {
            code: result.exit_code,
        }
        .into());
    }

    Ok(())
}
