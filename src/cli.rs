//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::commands::build::BuildCommand;
use crate::utils::terminal::disable_colors;

/// odin-build - build front-end for Odin projects
///
/// Builds the project in the current directory into build/<project_name>,
/// optionally running a pre-build script first and the program afterwards.
#[derive(Parser, Debug)]
#[command(name = "odin-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub build: BuildCommand,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            disable_colors();
        }

        self.build.execute(self.verbose)
    }
}
