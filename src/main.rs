//! odin-build - a build front-end for Odin projects
//!
//! Runs an optional pre-build script, then invokes the Odin compiler on
//! `src/` with the project's vetting policy, writing `build/<project_name>`.
//!
//! ## Architecture
//!
//! ```text
//! cli → commands/build → config → build/{pre_build, compiler} → exec/subprocess
//! ```

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        std::process::exit(error::report(&err));
    }
}
