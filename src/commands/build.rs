//! Build command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::build::project::SHARED_COLLECTION;
use crate::build::{self, BuildContext, Project};
use crate::config::{BuildConfig, BuildFile, Strictness, CONFIG_FILE_NAME, DEFAULT_COMPILER};
use crate::utils::terminal::{print_verbose, print_warning};

/// Build the Odin project in the current directory
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Do a debug build
    #[arg(long)]
    pub debug: bool,

    /// Run the program after building
    #[arg(long)]
    pub run: bool,

    /// Enable every vet check instead of the default subset
    #[arg(long)]
    pub very_strict: bool,

    /// Path to a pre-build script (make sure it's executable)
    #[arg(long, value_name = "PATH_TO_SCRIPT")]
    pub pre_build: Option<PathBuf>,

    /// Compiler executable
    #[arg(long, env = "ODIN_BUILD_COMPILER", value_name = "PROGRAM")]
    pub compiler: Option<String>,

    /// Config file to use instead of odin-build.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the compiler command without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Arguments passed to the program when using --run
    #[arg(last = true)]
    pub args: Vec<String>,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        let project = Project::detect(&root)?;

        let file = self.load_config_file(&root, verbose)?;
        let config = self.resolve_config(file);

        if !config.run && !config.program_args.is_empty() {
            print_warning("program arguments are ignored without --run");
        }

        print_verbose(
            verbose,
            &format!(
                "Project '{}' ({} strictness)",
                project.name, config.strictness
            ),
        );

        build::run(&BuildContext::new(project, config, verbose))
    }

    /// Load odin-build.toml, or the file given with --config
    fn load_config_file(&self, root: &Path, verbose: bool) -> Result<Option<BuildFile>> {
        let path = match &self.config {
            Some(path) => root.join(path),
            None => root.join(CONFIG_FILE_NAME),
        };

        let file = BuildFile::load(&path, self.config.is_some())?;
        if file.is_some() {
            print_verbose(verbose, &format!("Using config file {}", path.display()));
        }

        Ok(file)
    }

    /// Merge flags over config file values
    pub fn resolve_config(self, file: Option<BuildFile>) -> BuildConfig {
        let BuildFile { build, collections } = file.unwrap_or_default();

        if collections.contains_key(SHARED_COLLECTION) {
            print_warning("the 'shared' collection is detected from the shared/ directory; ignoring config entry");
        }

        let strictness = if self.very_strict {
            Strictness::VeryStrict
        } else {
            build.strictness.unwrap_or_default()
        };

        BuildConfig {
            debug: self.debug,
            run: self.run,
            strictness,
            pre_build: self.pre_build.or(build.pre_build),
            compiler: self
                .compiler
                .or(build.compiler)
                .unwrap_or_else(|| DEFAULT_COMPILER.to_string()),
            extra_args: build.extra_args,
            collections,
            program_args: self.args,
            dry_run: self.dry_run,
        }
    }
}
