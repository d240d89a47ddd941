//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--project-dir, --json, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand installs with configured defaults

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// modinstall - copy a freshly built mod jar into your mods directory
#[derive(Parser, Debug)]
#[command(name = "modinstall")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'modinstall' without a subcommand to install using gradle-local.properties.")]
pub struct Cli {
    /// Project directory holding gradle.properties and gradle-local.properties
    #[arg(short = 'C', long, global = true, default_value = ".", value_name = "DIR")]
    pub project_dir: PathBuf,

    /// Output format for CI (one JSON event per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the artifact comes from and where it goes
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Artifact to install (default: <build-dir>/libs/<projectName>-<projectVersion>.jar)
    #[arg(long, value_name = "PATH")]
    pub artifact: Option<PathBuf>,

    /// Mods directory to install into (overrides modsDir)
    #[arg(long, value_name = "DIR")]
    pub mods_dir: Option<PathBuf>,

    /// Build output directory (default: <project>/build)
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,
}

impl SourceArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mods_dir: self.mods_dir.clone(),
            artifact: self.artifact.clone(),
            build_dir: self.build_dir.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the built artifact into the mods directory
    Install {
        #[command(flatten)]
        source: SourceArgs,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the resolved configuration and whether the installed copy is current
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run a build command, then install its artifact
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Dry run - build, then show what would be installed
        #[arg(long)]
        dry_run: bool,

        /// Build command and its arguments, e.g. `-- ./gradlew build`
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },
}
