//! modinstall - copy a freshly built mod jar into a local mods directory
//!
//! Usage: modinstall [COMMAND]
//!
//! Commands:
//!   install  Copy the built artifact into the mods directory (default)
//!   check    Show the resolved configuration and installed state
//!   run      Run a build command, then install its artifact

mod commands;
mod ui;

use clap::Parser;

use modinstall::presentation::{Cli, Commands, SourceArgs};

use commands::GlobalOptions;

fn main() {
    let cli = Cli::parse();
    let globals = GlobalOptions {
        project_dir: cli.project_dir.clone(),
        json: cli.json,
        color: cli.color,
        verbose: cli.verbose,
    };

    let result = match &cli.command {
        None => commands::install::cmd_install(&globals, &SourceArgs::default(), false),
        Some(Commands::Install { source, dry_run }) => {
            commands::install::cmd_install(&globals, source, *dry_run)
        }
        Some(Commands::Check { source }) => commands::check::cmd_check(&globals, source),
        Some(Commands::Run {
            source,
            dry_run,
            command,
        }) => commands::run::cmd_run(&globals, source, *dry_run, command),
    };

    if let Err(err) = result {
        ui::error::print_error(&err, globals.json);
        std::process::exit(1);
    }
}
