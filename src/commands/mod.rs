//! Command handlers for the modinstall binary

pub mod check;
pub mod install;
pub mod run;

use std::path::PathBuf;

use anyhow::Result;

use modinstall::config::{Config, ConfigLoader};
use modinstall::presentation::{ColorWhen, SourceArgs};

use crate::ui::context::UiContext;
use crate::ui::output::{print_config_warnings, print_provenance};

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub project_dir: PathBuf,
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
}

/// Resolved configuration plus the output context derived from it
pub(crate) struct Session {
    pub config: Config,
    pub ui: UiContext,
}

pub(crate) fn load_session(globals: &GlobalOptions, source: &SourceArgs) -> Result<Session> {
    let (config, warnings) = ConfigLoader::new(&globals.project_dir)
        .overrides(source.overrides())
        .load()?;
    let ui = UiContext::new(globals.json, globals.verbose, globals.color, &config.output);

    print_config_warnings(&ui, &warnings);
    print_provenance(&ui, &config);

    Ok(Session { config, ui })
}
