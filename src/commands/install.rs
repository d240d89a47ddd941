//! Install command handler

use std::io::{self, Write};

use anyhow::Result;

use modinstall::presentation::SourceArgs;
use modinstall::{InstallOptions, InstallOutcome, InstallUseCase, LocalFs};

use super::{load_session, GlobalOptions};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events, write_event};
use crate::ui::views::install::render_outcome;

pub fn cmd_install(globals: &GlobalOptions, source: &SourceArgs, dry_run: bool) -> Result<()> {
    let session = load_session(globals, source)?;
    let ui = session.ui;

    if ui.json {
        emit_event(&events::StartEvent::new("install"))?;
    }

    let outcome = InstallUseCase::new(LocalFs::new())
        .execute(&session.config.directive(), &InstallOptions { dry_run })?;

    report_outcome(&ui, &outcome)?;
    Ok(())
}

pub(crate) fn report_outcome(ui: &UiContext, outcome: &InstallOutcome) -> io::Result<()> {
    write_outcome(ui, &mut io::stdout().lock(), outcome)
}

pub(crate) fn write_outcome(
    ui: &UiContext,
    out: &mut impl Write,
    outcome: &InstallOutcome,
) -> io::Result<()> {
    if ui.json {
        return write_event(out, &events::outcome_event(outcome));
    }
    write!(out, "{}", render_outcome(outcome, ui.color, ui.unicode))?;
    out.flush()
}
