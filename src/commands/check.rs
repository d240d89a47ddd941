//! Check command handler
//!
//! Read-only: reports the resolved directive and compares the installed copy by hash.

use anyhow::Result;

use modinstall::presentation::SourceArgs;
use modinstall::{CheckUseCase, LocalFs};

use super::{load_session, GlobalOptions};
use crate::ui::json::{emit_event, events};
use crate::ui::views::check::render_check_report;

pub fn cmd_check(globals: &GlobalOptions, source: &SourceArgs) -> Result<()> {
    let session = load_session(globals, source)?;
    let ui = session.ui;

    if ui.json {
        emit_event(&events::StartEvent::new("check"))?;
    }

    let report = CheckUseCase::new(LocalFs::new()).execute(&session.config.directive())?;

    if ui.json {
        emit_event(&events::CheckEvent::new(&report))?;
        return Ok(());
    }

    print!("{}", render_check_report(&report, ui.color, ui.unicode));
    Ok(())
}
