//! Run command handler: build, then install

use std::io::{self, Write};

use anyhow::{anyhow, Result};

use modinstall::application::PipelineEvent;
use modinstall::domain::ports::BuildCommand;
use modinstall::presentation::SourceArgs;
use modinstall::{InstallOptions, InstallUseCase, LocalFs, Pipeline, ProcessBuildRunner};

use super::install::write_outcome;
use super::{load_session, GlobalOptions};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events, write_typed_event};
use crate::ui::views::install::render_step;

pub fn cmd_run(
    globals: &GlobalOptions,
    source: &SourceArgs,
    dry_run: bool,
    argv: &[String],
) -> Result<()> {
    let session = load_session(globals, source)?;
    let ui = session.ui;

    let command = BuildCommand::from_argv(argv, session.config.project_dir.clone())
        .ok_or_else(|| anyhow!("no build command given"))?;

    if ui.json {
        emit_event(&events::StartEvent::new("run"))?;
    }

    // The pipeline keeps going after a failed write; the first one is reported
    // once it returns.
    let mut write_error: Option<io::Error> = None;
    let pipeline = Pipeline::new().build(command).install();
    pipeline.run(
        &InstallUseCase::new(LocalFs::new()),
        &ProcessBuildRunner::new(ui.json),
        &session.config.directive(),
        &InstallOptions { dry_run },
        |event| {
            if let Err(e) = write_pipeline_event(&ui, &mut io::stdout().lock(), &event) {
                write_error.get_or_insert(e);
            }
        },
    )?;

    match write_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn write_pipeline_event(
    ui: &UiContext,
    out: &mut impl Write,
    event: &PipelineEvent<'_>,
) -> io::Result<()> {
    match *event {
        PipelineEvent::StepStarted { index, step } => {
            if ui.json {
                write_typed_event(out, &events::StepEvent::new(index, step, "started"))
            } else if let Some(line) = render_step(step, ui.color, ui.unicode) {
                write!(out, "{}", line)?;
                out.flush()
            } else {
                Ok(())
            }
        }
        PipelineEvent::StepFinished { index, step } => {
            if ui.json {
                write_typed_event(out, &events::StepEvent::new(index, step, "finished"))
            } else {
                Ok(())
            }
        }
        PipelineEvent::Install(outcome) => write_outcome(ui, out, outcome),
    }
}
