use std::path::Path;

use modinstall::application::Step;
use modinstall::{InstallOutcome, SkipReason};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn parent(path: &Path) -> String {
    path.parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

pub fn render_skip(reason: &SkipReason, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Skip.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("Skipping install: {}", reason)).render(supports_color)
    )
}

pub fn render_outcome(
    outcome: &InstallOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome {
        InstallOutcome::Skipped(reason) => render_skip(reason, supports_color, supports_unicode),
        InstallOutcome::Installed {
            destination_file,
            replaced,
            ..
        } => {
            let mut line = format!(
                "{} Installed {} to: {}",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success(file_name(destination_file))
                    .bold()
                    .render(supports_color),
                parent(destination_file)
            );
            if *replaced {
                line.push_str(&ColoredText::dim(" (replaced previous copy)").render(supports_color));
            }
            line.push('\n');
            line
        }
        InstallOutcome::Planned {
            destination_file,
            replace,
            ..
        } => {
            let mut line = format!(
                "{} Would install {} to: {}",
                Icon::Progress.colored(supports_color, supports_unicode),
                file_name(destination_file),
                parent(destination_file)
            );
            if *replace {
                line.push_str(&ColoredText::dim(" (replacing existing file)").render(supports_color));
            }
            line.push_str(&ColoredText::dim(" [dry run]").render(supports_color));
            line.push('\n');
            line
        }
    }
}

/// Header line shown before a build step starts
pub fn render_step(step: &Step, supports_color: bool, supports_unicode: bool) -> Option<String> {
    match step {
        Step::Build(command) => Some(format!(
            "{} {}\n",
            Icon::Build.colored(supports_color, supports_unicode),
            ColoredText::info(format!("Running {}", command)).render(supports_color)
        )),
        Step::Install => None,
    }
}
