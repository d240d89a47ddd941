use modinstall::application::{CheckReport, InstalledState};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_report(
    report: &CheckReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let row = |label: &str, value: String, note: String| {
        let note = if note.is_empty() {
            String::new()
        } else {
            format!(" {}", ColoredText::dim(format!("({})", note)).render(supports_color))
        };
        format!("  {:<12} {}{}\n", label, value, note)
    };

    let mut out = format!(
        "{} {}\n",
        Icon::Check.colored(supports_color, supports_unicode),
        ColoredText::info("modinstall check").bold().render(supports_color)
    );

    out.push_str(&match &report.destination {
        Some(dir) => row(
            "modsDir",
            dir.display().to_string(),
            if report.destination_is_dir {
                "exists"
            } else if report.destination_exists {
                "not a directory"
            } else {
                "missing"
            }
            .to_string(),
        ),
        None => row("modsDir", "(not set)".to_string(), String::new()),
    });

    out.push_str(&match (&report.artifact, &report.artifact_hash) {
        (Some(path), Some(hash)) => row(
            "artifact",
            path.display().to_string(),
            format!("sha256:{}", hash.short()),
        ),
        (Some(path), None) => row("artifact", path.display().to_string(), "missing".to_string()),
        (None, _) => row("artifact", "(cannot be determined)".to_string(), String::new()),
    });

    let installed = match &report.installed {
        InstalledState::Unknown => "unknown".to_string(),
        InstalledState::NotInstalled => "not installed".to_string(),
        InstalledState::Current => ColoredText::success("current").render(supports_color),
        InstalledState::Stale { installed } => format!(
            "{} {}",
            ColoredText::warning("stale").render(supports_color),
            ColoredText::dim(format!("(sha256:{})", installed.short())).render(supports_color)
        ),
    };
    out.push_str(&row("installed", installed, String::new()));

    out.push_str(&summary(report, supports_color, supports_unicode));
    out
}

fn summary(report: &CheckReport, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(reason) = report.skip_reason() {
        return format!(
            "{} Install would skip: {}\n",
            Icon::Skip.colored(supports_color, supports_unicode),
            reason
        );
    }
    if report.destination_not_directory() {
        return format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("modsDir is not a directory; install would fail")
                .render(supports_color)
        );
    }
    if report.is_ready() {
        let what = match report.installed {
            InstalledState::Current => "Installed copy is up to date",
            _ => "Ready to install",
        };
        return format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            what
        );
    }
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Artifact missing; build the project first").render(supports_color)
    )
}
