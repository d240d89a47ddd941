use std::path::Path;

use modinstall::InstallError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// What the user can do about an install error, if anything obvious
fn hint(err: &InstallError) -> Option<&'static str> {
    match err {
        InstallError::StaleFileUndeletable { .. } => Some(
            "Close anything holding the file open (a running game locks its mods) and install again.",
        ),
        InstallError::ArtifactNotFound { .. } => {
            Some("Build the project first, or pass --artifact with the jar to install.")
        }
        InstallError::DestinationNotDirectory { .. } => {
            Some("Point modsDir in gradle-local.properties at a directory.")
        }
        InstallError::InvalidConfig { .. } => Some("Fix the file or remove it."),
        InstallError::BuildSpawn { .. } => Some("Check that the build command exists and is executable."),
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("error: {}", err))
            .bold()
            .render(supports_color)
    );

    let install_err = err.downcast_ref::<InstallError>();
    if let Some(hint) = install_err.and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let install_err = err.downcast_ref::<InstallError>();

    if json {
        let event = match install_err {
            Some(e) => ErrorEvent::from_install_error(e),
            None => ErrorEvent::new(err.to_string()),
        };
        let _ = emit_event(&event);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        let file = install_err.and_then(InstallError::path);
        println!("{}", github_actions_annotation(&err.to_string(), file));
    }

    eprint!("{}", format_error_with(err, caps.supports_color, caps.supports_unicode));
}

/// `::error` workflow command so the failure shows up on the run summary
fn github_actions_annotation(message: &str, file: Option<&Path>) -> String {
    let mut props = vec!["title=modinstall".to_string()];
    if let Some(file) = file {
        props.insert(0, format!("file={}", escape_property(&file.display().to_string())));
    }
    format!("::error {}::{}", props.join(","), escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn stale() -> anyhow::Error {
        InstallError::StaleFileUndeletable {
            path: PathBuf::from("/tmp/mods/mymod-1.0.jar"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into()
    }

    #[test]
    fn stale_file_error_names_path_and_hint() {
        let rendered = format_error_with(&stale(), false, false);
        insta::assert_snapshot!(rendered.trim_end(), @r"
        [FAIL] error: failed to replace existing mod at /tmp/mods/mymod-1.0.jar: denied
          [>] Close anything holding the file open (a running game locks its mods) and install again.
        ");
    }

    #[test]
    fn plain_anyhow_error_has_no_hint() {
        let rendered = format_error_with(&anyhow::anyhow!("Generic error message"), false, true);
        assert_eq!(rendered, "✗ error: Generic error message\n");
    }

    #[test]
    fn build_failure_has_no_hint() {
        let err: anyhow::Error = InstallError::BuildFailed {
            command: "./gradlew build".to_string(),
            code: Some(1),
        }
        .into();
        let rendered = format_error_with(&err, false, true);
        assert_eq!(
            rendered,
            "✗ error: build command `./gradlew build` failed with exit code 1\n"
        );
    }

    #[test]
    fn annotation_escapes_message_and_file() {
        let rendered = github_actions_annotation(
            "line1\nline2",
            Some(Path::new("C:/mods,old/a.jar")),
        );
        assert_eq!(
            rendered,
            "::error file=C%3A/mods%2Cold/a.jar,title=modinstall::line1%0Aline2"
        );
    }

    #[test]
    fn annotation_without_file() {
        assert_eq!(
            github_actions_annotation("boom", None),
            "::error title=modinstall::boom"
        );
    }
}
