use modinstall::config::{Config, ConfigWarning};
use modinstall::domain::value_objects::Setting;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    if ui.json {
        return;
    }
    eprint!("{}", render_config_warnings(ui, warnings));
}

fn render_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) -> String {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

/// Where each resolved value came from (`-v`)
pub fn print_provenance(ui: &UiContext, config: &Config) {
    if ui.json || ui.verbose == 0 {
        return;
    }
    eprint!("{}", render_provenance(ui, config));
}

fn render_provenance(ui: &UiContext, config: &Config) -> String {
    fn line<T>(ui: &UiContext, key: &str, setting: Option<&Setting<T>>, show: impl Fn(&T) -> String) -> String {
        let (value, source) = match setting {
            Some(s) => (show(&s.value), s.source.to_string()),
            None => ("(unset)".to_string(), "-".to_string()),
        };
        format!(
            "  {:<16} {} {}\n",
            key,
            value,
            ColoredText::dim(format!("({})", source)).render(ui.color)
        )
    }

    let path = |p: &std::path::PathBuf| {
        if p.as_os_str().is_empty() {
            "(empty)".to_string()
        } else {
            p.display().to_string()
        }
    };
    let text = |s: &String| s.clone();

    let mut out = String::new();
    out.push_str(&line(ui, "modsDir", config.mods_dir.as_ref(), path));
    out.push_str(&line(ui, "buildDir", Some(&config.build_dir), path));
    out.push_str(&line(ui, "artifact", config.artifact.as_ref(), path));
    out.push_str(&line(ui, "projectName", config.project_name.as_ref(), text));
    out.push_str(&line(ui, "projectVersion", config.project_version.as_ref(), text));

    if ui.verbose > 1 {
        for file in &config.loaded_files {
            out.push_str(&format!(
                "  {} loaded {}\n",
                Icon::Arrow.colored(ui.color, ui.unicode),
                file.display()
            ));
        }
    }
    out
}
