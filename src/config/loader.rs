//! Layered configuration loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigSource, ConfigWarning, Setting};
use crate::error::{InstallError, InstallResult};
use crate::infrastructure::fs::{expand_home, user_config_path};

use super::properties::Properties;
use super::types::{Config, UserConfig};

/// Project-local overrides, normally not committed
pub const LOCAL_PROPERTIES_FILE: &str = "gradle-local.properties";
/// Shared project properties
pub const PROJECT_PROPERTIES_FILE: &str = "gradle.properties";

pub const ENV_MODS_DIR: &str = "MODINSTALL_MODS_DIR";
pub const ENV_ARTIFACT: &str = "MODINSTALL_ARTIFACT";
pub const ENV_BUILD_DIR: &str = "MODINSTALL_BUILD_DIR";

const KEY_MODS_DIR: &str = "modsDir";
const KEY_PROJECT_NAME: &str = "projectName";
const KEY_PROJECT_VERSION: &str = "projectVersion";

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mods_dir: Option<PathBuf>,
    pub artifact: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Builds a `Config` from every layer for one project directory
pub struct ConfigLoader {
    project_dir: PathBuf,
    overrides: ConfigOverrides,
    user_config: Option<PathBuf>,
    get_env: EnvLookup,
}

impl ConfigLoader {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            overrides: ConfigOverrides::default(),
            user_config: user_config_path(),
            get_env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    pub fn overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replace the user config location (`None` disables the layer)
    pub fn user_config(mut self, path: Option<PathBuf>) -> Self {
        self.user_config = path;
        self
    }

    /// Replace environment lookup
    pub fn env(mut self, get_env: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.get_env = Box::new(get_env);
        self
    }

    pub fn load(&self) -> InstallResult<(Config, Vec<ConfigWarning>)> {
        let mut config = Config::defaults(&self.project_dir);
        let mut warnings = Vec::new();

        if let Some(path) = &self.user_config {
            if let Some((user, user_warnings)) = load_user_config(path)? {
                config.loaded_files.push(path.clone());
                warnings.extend(user_warnings);
                self.apply_user_config(&mut config, user, path);
            }
        }

        // Local first so the project file overrides it.
        let layers: [(&str, fn(PathBuf) -> ConfigSource); 2] = [
            (LOCAL_PROPERTIES_FILE, ConfigSource::LocalProperties),
            (PROJECT_PROPERTIES_FILE, ConfigSource::ProjectProperties),
        ];
        for (file, source) in layers {
            let path = self.project_dir.join(file);
            let props = Properties::load(&path).map_err(|e| InstallError::InvalidConfig {
                file: path.clone(),
                message: e.to_string(),
            })?;
            if let Some(props) = props {
                config.loaded_files.push(path.clone());
                self.apply_properties(&mut config, &props, source(path));
            }
        }

        self.apply_env(&mut config);
        self.apply_overrides(&mut config);

        Ok((config, warnings))
    }

    fn apply_user_config(&self, config: &mut Config, user: UserConfig, path: &Path) {
        let source = || ConfigSource::UserConfig(path.to_path_buf());
        let base = Some(self.project_dir.as_path());

        if let Some(dir) = user.mods_dir {
            config.mods_dir = Some(Setting::new(resolve_path(&dir, base), source()));
        }
        if let Some(dir) = user.build_dir {
            config.build_dir = Setting::new(resolve_path(&dir, base), source());
        }
        if let Some(artifact) = user.artifact {
            config.artifact = Some(Setting::new(resolve_path(&artifact, base), source()));
        }
        config.output = user.output;
    }

    fn apply_properties(&self, config: &mut Config, props: &Properties, source: ConfigSource) {
        if let Some(dir) = props.get(KEY_MODS_DIR) {
            config.mods_dir = Some(Setting::new(
                resolve_path(dir, Some(&self.project_dir)),
                source.clone(),
            ));
        }
        if let Some(name) = props.get(KEY_PROJECT_NAME) {
            config.project_name = Some(Setting::new(name.trim().to_string(), source.clone()));
        }
        if let Some(version) = props.get(KEY_PROJECT_VERSION) {
            config.project_version = Some(Setting::new(version.trim().to_string(), source));
        }
    }

    fn apply_env(&self, config: &mut Config) {
        if let Some(dir) = (self.get_env)(ENV_MODS_DIR) {
            config.mods_dir = Some(Setting::new(
                resolve_path(&dir, None),
                ConfigSource::Env(ENV_MODS_DIR),
            ));
        }
        if let Some(artifact) = (self.get_env)(ENV_ARTIFACT) {
            config.artifact = Some(Setting::new(
                resolve_path(&artifact, None),
                ConfigSource::Env(ENV_ARTIFACT),
            ));
        }
        if let Some(dir) = (self.get_env)(ENV_BUILD_DIR).filter(|d| !d.trim().is_empty()) {
            config.build_dir = Setting::new(
                resolve_path(&dir, None),
                ConfigSource::Env(ENV_BUILD_DIR),
            );
        }
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.overrides.mods_dir {
            config.mods_dir = Some(Setting::new(
                resolve_cli_path(dir),
                ConfigSource::Cli("--mods-dir"),
            ));
        }
        if let Some(artifact) = &self.overrides.artifact {
            config.artifact = Some(Setting::new(
                resolve_cli_path(artifact),
                ConfigSource::Cli("--artifact"),
            ));
        }
        if let Some(dir) = &self.overrides.build_dir {
            config.build_dir = Setting::new(resolve_cli_path(dir), ConfigSource::Cli("--build-dir"));
        }
    }
}

/// Trim, expand `~`, and anchor relative paths at `base` when given.
/// Blank input becomes an empty path.
fn resolve_path(raw: &str, base: Option<&Path>) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PathBuf::new();
    }

    let expanded = expand_home(Path::new(trimmed));
    match base {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}

fn resolve_cli_path(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }
    expand_home(path)
}

/// Load the user config and collect non-fatal warnings (unknown keys).
/// A missing file is `Ok(None)`.
fn load_user_config(path: &Path) -> InstallResult<Option<(UserConfig, Vec<ConfigWarning>)>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(InstallError::InvalidConfig {
                file: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: UserConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InstallError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok(Some((config, warnings)))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "mods_dir",
        "build_dir",
        "artifact",
        "output",
        "color",
        "unicode",
    ];

    // Properties-style spellings map straight to their TOML keys.
    match unknown {
        "modsDir" | "mods-dir" | "modsdir" => return Some("mods_dir".to_string()),
        "buildDir" | "build-dir" => return Some("build_dir".to_string()),
        _ => {}
    }

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
