//! Configuration for zellij-theme
//!
//! Handles the optional `.zellij-theme.toml` settings file and resolves the
//! input, output and Zellij config paths once, before any conversion runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Settings file name, looked up in the current directory
pub const SETTINGS_FILE_NAME: &str = ".zellij-theme.toml";

/// Default theme description file name
pub const DEFAULT_INPUT_FILE: &str = "theme.json";

/// Default generated KDL file name
pub const DEFAULT_OUTPUT_FILE: &str = "theme.kdl";

/// Zellij config file name; never taken from the command line
pub const CONFIG_FILE: &str = "config.kdl";

/// Tool settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding theme.json, theme.kdl and config.kdl
    /// (default: the directory of the executable)
    #[serde(default)]
    pub theme_dir: Option<PathBuf>,

    /// Whether to splice the generated theme into config.kdl
    #[serde(default = "default_update_config")]
    pub update_config: bool,
}

fn default_update_config() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_dir: None,
            update_config: default_update_config(),
        }
    }
}

impl Settings {
    /// Load settings (returns default if not found)
    ///
    /// Searches for `.zellij-theme.toml` in the current directory.
    pub fn load() -> Result<Self> {
        let settings_path = PathBuf::from(SETTINGS_FILE_NAME);

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from specified path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        Ok(settings)
    }
}

/// Files a conversion run reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: PathBuf,
}

impl Paths {
    /// Paths with all three files placed in `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            input: dir.join(DEFAULT_INPUT_FILE),
            output: dir.join(DEFAULT_OUTPUT_FILE),
            config: dir.join(CONFIG_FILE),
        }
    }

    /// Apply command-line overrides on top of the defaults in `base_dir`
    pub fn resolve(cli: &Cli, base_dir: &Path) -> Self {
        let defaults = Self::in_dir(base_dir);

        Self {
            input: cli.input.clone().unwrap_or(defaults.input),
            output: cli.output.clone().unwrap_or(defaults.output),
            config: defaults.config,
        }
    }
}

/// Directory the default files live in
///
/// `theme_dir` from settings wins, then the executable's directory, then `.`.
pub fn base_dir(settings: &Settings) -> PathBuf {
    if let Some(dir) = &settings.theme_dir {
        return dir.clone();
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
