//! Configuration module for the grade calculator.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `GC_` and use double underscores
//! to separate nested levels:
//! - `GC_DATA__DIR=/tmp/grades` sets `data.dir`
//! - `GC_REPL__PROMPT="> "` sets `repl.prompt`
//! - `GC_LOGGING__CONSOLE=true` sets `logging.console`
//!
//! The unprefixed `LOG_LEVEL`, `LOG_FILE` and `ENVIRONMENT` variables are also
//! honored and map to `logging.default`, `logging.file` and `environment`.

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::{Uncased, UncasedStr},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory holding the workspace settings file.
pub const CONFIG_DIR: &str = ".gradecalc";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Deployment label, logged at startup
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Output file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Interactive loop settings
    #[serde(default)]
    pub repl: ReplConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DataConfig {
    /// Directory for CSV output
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// History file written on exit, relative to `dir`
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Grade sheet written by `grades` and `csv`, relative to `dir`
    #[serde(default = "default_grades_file")]
    pub grades_file: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReplConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the operation list on startup
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Colorize the banner (ignored when stdout is not a terminal)
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for all modules
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Mirror logs to stderr
    #[serde(default = "default_false")]
    pub console: bool,

    /// Log file path; no file logging when unset
    #[serde(default = "default_log_file", skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Per-module overrides, e.g. `repl = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_environment() -> String {
    "PRODUCTION".to_string()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_history_file() -> PathBuf {
    PathBuf::from("history.csv")
}
fn default_grades_file() -> PathBuf {
    PathBuf::from("grades_export.csv")
}
fn default_prompt() -> String {
    ">>> ".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("logs/gradecalc.log"))
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            environment: default_environment(),
            data: DataConfig::default(),
            repl: ReplConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            history_file: default_history_file(),
            grades_file: default_grades_file(),
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: true,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            console: false,
            file: default_log_file(),
            modules: HashMap::new(),
        }
    }
}

impl DataConfig {
    pub fn history_path(&self) -> PathBuf {
        self.dir.join(&self.history_file)
    }

    pub fn grades_path(&self) -> PathBuf {
        self.dir.join(&self.grades_file)
    }
}

const LEGACY_VARS: [&str; 3] = ["LOG_LEVEL", "LOG_FILE", "ENVIRONMENT"];

/// `DATA__DIR` becomes `data.dir`.
fn nested_key(key: &UncasedStr) -> Uncased<'_> {
    key.as_str().to_lowercase().replace("__", ".").into()
}

fn legacy_key(key: &UncasedStr) -> Uncased<'_> {
    match key.as_str().to_ascii_uppercase().as_str() {
        "LOG_LEVEL" => "logging.default".into(),
        "LOG_FILE" => "logging.file".into(),
        _ => "environment".into(),
    }
}

impl Settings {
    /// Load configuration from all sources, using the workspace settings file.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(SETTINGS_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration layering a specific TOML file under the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore (__) separates nested levels
            .merge(Env::prefixed("GC_").map(nested_key))
            // Unprefixed variables kept for compatibility
            .merge(Env::raw().only(&LEGACY_VARS).map(legacy_key))
    }

    /// Find the workspace settings file by looking for a `.gradecalc`
    /// directory from the current directory up to root.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(SETTINGS_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string).with_context(|| format!("writing {}", path.display()))?;

        Ok(())
    }

    /// Create a default settings file under `root`.
    pub fn init_config_file(root: &Path, force: bool) -> anyhow::Result<PathBuf> {
        let config_path = root.join(CONFIG_DIR).join(SETTINGS_FILE);

        if !force && config_path.exists() {
            anyhow::bail!(
                "Configuration file already exists at: {}. Use --force to overwrite",
                config_path.display()
            );
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }
}
