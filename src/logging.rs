//! Unified logging for the calculator.
//!
//! Provides compact timestamped logging with per-module level configuration.
//! Supports `RUST_LOG` environment variable for runtime overrides.
//!
//! The REPL owns stdout, so logs go to a file by default. Set
//! `logging.console = true` to mirror them on stderr.
//!
//! # Configuration
//!
//! ```toml
//! [logging]
//! default = "info"
//! file = "logs/gradecalc.log"
//!
//! [logging.modules]
//! repl = "debug"
//! ```
//!
//! # Environment Variable
//!
//! `RUST_LOG` takes precedence over config:
//! ```bash
//! RUST_LOG=debug gradecalc
//! RUST_LOG=gradecalc::command=trace gradecalc repl
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, Once};
use thiserror::Error;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize logging with configuration.
///
/// Call once at startup. Safe to call multiple times (only first call takes effect).
///
/// The `RUST_LOG` environment variable takes precedence over config settings.
pub fn init_with_config(config: &LoggingConfig) -> Result<(), LoggingError> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = install(config);
    });
    result
}

fn install(config: &LoggingConfig) -> Result<(), LoggingError> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console {
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(CompactTime)
                .with_level(true)
                .with_filter(build_filter(config))
                .boxed(),
        );
    }

    if let Some(path) = &config.file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| LoggingError::LogFile {
                path: path.clone(),
                source,
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::LogFile {
                path: path.clone(),
                source,
            })?;

        layers.push(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_timer(CompactTime)
                .with_level(true)
                .with_filter(build_filter(config))
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))
}

/// Filter directive string built from config: the default level followed by
/// `target=level` pairs, sorted by module for a stable result.
///
/// Bare module names such as `repl` are resolved inside this crate
/// (`gradecalc::repl`); paths containing `::` are used as given.
pub fn filter_directives(config: &LoggingConfig) -> String {
    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();

    let mut filter_str = config.default.clone();
    for (module, level) in modules {
        if module.contains("::") {
            filter_str.push_str(&format!(",{module}={level}"));
        } else {
            filter_str.push_str(&format!(",{CRATE_TARGET}::{module}={level}"));
        }
    }
    filter_str
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    // RUST_LOG env var takes precedence over config
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter_directives(config))
    }
}

/// Log an event with component context.
///
/// # Examples
/// ```ignore
/// log_event!("repl", "started");
/// log_event!("export", "written", "{}", path.display());
/// ```
#[macro_export]
macro_rules! log_event {
    ($component:expr, $event:expr) => {
        tracing::info!("[{}] {}", $component, $event)
    };
    ($component:expr, $event:expr, $($arg:tt)*) => {
        tracing::info!("[{}] {}: {}", $component, $event, format!($($arg)*))
    };
}

/// Debug-only event logging.
///
/// # Examples
/// ```ignore
/// debug_event!("registry", "dispatch", "{name}");
/// ```
#[macro_export]
macro_rules! debug_event {
    ($component:expr, $event:expr) => {
        tracing::debug!("[{}] {}", $component, $event)
    };
    ($component:expr, $event:expr, $($arg:tt)*) => {
        tracing::debug!("[{}] {}: {}", $component, $event, format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        let mut config = LoggingConfig::default();
        assert_eq!(filter_directives(&config), "info");

        config.default = "warn".to_string();
        config.modules.insert("repl".to_string(), "debug".to_string());
        config
            .modules
            .insert("tower::util".to_string(), "trace".to_string());
        assert_eq!(
            filter_directives(&config),
            "warn,gradecalc::repl=debug,tower::util=trace"
        );
    }

    #[test]
    fn test_module_override_enables_crate_target() {
        let mut config = LoggingConfig::default();
        config.default = "warn".to_string();
        config.modules.insert("repl".to_string(), "debug".to_string());

        let subscriber =
            tracing_subscriber::registry().with(EnvFilter::new(filter_directives(&config)));
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(
                target: "gradecalc::repl",
                tracing::Level::DEBUG
            ));
            assert!(!tracing::enabled!(
                target: "gradecalc::export",
                tracing::Level::DEBUG
            ));
            assert!(tracing::enabled!(
                target: "gradecalc::export",
                tracing::Level::WARN
            ));
        });
    }
}
