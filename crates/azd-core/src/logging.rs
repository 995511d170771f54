//! Console logging for SDK consumers plus the diagnostic tracing subscriber
//! shared by every binary.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use chrono::Local;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Prefix-tagged, timestamped console logger.
///
/// Info lines go to stdout alongside command output, error lines to stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    prefix: String,
}

impl Logger {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn info(&self, msg: &str) {
        println!("{}", self.line(Level::Info, msg));
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.line(Level::Error, msg));
    }

    /// Renders `[HH:MM:SS] LEVEL: prefix - msg` using the local wall clock.
    pub fn line(&self, level: Level, msg: &str) -> String {
        self.line_at(&Local::now().format("%H:%M:%S").to_string(), level, msg)
    }

    fn line_at(&self, timestamp: &str, level: Level, msg: &str) -> String {
        format!("[{timestamp}] {level}: {} - {msg}", self.prefix)
    }
}

/// Seconds with two decimals, e.g. `1.50s`.
pub fn format_duration(d: Duration) -> String {
    format!("{:.2}s", d.as_secs_f64())
}

/// Directive applied when `RUST_LOG` is unset, empty, or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the stderr diagnostic subscriber. A valid `RUST_LOG` replaces
/// [`DEFAULT_DIRECTIVE`] entirely.
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(directives.as_deref()))
        .init();
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_level_prefix_and_message() {
        let logger = Logger::new("SDK");
        assert_eq!(
            logger.line_at("09:05:01", Level::Info, "Starting deployment for app: web"),
            "[09:05:01] INFO: SDK - Starting deployment for app: web"
        );
        assert_eq!(
            logger.line_at("23:59:59", Level::Error, "boom"),
            "[23:59:59] ERROR: SDK - boom"
        );
    }

    #[test]
    fn live_timestamp_has_clock_shape() {
        let line = Logger::new("SDK").line(Level::Info, "hello");
        let stamp = &line[1..9];
        assert_eq!(line.as_bytes()[0], b'[');
        assert_eq!(line.as_bytes()[9], b']');
        assert_eq!(stamp.matches(':').count(), 2);
        assert!(line.ends_with("INFO: SDK - hello"));
    }

    #[test]
    fn env_directives_override_default_level() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn missing_env_directives_fall_back_to_info() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn duration_has_two_decimals() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::ZERO), "0.00s");
    }
}
