//! Diagnostic log setup and crash capture.
//!
//! The process-wide logger is initialised exactly once, from an explicit
//! [`LogConfig`], before the loop starts.  Lines go to stderr as
//!
//! ```text
//! [2026-03-14 06:00:05] INFO: [INIT] Biological Indicator Engine Initialized...
//! ```
//!
//! so stdout carries nothing but field reports.  A panic hook routes
//! panics through the same logger at ERROR level.

use core::fmt;
use std::io::{self, Write};

use log::{Level, LevelFilter};

/// Logger configuration, passed to [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Minimum level that is emitted.
    pub level: LevelFilter,
    /// `chrono` strftime pattern for the timestamp prefix.
    pub timestamp_format: String,
    /// Let `RUST_LOG` override `level`.
    pub honour_env: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            honour_env: true,
        }
    }
}

/// Install the process-wide `env_logger` backend.  Fails if a logger is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.level)
        .target(env_logger::Target::Stderr);
    if config.honour_env {
        builder.parse_env(env_logger::Env::default());
    }

    let timestamp_format = config.timestamp_format.clone();
    builder.format(move |buf, record| {
        let timestamp = chrono::Local::now().format(&timestamp_format);
        write_log_line(buf, timestamp, record.level(), record.args())
    });

    builder.try_init()
}

/// Write one diagnostic line: `[<timestamp>] <LEVEL>: <message>`.
pub fn write_log_line(
    out: &mut impl Write,
    timestamp: impl fmt::Display,
    level: Level,
    message: &fmt::Arguments<'_>,
) -> io::Result<()> {
    writeln!(out, "[{}] {}: {}", timestamp, level, message)
}

// ───────────────────────────────────────────────────────────────
// Panic capture
// ───────────────────────────────────────────────────────────────

/// Install a panic hook that logs the panic at ERROR level before the
/// default hook prints it.
///
/// Call once during init, after [`init_logging`].
pub fn install_panic_handler() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };
        let location = info
            .location()
            .map_or_else(|| "unknown location".to_string(), ToString::to_string);

        log::error!("[CRITICAL] Panic in deployment loop: {} at {}", reason, location);
        default_hook(info);
    }));
}
