// src/logging.rs

//! Logging setup for `multi-timeout` using `tracing` + `tracing-subscriber`.
//!
//! The kill notices mandated by the CLI contract go straight to stdout;
//! tracing output is diagnostics only and goes to stderr. The level comes
//! from the `MULTI_TIMEOUT_LOG` environment variable (e.g. "debug"),
//! defaulting to `warn` so a normal run prints nothing beyond the notices.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise the global logging subscriber. Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let level = std::env::var("MULTI_TIMEOUT_LOG")
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::WARN);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
