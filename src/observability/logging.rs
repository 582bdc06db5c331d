//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Honor `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Lambda output is plain (no ANSI, no timestamps; CloudWatch stamps lines)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    Lambda,
}

/// Filter directive scoping `level` to this crate.
pub fn default_directive(level: &str) -> String {
    format!("locale_edge={}", level.to_ascii_lowercase())
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(level: &str, target: LogTarget) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(level).into());

    let result = match target {
        LogTarget::Terminal => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::Lambda => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .without_time()
                    .with_target(false),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
