//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the Fiesta application.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the appender guard when file logging is enabled; the caller
/// must keep it alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "fiesta.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a view transition with structured data
pub fn log_view_transition(from: &str, to: &str, depth: usize) {
    info!(
        from = from,
        to = to,
        depth = depth,
        "View transition"
    );
}

/// Log a submission result
pub fn log_submission(outcome: &str, title: Option<&str>) {
    info!(
        outcome = outcome,
        title = title,
        "Event submission finished"
    );
}

/// Log a capability probe result
pub fn log_capability_probe(capability: &str, state: &str) {
    if state == "available" {
        info!(capability = capability, "Host capability available");
    } else {
        warn!(capability = capability, state = state, "Host capability not available");
    }
}
