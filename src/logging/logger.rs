// file: src/logging/logger.rs
// version: 1.0.0
// guid: 6f3a8d05-1c94-4e27-b8a2-5d0e9c4f7b16

//! Logger initialization and configuration

use crate::error::AppError;
use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter directive for the given verbosity flags
///
/// `quiet` wins over `verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the flags when set. Logs go to stderr so
/// they never interleave with conversion results on stdout.
pub fn init_logger(verbose: bool, quiet: bool, color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(color)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| AppError::logging(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}
