//! Logging initialization.
//!
//! Sets up the global `tracing` subscriber once per process. Verbosity comes
//! from `RUST_LOG` when set, otherwise from the level passed by the caller.
//! Logs go to stderr so they never interleave with the report on stdout;
//! with `log_to_file` they go to a daily rolling file under the user cache
//! directory instead, falling back to stderr when that directory cannot be
//! created.

use anyhow::Result;
use directories::ProjectDirs;
use std::{io::stderr, sync::Once};
use tracing_subscriber::{EnvFilter, fmt::layer, prelude::*};

static INIT: Once = Once::new();

/// Initializes the logging system. Safe to call more than once; only the
/// first call takes effect.
pub fn init_logging(log_level: &str, log_to_file: bool) -> Result<()> {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let file_appender = if log_to_file {
            ProjectDirs::from("dev", "SchemaApiCheck", "schema_api_check").and_then(|dirs| {
                let log_dir = dirs.cache_dir();
                std::fs::create_dir_all(log_dir).ok()?;
                Some(tracing_appender::rolling::daily(
                    log_dir,
                    "schema_api_check.log",
                ))
            })
        } else {
            None
        };

        match file_appender {
            Some(appender) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer().with_writer(non_blocking).with_ansi(false))
                    .init();
                // Leak the guard so buffered logs are flushed at process exit.
                Box::leak(Box::new(guard));
            }
            None => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer().with_writer(stderr).with_ansi(true))
                    .init();
            }
        }
    });

    Ok(())
}
