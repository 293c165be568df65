// Logging setup.
// Writes structured logs to a file since the terminal belongs to the TUI.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Build the filter: explicit directive first, then `FOLIO_LOG`, then `info`.
///
/// An explicit directive that fails to parse is skipped, and the reason is
/// returned alongside the filter actually used.
pub fn build_filter(directive: Option<&str>) -> (EnvFilter, Option<String>) {
    let mut rejected = None;
    if let Some(directive) = directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return (filter, None),
            Err(e) => rejected = Some(format!("invalid log filter '{}': {}", directive, e)),
        }
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    (filter, rejected)
}

/// Install a file subscriber writing to `<dir>/folio.log`.
///
/// The returned guard must be held until exit so buffered lines are flushed.
/// Returns None when the directory cannot be created; the app then runs
/// without logging.
pub fn init(dir: Option<&Path>, directive: Option<&str>) -> Option<WorkerGuard> {
    let dir = dir?;
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("folio: logging disabled, cannot create {}: {}", dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let (filter, rejected) = build_filter(directive);
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init();

    match result {
        Ok(()) => {
            if let Some(reason) = rejected {
                tracing::warn!("{}, using fallback filter", reason);
            }
            Some(guard)
        }
        Err(e) => {
            eprintln!("folio: logging disabled: {}", e);
            None
        }
    }
}
