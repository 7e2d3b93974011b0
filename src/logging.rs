//! Logging infrastructure for folio.
//!
//! Uses the `tracing` crate with file-based output. Logs go to `~/.cache/folio/folio.log`.
//! Only folio's own events are kept by default (`warn,folio=info`); `FOLIO_LOG`
//! takes either a bare level for folio (`debug`) or full `EnvFilter` directives.
//!
//! # Example
//!
//! ```bash
//! # Watch filter engine decisions while browsing
//! FOLIO_LOG=debug folio ./site
//!
//! # View logs during the browser session
//! tail -f ~/.cache/folio/folio.log
//! ```

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::{self, format::FmtSpan}, prelude::*, EnvFilter};

/// Initialize the logging system.
///
/// When FOLIO_LOG is set, also logs to stderr. The returned guard flushes
/// pending lines when dropped, so hold it for the life of the program.
pub fn init_logging() -> Result<WorkerGuard> {
    let cache_dir = directories::ProjectDirs::from("", "", "folio")
        .context("Failed to determine cache directory")?
        .cache_dir()
        .to_path_buf();

    std::fs::create_dir_all(&cache_dir)
        .with_context(|| format!("Failed to create cache directory: {}", cache_dir.display()))?;

    let log_file = cache_dir.join("folio.log");

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let log_env = std::env::var("FOLIO_LOG").ok();
    let verbose = log_env.is_some();
    let directives = filter_directives(log_env.as_deref());
    let env_filter = EnvFilter::try_new(&directives)
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))
        .context("Failed to build log filter")?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    // The browser owns the terminal, so stderr output is opt-in
    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
    });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        filter = %directives,
        "folio started"
    );

    Ok(guard)
}

/// Filter used when `FOLIO_LOG` is unset or unparsable: quiet dependencies
/// (reqwest, minijinja), folio at info.
const DEFAULT_DIRECTIVES: &str = "warn,folio=info";

/// Turn a `FOLIO_LOG` value into filter directives.
///
/// A bare level applies to folio only, so `FOLIO_LOG=debug` does not flood the
/// log with HTTP client internals. Anything containing `=` or `,` is passed
/// through untouched.
fn filter_directives(log_env: Option<&str>) -> String {
    match log_env.map(str::trim) {
        None | Some("") => DEFAULT_DIRECTIVES.to_string(),
        Some(value) if value.contains('=') || value.contains(',') => value.to_string(),
        Some(level) => format!("warn,folio={}", level),
    }
}

/// Get the path to the log file.
pub fn log_file_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "folio")
        .map(|dirs| dirs.cache_dir().join("folio.log"))
}
