//! Process-wide logging initialization.
//!
//! Log lines go to two sinks: `logs/running_logs.log` (append mode, created
//! on first init together with its directory) and standard output. Both use
//! the same single-line format:
//!
//! ```text
//! [2024-05-01 12:30:45,123: INFO: mlkit::fs: ensured directory exists: artifacts]
//! ```
//!
//! Initialization is explicit and idempotent: call [`init`] (or
//! [`init_with_dir`]) once early in `main`; subsequent calls are no-ops.
//! There is no reconfiguration, no rotation, and no teardown — the log file
//! grows for the life of the process.
//!
//! The default level is INFO (DEBUG is suppressed); set `RUST_LOG` to
//! override.

use crate::error::{MlkitError, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Arc, Once};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default directory for the log file, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "running_logs.log";

static INIT: Once = Once::new();

/// Single-line bracketed event format: `[timestamp: LEVEL: target: message]`.
struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        write!(writer, "[{}: {}: {}: ", timestamp, meta.level(), meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer, "]")
    }
}

/// Initialize logging with the default log directory (`logs/`).
pub fn init() -> Result<()> {
    init_with_dir(DEFAULT_LOG_DIR)
}

/// Initialize logging with a caller-chosen log directory.
///
/// Creates `dir` if absent, opens `running_logs.log` inside it in append
/// mode, and installs a global subscriber writing to both the file and
/// stdout. This function is idempotent; only the first call in a process
/// has any effect.
pub fn init_with_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let mut outcome = Ok(());
    INIT.call_once(|| {
        outcome = install(dir.as_ref());
    });
    outcome
}

fn install(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| MlkitError::from_io(dir, e))?;

    let log_path = dir.join(LOG_FILE_NAME);
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| MlkitError::from_io(&log_path, e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(BracketFormat)
                .with_ansi(false)
                .with_writer(std::io::stdout),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(BracketFormat)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        );

    // A test harness may have installed its own subscriber already; keep
    // whichever dispatcher won and carry on.
    let _ = subscriber.try_init();

    tracing::debug!("logging initialized, writing to {}", log_path.display());
    Ok(())
}

/// Install a plain test subscriber at DEBUG level.
///
/// Safe to call from every test; double initialization is ignored.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
