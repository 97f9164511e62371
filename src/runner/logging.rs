use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::settings::config_dirs;

/// Set up file logging under the user cache directory. The terminal itself
/// belongs to the TUI, so nothing may ever log to stdout/stderr while the
/// event loop runs. Returns the appender guard, which the caller must keep
/// alive for the lifetime of the process, or `None` when the platform has
/// no cache directory (logging is then disabled entirely).
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = config_dirs::user_cache_dir()?;
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, "cardZoom.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
