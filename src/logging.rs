use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Logs go to a daily-rolling file because the TUI owns the terminal.
/// The returned guard must stay alive for the duration of the program.
pub fn init() -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily("logs", "portfolio-risk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}
