use butcher::config::LoggingConfig;
use tokio::signal;
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Console output is always on (JSON when `logging.json`); a daily rolling
/// file is added when `logging.dir` is set and writable. Keep the returned
/// guard alive for the life of the process so buffered file logs are flushed.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},butcher=debug,tower_http=info", config.level))
    });

    let (file_layer, guard) = match config.dir.as_deref() {
        Some(log_dir) => match file_writer(log_dir) {
            Ok((writer, guard)) => (
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false) // No color codes in file
                        .with_target(true),
                ),
                Some(guard),
            ),
            Err(e) => {
                eprintln!(
                    "Warning: Could not write to log directory {} ({}), file logging disabled",
                    log_dir, e
                );
                (None, None)
            }
        },
        None => (None, None),
    };

    // Console layer
    let (console_plain, console_json) = if config.json {
        (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_target(true)),
        )
    } else {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            ),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_plain)
        .with(console_json)
        .with(file_layer)
        .init();

    if guard.is_some() {
        if let Some(dir) = config.dir.as_deref() {
            eprintln!("Logging to: {}/butcher.log", dir);
        }
    }

    guard
}

// `tracing_appender::rolling::daily` panics if it cannot create the first
// file, so check writability up front.
fn file_writer(
    log_dir: &str,
) -> std::io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)?;
    let test_path = std::path::Path::new(log_dir).join(".butcher_write_test");
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&test_path)?;
    let _ = std::fs::remove_file(&test_path);

    let file_appender = tracing_appender::rolling::daily(log_dir, "butcher.log");
    Ok(tracing_appender::non_blocking(file_appender))
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
