//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise `level` applies to this crate and to
//! tower-http's request traces.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Default directives for a given level
pub fn default_directives(level: &str) -> String {
    format!("roster_server={level},tower_http={level}")
}

/// Initialize the global subscriber, optionally writing to a daily rolling
/// file under `log_dir`
pub fn init_logger(level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "roster-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("Log directory {dir} is not writable, logging to stdout");
    }

    subscriber.init();
}
