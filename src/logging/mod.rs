/*!
 * Logging Module
 * Centralized logging configuration and request middleware
 */
pub mod middleware;

use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_DIR: &str = "logs";

/// Default filter when RUST_LOG is unset.
fn default_filter(log_level: &str) -> String {
    format!("flooring_site={},tower_http=debug,axum=debug", log_level)
}

/// Initialize the logging system.
///
/// The returned guards flush the background writers when dropped; hold them
/// for the life of the process.
pub fn init(is_production: bool) -> Vec<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(LOG_DIR) {
        eprintln!("could not create log directory {}: {}", LOG_DIR, e);
    }

    let file_appender = rolling::daily(LOG_DIR, "app.log");
    let (file_writer, file_guard) = non_blocking(file_appender);

    let (console_writer, console_guard) = non_blocking(io::stdout());

    let mut guards = vec![file_guard, console_guard];

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
        if is_production {
            "info".to_string()
        } else {
            "debug".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if is_production {
        // Errors get their own file in production
        let error_appender = rolling::daily(LOG_DIR, "error.log");
        let (error_writer, error_guard) = non_blocking(error_appender);
        guards.push(error_guard);

        let file_layer = fmt::layer()
            .json()
            .with_writer(file_writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true);

        let error_layer = fmt::layer()
            .json()
            .with_writer(error_writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(tracing_subscriber::filter::LevelFilter::ERROR);

        let console_layer = fmt::layer()
            .json()
            .with_writer(console_writer)
            .with_target(false);

        subscriber
            .with(file_layer)
            .with(error_layer)
            .with(console_layer)
            .init();
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let console_layer = fmt::layer()
            .with_writer(console_writer)
            .with_target(true)
            .pretty();

        subscriber.with(file_layer).with(console_layer).init();
    }

    tracing::info!(production = is_production, "logging initialized");

    guards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_crate() {
        let filter = default_filter("warn");
        assert!(filter.starts_with("flooring_site=warn"));
        assert!(EnvFilter::try_new(filter).is_ok());
    }
}
