use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `composer_lock_alert=debug`.
pub const LOG_ENV: &str = "COMPOSER_LOCK_ALERT_LOG";

/// Install the global tracing subscriber.
///
/// Logs go to stderr; stdout is reserved for user-facing output. Calling this
/// more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
