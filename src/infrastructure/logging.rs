//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `tripplan=info`)
pub const LOG_ENV_VAR: &str = "TRIPPLAN_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber. Logs go to stderr so stdout only
/// carries the session transcript.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
