use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV_VAR: &str = "FINTRACK_LOG";

/// Initializes the global tracing subscriber, writing to stderr.
///
/// Defaults to `fintrack=warn` so swallowed storage failures still reach the
/// console while routine debug output stays hidden.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    });
}
