use std::env;
use std::str::FromStr;
use tracing::Level;

/// Environment variable selecting the log level (`error` .. `trace`)
pub const LOG_ENV: &str = "LEARNIQ_LOG";

/// Install the stderr subscriber used by all binaries.
///
/// Reports go to stdout through `println!`; this only carries diagnostics.
pub fn init() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(Level::INFO);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
