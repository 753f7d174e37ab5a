use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TXFEED_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Logs go to stderr so `--json` and `--markup` output stays clean on stdout.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .ok();
}
