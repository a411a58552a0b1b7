use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `cfg.level`. Events go to stderr so that
/// stdout stays reserved for command output.
///
/// # Errors
/// Returns an error if `RUST_LOG` or the level directive is invalid, or a
/// global subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(rust_log.as_deref(), &cfg.level)?;

    let installed = match cfg.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_current_span(true)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Pick the filter: a non-empty `rust_log` wins, otherwise `level` is used.
///
/// A malformed `rust_log` is an error rather than a silent fallback.
fn resolve_filter(rust_log: Option<&str>, level: &str) -> anyhow::Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            anyhow::anyhow!("invalid {} '{directives}': {e}", EnvFilter::DEFAULT_ENV)
        }),
        None => directive_filter(level),
    }
}

fn directive_filter(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))
}
