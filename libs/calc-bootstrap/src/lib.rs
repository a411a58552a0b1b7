//! Bootstrap for the calculator server process.
//!
//! - [`config`]: layered configuration (defaults, YAML, `APP__*` env, `PORT`, CLI)
//! - [`logging`]: `tracing` subscriber initialization
//! - [`signals`]: Ctrl+C / SIGTERM handling wired to a cancellation token

pub mod config;
pub mod logging;
pub mod signals;

pub use config::{
    AppConfig, CliArgs, ConfigError, DEFAULT_PORT, ENV_PREFIX, LogFormat, LoggingConfig,
    PORT_ENV, ServerConfig,
};
pub use logging::init_logging;
pub use signals::{shutdown_token, wait_for_shutdown};
