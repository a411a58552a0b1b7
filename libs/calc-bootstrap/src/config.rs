//! Layered application configuration.
//!
//! Priority, lowest first:
//! 1. compiled defaults
//! 2. YAML file passed with `--config`
//! 3. `APP__*` environment variables (`__` separates nesting levels)
//! 4. the `PORT` environment variable set by the hosting platform
//! 5. CLI overrides

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Port used when neither `PORT` nor any other layer sets one.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable the hosting platform uses to hand out the listening port.
pub const PORT_ENV: &str = "PORT";

/// Prefix for structured environment overrides, e.g. `APP__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to render configuration: {0}")]
    Render(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind; all interfaces unless overridden.
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    /// Figment with defaults, the optional YAML file and `APP__*` variables merged.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotFound`] if `path` is given but is not a file.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load the layered configuration, then apply the `PORT` variable.
    ///
    /// An empty `PORT` counts as unset.
    ///
    /// # Errors
    /// Returns an error if the file is missing, any layer fails to deserialize
    /// or `PORT` is not a valid port number.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment(path)?.extract().map_err(Box::new)?;

        if let Some(port) = port_from_env()? {
            config.server.port = port;
        }

        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(level) = verbosity_level(args.verbose) {
            level.clone_into(&mut self.logging.level);
        }
    }

    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    /// # Errors
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}

fn port_from_env() -> Result<Option<u16>, ConfigError> {
    let Ok(raw) = std::env::var(PORT_ENV) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u16>()
        .map(Some)
        .map_err(|source| ConfigError::InvalidPort { value: raw, source })
}

/// `-v` info, `-vv` debug, `-vvv` and beyond trace.
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
