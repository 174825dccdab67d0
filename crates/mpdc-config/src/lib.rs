//! Shared configuration for the mpdc client.
//!
//! Values are layered by `ortho_config`: built-in defaults, then an optional
//! TOML configuration file, then `MPD_*` environment variables, then CLI
//! flags. The loaded [`Config`] is treated as immutable for the lifetime of
//! the process.

mod defaults;
mod endpoint;
mod logging;

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT, default_log_filter, default_log_format,
};
pub use endpoint::Endpoint;
pub use logging::{LogFormat, LogFormatParseError};

/// Connection and logging settings for one client process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "MPD")]
#[serde(default)]
pub struct Config {
    /// Daemon host name, IP address, or absolute Unix socket path.
    pub host: String,
    /// Daemon TCP port. Ignored when `host` names a Unix socket.
    pub port: u16,
    /// Password sent before any other command when present.
    pub password: Option<String>,
    /// Read deadline in seconds applied to the daemon connection.
    pub timeout: Option<u64>,
    /// Tracing filter expression for diagnostics written to stderr.
    pub log_filter: String,
    /// Formatter used for diagnostics.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            password: None,
            timeout: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Endpoint derived from the configured host and port.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from_host(&self.host, self.port)
    }

    /// Password to authenticate with, ignoring empty values.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|password| !password.is_empty())
    }

    /// Read deadline for daemon responses, when one is configured.
    #[must_use]
    pub fn read_timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }

    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Diagnostic output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_daemon() {
        let config = Config::default();
        assert_eq!(config.endpoint(), Endpoint::tcp("127.0.0.1", 6600));
        assert_eq!(config.password(), None);
        assert_eq!(config.read_timeout(), None);
    }

    #[test]
    fn empty_password_is_treated_as_absent() {
        let config = Config {
            password: Some(String::new()),
            ..Config::default()
        };
        assert_eq!(config.password(), None);
    }

    #[test]
    fn zero_timeout_disables_read_deadline() {
        let config = Config {
            timeout: Some(0),
            ..Config::default()
        };
        assert_eq!(config.read_timeout(), None);

        let config = Config {
            timeout: Some(3),
            ..Config::default()
        };
        assert_eq!(config.read_timeout(), Some(Duration::from_secs(3)));
    }
}
