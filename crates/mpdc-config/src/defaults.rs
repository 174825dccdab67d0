use crate::logging::LogFormat;

/// Host used when neither the environment nor the CLI names one.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the daemon listens on by default.
pub const DEFAULT_PORT: u16 = 6600;

/// Default log filter expression. The client stays quiet unless asked.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
