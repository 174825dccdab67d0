//! Formats for the diagnostics the client writes to stderr.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How diagnostic events are rendered. Selected with `--log-format` or
/// `MPD_LOG_FORMAT`.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Terse single-line text, the default for an interactive client.
    #[default]
    Compact,
}

/// Raised when `--log-format` names neither `json` nor `compact`.
pub type LogFormatParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("pretty".parse::<LogFormat>().is_err());
    }
}
