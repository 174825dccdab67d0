//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use mpdc_core::ClientError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    /// Sentinel for bare invocation; guidance has already been written.
    #[error("bare invocation")]
    BareInvocation,
    #[error("unknown command '{0}'; run 'mpdc help' for the command list")]
    UnknownCommand(String),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("volume must be in the range 0-100")]
    VolumeOutOfRange,
    #[error("invalid value '{0}' for parameter 'sign'; expected + or -")]
    InvalidSign(String),
    #[error("missing parameter 'term'; it is required when 'tag2' is supplied")]
    MissingListTerm,
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(serde_json::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}
