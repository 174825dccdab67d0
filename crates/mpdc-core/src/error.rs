//! Error taxonomy for the protocol engine.
//!
//! Transport faults, handshake rejections, daemon-reported protocol errors,
//! and caller argument faults are kept apart so callers can decide which are
//! worth reconnecting for and which only need corrected input.

use std::io;

use thiserror::Error;

use crate::version::ProtocolVersion;

/// Prefix of a daemon error line.
pub(crate) const ACK_PREFIX: &str = "ACK ";

/// Any failure surfaced by the protocol engine.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The stream failed to connect, read, or write.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The daemon greeting was missing, rejected, or incompatible.
    #[error(transparent)]
    Handshake(#[from] HandshakeError),
    /// The daemon answered a command with an error line.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    /// A response line was neither a terminator, an error, nor a field.
    #[error("daemon sent a malformed response line: {line:?}")]
    MalformedResponse {
        /// The offending line, trimmed.
        line: String,
    },
    /// A request line could not be split into arguments.
    #[error("unbalanced quotes in request line: {line:?}")]
    MalformedRequest {
        /// The offending line.
        line: String,
    },
    /// A value holds a control character and would break the request line.
    #[error("value for '{parameter}' contains a control character")]
    ControlCharacter {
        /// Name of the offending value; the value itself is not kept.
        parameter: String,
    },
    /// Fewer arguments were supplied than the command requires.
    #[error("missing parameters for command '{command}'")]
    MissingParameter {
        /// Name of the command being bound.
        command: String,
    },
    /// An argument did not match its parameter's pattern.
    #[error("invalid value '{value}' for parameter '{parameter}'")]
    InvalidParameter {
        /// The rejected argument.
        value: String,
        /// Name of the parameter it was bound to.
        parameter: String,
    },
    /// The session was never opened or has already been closed.
    #[error("session is closed")]
    ClosedSession,
}

/// Stream-level failures. The current operation cannot continue.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The daemon address did not resolve.
    #[error("failed to resolve daemon address {endpoint}: {source}")]
    Resolve {
        /// Endpoint being resolved.
        endpoint: String,
        /// Resolver error.
        source: io::Error,
    },
    /// Dialling the daemon failed.
    #[error("failed to connect to daemon at {endpoint}: {source}")]
    Connect {
        /// Endpoint being dialled.
        endpoint: String,
        /// Socket error.
        source: io::Error,
    },
    /// Reading a line from the daemon failed.
    #[error("failed to read response from daemon: {0}")]
    Read(io::Error),
    /// Writing a request to the daemon failed.
    #[error("failed to send request to daemon: {0}")]
    Write(io::Error),
    /// The request stayed partially written after every retry.
    #[error("request was only partially written after {attempts} attempts")]
    ShortWrite {
        /// Attempts made before giving up.
        attempts: u32,
    },
    /// The daemon closed the stream before the response was complete.
    #[error("daemon closed the connection before the response completed")]
    ConnectionClosed,
    /// The platform lacks Unix domain sockets.
    #[cfg(not(unix))]
    #[error("platform does not support Unix sockets: {0}")]
    UnsupportedUnixTransport(String),
}

/// Failures establishing the protocol session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandshakeError {
    /// The daemon sent a blank greeting.
    #[error("no valid handshake received from daemon")]
    Empty,
    /// The daemon refused the connection with an error line.
    #[error("daemon rejected the connection: {message}")]
    Rejected {
        /// Message reported by the daemon.
        message: String,
    },
    /// The greeting did not have the `OK MPD <version>` shape.
    #[error("unexpected handshake greeting '{greeting}'")]
    Malformed {
        /// The greeting as received, trimmed.
        greeting: String,
    },
    /// The protocol version is unparsable or older than the minimum.
    #[error("protocol version '{found}' is not supported; at least 'MPD {minimum}' is required")]
    Incompatible {
        /// Version text announced by the daemon.
        found: String,
        /// Oldest version this client accepts.
        minimum: ProtocolVersion,
    },
}

/// An error reported by the daemon in answer to a command.
///
/// Error lines look like `ACK [2@0] {enableoutput} wrong number of
/// arguments`. The message is everything after the first `}`; the bracketed
/// code, command-list index, and command name are kept when they parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ProtocolError {
    message: String,
    ack: Option<AckDetails>,
}

/// Structured header of an `ACK` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckDetails {
    /// Numeric error code.
    pub code: u32,
    /// Position of the failing command within a command list.
    pub index: u32,
    /// Name of the command the daemon rejected.
    pub command: String,
}

impl ProtocolError {
    /// Parses an `ACK` line or a legacy `error:` line.
    ///
    /// When the line carries no `}` the whole trimmed line becomes the
    /// message.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        let message = line
            .split_once('}')
            .map_or(line, |(_, rest)| rest)
            .trim()
            .to_owned();
        let ack = line.strip_prefix(ACK_PREFIX).and_then(parse_ack_header);
        Self { message, ack }
    }

    /// Message reported by the daemon.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parsed `[code@index] {command}` header, when present.
    #[must_use]
    pub const fn ack(&self) -> Option<&AckDetails> {
        self.ack.as_ref()
    }
}

fn parse_ack_header(header: &str) -> Option<AckDetails> {
    let bracketed = header.trim_start().strip_prefix('[')?;
    let (codes, after_codes) = bracketed.split_once(']')?;
    let (code, index) = codes.split_once('@')?;
    let braced = after_codes.trim_start().strip_prefix('{')?;
    let (command, _) = braced.split_once('}')?;
    Some(AckDetails {
        code: code.trim().parse().ok()?,
        index: index.trim().parse().ok()?,
        command: command.to_owned(),
    })
}
