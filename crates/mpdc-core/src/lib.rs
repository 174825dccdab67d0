//! Protocol engine for talking to a Music Player Daemon.
//!
//! The daemon speaks a line-oriented text protocol: the client writes one
//! command per line and the daemon answers with `key: value` lines closed by
//! `OK`, or with a single `ACK` error line. This crate owns the three pieces
//! with real protocol state:
//!
//! - [`Session`] dials the daemon, validates the greeting, and sends and
//!   receives lines with bounded write retries.
//! - [`response`] decodes answers into a [`Record`] or a list of records,
//!   inferring list boundaries from key repetition.
//! - [`command`] declares command shapes and validates positional arguments
//!   before any I/O happens.

pub mod command;
mod error;
mod record;
pub mod response;
mod session;
mod transport;
mod version;

pub use error::{AckDetails, ClientError, HandshakeError, ProtocolError, TransportError};
pub use record::{Record, RecordList};
pub use session::{SendPolicy, Session, SessionOptions};
pub use transport::{CONNECTION_TIMEOUT, Connection, connect};
pub use version::{ProtocolVersion, VersionParseError};

#[cfg(test)]
mod tests;
