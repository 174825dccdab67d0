//! Connection lifecycle and line-level request primitives.
//!
//! A [`Session`] is `Open` from a successful handshake until [`Session::close`]
//! or the first transport failure, after which it is `Closed` for good and
//! every operation fails with [`ClientError::ClosedSession`]. A failed open
//! never produces a session; callers may simply try again. One request is in
//! flight at a time and sessions are not meant to be shared between threads.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::thread;
use std::time::Duration;

use mpdc_config::Endpoint;
use tracing::{debug, info, warn};

use crate::command::line::{Request, ensure_printable};
use crate::error::{ACK_PREFIX, ClientError, HandshakeError, ProtocolError, TransportError};
use crate::record::{Record, RecordList};
use crate::response::{read_record, read_record_list};
use crate::transport::{Connection, connect};
use crate::version::ProtocolVersion;

const GREETING_PREFIX: &str = "OK MPD ";
const CLOSE_COMMAND: &str = "close";
const PASSWORD_COMMAND: &str = "password";

/// Retry behaviour for partially written requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendPolicy {
    attempts: u32,
    pause: Duration,
}

impl SendPolicy {
    /// Three attempts, 300 ms apart.
    pub const DEFAULT: Self = Self::new(3, Duration::from_millis(300));

    /// Builds a policy making at most `attempts` writes, sleeping `pause`
    /// between them.
    #[must_use]
    pub const fn new(attempts: u32, pause: Duration) -> Self {
        Self { attempts, pause }
    }

    /// Maximum number of write attempts.
    #[must_use]
    pub const fn attempts(self) -> u32 {
        self.attempts
    }
}

impl Default for SendPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings applied when opening a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Oldest protocol version accepted during the handshake.
    pub minimum_version: ProtocolVersion,
    /// Read deadline for daemon responses.
    pub read_timeout: Option<Duration>,
    /// Retry policy for partial writes.
    pub send_policy: SendPolicy,
}

impl SessionOptions {
    /// Sets the read deadline.
    #[must_use]
    pub const fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Sets the partial-write retry policy.
    #[must_use]
    pub const fn with_send_policy(mut self, send_policy: SendPolicy) -> Self {
        self.send_policy = send_policy;
        self
    }
}

enum State<S> {
    Open(BufReader<S>),
    Closed,
}

/// A protocol session over one daemon stream.
pub struct Session<S = Connection> {
    state: State<S>,
    version: ProtocolVersion,
    send_policy: SendPolicy,
}

impl Session<Connection> {
    /// Dials `endpoint` and performs the handshake.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when dialling or reading the
    /// greeting fails and [`ClientError::Handshake`] when the greeting is
    /// unusable.
    pub fn open(endpoint: &Endpoint, options: &SessionOptions) -> Result<Self, ClientError> {
        let connection = connect(endpoint, options.read_timeout)?;
        Self::handshake(connection, options)
    }
}

impl<S: Read + Write> Session<S> {
    /// Reads the daemon greeting from an already connected stream.
    ///
    /// The stream is dropped when the handshake fails.
    ///
    /// # Errors
    ///
    /// Fails like [`Session::open`] minus the dialling step.
    pub fn handshake(stream: S, options: &SessionOptions) -> Result<Self, ClientError> {
        let mut reader = BufReader::new(stream);
        let mut greeting = String::new();
        let read = reader
            .read_line(&mut greeting)
            .map_err(TransportError::Read)?;
        if read == 0 {
            return Err(TransportError::ConnectionClosed.into());
        }
        let version = parse_greeting(greeting.trim(), options.minimum_version)?;
        info!(%version, "protocol session established");
        Ok(Self {
            state: State::Open(reader),
            version,
            send_policy: options.send_policy,
        })
    }

    /// Protocol version announced by the daemon.
    #[must_use]
    pub const fn protocol_version(&self) -> ProtocolVersion {
        self.version
    }

    /// Whether the session still accepts requests.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Sends the password. Must precede every other command when the daemon
    /// requires one.
    ///
    /// # Errors
    ///
    /// Returns the daemon's rejection as [`ClientError::Protocol`], and
    /// [`ClientError::ControlCharacter`] without sending anything when the
    /// password would not fit on one line.
    pub fn authenticate(&mut self, password: &str) -> Result<(), ClientError> {
        ensure_printable(PASSWORD_COMMAND, password)?;
        let request = Request::new(PASSWORD_COMMAND).quoted(password);
        self.send_command(request.as_str())
    }

    /// Writes `line` followed by a newline.
    ///
    /// Partial writes are resumed from the unwritten remainder according to
    /// the session's [`SendPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClosedSession`] when the session is not open
    /// and [`ClientError::Transport`] when writing fails, which also closes
    /// the session.
    pub fn send(&mut self, line: &str) -> Result<(), ClientError> {
        let policy = self.send_policy;
        let reader = self.stream()?;
        debug!(request = %redact(line), "sending request");
        let payload = format!("{line}\n");
        let outcome = write_with_retry(reader.get_mut(), payload.as_bytes(), policy);
        self.settle(outcome.map_err(ClientError::from))
    }

    /// Reads one response as a single record.
    ///
    /// # Errors
    ///
    /// See [`read_record`]. Transport failures close the session.
    pub fn receive(&mut self) -> Result<Record, ClientError> {
        let outcome = read_record(self.stream()?);
        self.settle(outcome)
    }

    /// Reads one response as a list of records.
    ///
    /// # Errors
    ///
    /// See [`read_record_list`]. Transport failures close the session.
    pub fn receive_list(&mut self) -> Result<RecordList, ClientError> {
        let outcome = read_record_list(self.stream()?);
        self.settle(outcome)
    }

    /// Sends `line` and decodes a single record.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Session::send`] and [`Session::receive`].
    pub fn send_single_record_request(&mut self, line: &str) -> Result<Record, ClientError> {
        self.send(line)?;
        self.receive()
    }

    /// Sends `line` and decodes a record list.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Session::send`] and
    /// [`Session::receive_list`].
    pub fn send_list_request(&mut self, line: &str) -> Result<RecordList, ClientError> {
        self.send(line)?;
        self.receive_list()
    }

    /// Sends a command whose successful answer carries no fields.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Session::send_single_record_request`].
    pub fn send_command(&mut self, line: &str) -> Result<(), ClientError> {
        self.send_single_record_request(line).map(drop)
    }

    /// Politely ends the session and releases the stream.
    ///
    /// The daemon answers `close` by dropping the connection, so no response
    /// is read. The stream is released even when sending fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClosedSession`] when already closed and
    /// [`ClientError::Transport`] when the close request cannot be written.
    pub fn close(&mut self) -> Result<(), ClientError> {
        let outcome = self.send(CLOSE_COMMAND);
        self.state = State::Closed;
        debug!("session closed");
        outcome
    }

    fn stream(&mut self) -> Result<&mut BufReader<S>, ClientError> {
        match &mut self.state {
            State::Open(reader) => Ok(reader),
            State::Closed => Err(ClientError::ClosedSession),
        }
    }

    fn settle<T>(&mut self, outcome: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(ClientError::Transport(error)) = &outcome {
            warn!(%error, "transport failure; closing session");
            self.state = State::Closed;
        }
        outcome
    }
}

/// Validates a trimmed greeting line and extracts the protocol version.
pub(crate) fn parse_greeting(
    greeting: &str,
    minimum: ProtocolVersion,
) -> Result<ProtocolVersion, HandshakeError> {
    if greeting.is_empty() {
        return Err(HandshakeError::Empty);
    }
    if greeting.starts_with(ACK_PREFIX) {
        return Err(HandshakeError::Rejected {
            message: ProtocolError::from_line(greeting).message().to_owned(),
        });
    }
    let Some(announced) = greeting.strip_prefix(GREETING_PREFIX) else {
        return Err(HandshakeError::Malformed {
            greeting: greeting.to_owned(),
        });
    };
    let incompatible = || HandshakeError::Incompatible {
        found: announced.to_owned(),
        minimum,
    };
    let version: ProtocolVersion = announced.parse().map_err(|_| incompatible())?;
    if !version.satisfies(minimum) {
        return Err(incompatible());
    }
    Ok(version)
}

fn write_with_retry<W: Write>(
    writer: &mut W,
    payload: &[u8],
    policy: SendPolicy,
) -> Result<(), TransportError> {
    let mut remaining = payload;
    for attempt in 1..=policy.attempts {
        match writer.write(remaining) {
            Ok(written) if written >= remaining.len() => {
                return writer.flush().map_err(TransportError::Write);
            }
            Ok(written) => {
                remaining = remaining.get(written..).unwrap_or_default();
                warn!(attempt, written, left = remaining.len(), "partial write");
            }
            Err(error) if is_retryable(&error) => {
                warn!(attempt, %error, "write interrupted");
            }
            Err(error) => return Err(TransportError::Write(error)),
        }
        if attempt < policy.attempts {
            thread::sleep(policy.pause);
        }
    }
    Err(TransportError::ShortWrite {
        attempts: policy.attempts,
    })
}

fn is_retryable(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
    )
}

fn redact(line: &str) -> &str {
    if line.starts_with(PASSWORD_COMMAND) {
        PASSWORD_COMMAND
    } else {
        line
    }
}
