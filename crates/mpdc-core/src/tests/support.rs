//! Scripted stream standing in for a daemon connection.

use std::cell::RefCell;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;
use std::time::Duration;

use crate::{ClientError, SendPolicy, Session, SessionOptions};

/// Replays canned daemon output and records what the client writes.
pub(super) struct ScriptedStream {
    input: Cursor<Vec<u8>>,
    written: Rc<RefCell<Vec<u8>>>,
    max_write: Option<usize>,
    broken: bool,
}

impl ScriptedStream {
    pub(super) fn new(script: &str) -> (Self, Rc<RefCell<Vec<u8>>>) {
        let written = Rc::new(RefCell::new(Vec::new()));
        let stream = Self {
            input: Cursor::new(script.as_bytes().to_vec()),
            written: Rc::clone(&written),
            max_write: None,
            broken: false,
        };
        (stream, written)
    }

    /// Accepts at most `limit` bytes per write call.
    pub(super) fn with_max_write(mut self, limit: usize) -> Self {
        self.max_write = Some(limit);
        self
    }

    /// Fails every write with a broken pipe.
    pub(super) fn broken(mut self) -> Self {
        self.broken = true;
        self
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.input.read(buf)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        let accepted = self.max_write.map_or(buf.len(), |limit| limit.min(buf.len()));
        let chunk = buf.get(..accepted).unwrap_or_default();
        self.written.borrow_mut().extend_from_slice(chunk);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Options with retries that do not sleep.
pub(super) fn fast_options() -> SessionOptions {
    SessionOptions::default().with_send_policy(SendPolicy::new(3, Duration::ZERO))
}

/// Opens a session over `stream`.
pub(super) fn open(stream: ScriptedStream) -> Result<Session<ScriptedStream>, ClientError> {
    Session::handshake(stream, &fast_options())
}

/// Text the client has written so far.
pub(super) fn written_text(written: &Rc<RefCell<Vec<u8>>>) -> String {
    String::from_utf8(written.borrow().clone()).expect("client writes utf8")
}
