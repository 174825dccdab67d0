//! Fake daemon for behavioural tests.
//!
//! Serves one TCP connection: writes a greeting, then answers each request
//! line with the next scripted reply (or a bare `OK` once the script runs
//! out), recording every request until the client sends `close` or hangs up.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};

pub(in crate::tests) const DEFAULT_GREETING: &str = "OK MPD 0.23.5";

/// How the daemon answers one request.
#[derive(Debug, Clone)]
pub(in crate::tests) enum Reply {
    /// Response lines, normally ending in `OK` or an `ACK` line.
    Lines(Vec<String>),
    /// Drop the connection without answering.
    HangUp,
}

impl Reply {
    /// Builds a reply from `|`-separated lines.
    pub(in crate::tests) fn from_script(script: &str) -> Self {
        Self::Lines(script.split('|').map(str::to_owned).collect())
    }
}

pub(in crate::tests) struct FakeDaemon {
    port: u16,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<thread::JoinHandle<Result<()>>>,
}

impl FakeDaemon {
    /// Spawns a daemon on an ephemeral port.
    pub(in crate::tests) fn spawn(greeting: &str, replies: Vec<Reply>) -> Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", 0)).context("bind fake daemon")?;
        listener
            .set_nonblocking(true)
            .context("fake daemon nonblocking")?;
        let port = listener.local_addr().context("local addr")?.port();
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let requests_clone = Arc::clone(&requests);
        let greeting = greeting.to_owned();
        let handle = thread::spawn(move || {
            Self::serve_client(&listener, &greeting, replies.into(), &requests_clone)
        });
        Ok(Self {
            port,
            requests,
            handle: Some(handle),
        })
    }

    pub(in crate::tests) fn port(&self) -> u16 {
        self.port
    }

    /// Waits for the session to end and returns the recorded requests.
    pub(in crate::tests) fn take_requests(&mut self) -> Result<Vec<String>> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| anyhow!("fake daemon thread panicked"))?
                .context("fake daemon failed")?;
        }
        let requests = self
            .requests
            .lock()
            .map_err(|error| anyhow!("lock requests: {error}"))?;
        Ok(requests.clone())
    }

    fn serve_client(
        listener: &TcpListener,
        greeting: &str,
        replies: VecDeque<Reply>,
        requests: &Mutex<Vec<String>>,
    ) -> Result<()> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            match listener.accept() {
                Ok((stream, _)) => return Self::converse(stream, greeting, replies, requests),
                Err(ref error)
                    if error.kind() == io::ErrorKind::WouldBlock && Instant::now() < deadline =>
                {
                    thread::sleep(Duration::from_millis(10));
                }
                // Nobody connected; the CLI failed before dialling.
                Err(ref error) if error.kind() == io::ErrorKind::WouldBlock => return Ok(()),
                Err(error) => return Err(error).context("accept connection"),
            }
        }
    }

    fn converse(
        stream: TcpStream,
        greeting: &str,
        mut replies: VecDeque<Reply>,
        requests: &Mutex<Vec<String>>,
    ) -> Result<()> {
        stream
            .set_nonblocking(false)
            .context("fake daemon blocking stream")?;
        let mut writer = stream.try_clone().context("clone stream")?;
        let mut reader = BufReader::new(stream);
        write_lines(&mut writer, &[greeting.to_owned()]).context("write greeting")?;

        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).context("read request")? == 0 {
                return Ok(());
            }
            let request = line.trim_end().to_owned();
            let is_close = request == "close";
            requests
                .lock()
                .map_err(|error| anyhow!("lock requests: {error}"))?
                .push(request);
            if is_close {
                return Ok(());
            }
            match replies.pop_front() {
                Some(Reply::Lines(lines)) => {
                    write_lines(&mut writer, &lines).context("write reply")?;
                }
                Some(Reply::HangUp) => return Ok(()),
                None => write_lines(&mut writer, &[String::from("OK")]).context("write OK")?,
            }
        }
    }
}

impl Drop for FakeDaemon {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Writes lines to a stream, appending newlines and flushing.
fn write_lines(stream: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        stream.write_all(line.as_bytes())?;
        stream.write_all(b"\n")?;
    }
    stream.flush()
}
