//! Socket transport for daemon connections.
//!
//! [`connect`] dials TCP or Unix domain endpoints and wraps the stream in a
//! uniform [`Connection`] so the session logic stays transport agnostic.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use mpdc_config::Endpoint;
use tracing::debug;

#[cfg(unix)]
use std::os::fd::OwnedFd;
#[cfg(unix)]
use std::os::unix::net::UnixStream;

#[cfg(unix)]
use socket2::{Domain, SockAddr, Socket, Type};

use crate::error::TransportError;

/// Upper bound on how long dialling the daemon may take.
pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// A connected daemon stream.
#[derive(Debug)]
pub enum Connection {
    /// TCP stream.
    Tcp(TcpStream),
    /// Unix domain socket stream.
    #[cfg(unix)]
    Unix(UnixStream),
}

impl Connection {
    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.set_read_timeout(timeout),
            #[cfg(unix)]
            Self::Unix(stream) => stream.set_read_timeout(timeout),
        }
    }
}

impl Read for Connection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.read(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.read(buf),
        }
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.write(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.flush(),
            #[cfg(unix)]
            Self::Unix(stream) => stream.flush(),
        }
    }
}

/// Dials `endpoint`, applying `read_timeout` to the resulting stream.
///
/// Without a read timeout a daemon that stops answering blocks the caller
/// indefinitely.
///
/// # Errors
///
/// Returns [`TransportError::Resolve`] or [`TransportError::Connect`] when
/// the endpoint cannot be reached.
pub fn connect(
    endpoint: &Endpoint,
    read_timeout: Option<Duration>,
) -> Result<Connection, TransportError> {
    let connection = dial(endpoint)?;
    connection
        .set_read_timeout(read_timeout)
        .map_err(|source| TransportError::Connect {
            endpoint: endpoint.to_string(),
            source,
        })?;
    debug!(%endpoint, ?read_timeout, "connected to daemon");
    Ok(connection)
}

fn dial(endpoint: &Endpoint) -> Result<Connection, TransportError> {
    match endpoint {
        Endpoint::Tcp { host, port } => {
            let endpoint_display = endpoint.to_string();
            let address =
                resolve_tcp_address(host, *port).map_err(|source| TransportError::Resolve {
                    endpoint: endpoint_display.clone(),
                    source,
                })?;

            TcpStream::connect_timeout(&address, CONNECTION_TIMEOUT)
                .map(Connection::Tcp)
                .map_err(|source| TransportError::Connect {
                    endpoint: endpoint_display,
                    source,
                })
        }
        Endpoint::Unix { path } => {
            #[cfg(unix)]
            {
                connect_unix(path.as_str()).map_err(|source| TransportError::Connect {
                    endpoint: endpoint.to_string(),
                    source,
                })
            }

            #[cfg(not(unix))]
            {
                let _ = path;
                Err(TransportError::UnsupportedUnixTransport(
                    endpoint.to_string(),
                ))
            }
        }
    }
}

fn resolve_tcp_address(host: &str, port: u16) -> io::Result<SocketAddr> {
    let mut addrs = (host, port).to_socket_addrs()?;
    addrs
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no resolved addresses"))
}

#[cfg(unix)]
fn connect_unix(path: &str) -> io::Result<Connection> {
    let socket = Socket::new(Domain::UNIX, Type::STREAM, None)?;
    let address = SockAddr::unix(path)?;
    socket.connect_timeout(&address, CONNECTION_TIMEOUT)?;
    Ok(Connection::Unix(UnixStream::from(OwnedFd::from(socket))))
}
