use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Where the daemon listens.
///
/// The daemon convention is that a host beginning with `/` names a Unix
/// domain socket rather than a network host, in which case the port is
/// meaningless.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "transport", rename_all = "snake_case")]
pub enum Endpoint {
    /// TCP endpoint.
    Tcp {
        /// Host name or address.
        host: String,
        /// TCP port.
        port: u16,
    },
    /// Unix domain socket endpoint.
    Unix {
        /// Filesystem path of the socket.
        path: Utf8PathBuf,
    },
}

impl Endpoint {
    /// Builds a TCP endpoint.
    #[must_use]
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::Tcp {
            host: host.into(),
            port,
        }
    }

    /// Builds a Unix domain socket endpoint.
    #[must_use]
    pub fn unix(path: impl Into<Utf8PathBuf>) -> Self {
        Self::Unix { path: path.into() }
    }

    /// Interprets a configured host, treating absolute paths as sockets.
    #[must_use]
    pub fn from_host(host: &str, port: u16) -> Self {
        let trimmed = host.trim();
        if trimmed.starts_with('/') {
            Self::unix(trimmed)
        } else {
            Self::tcp(trimmed, port)
        }
    }

    /// Returns the socket path when the endpoint uses the Unix transport.
    #[must_use]
    pub fn unix_path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Unix { path } => Some(path.as_ref()),
            Self::Tcp { .. } => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp { host, port } => write!(formatter, "tcp://{host}:{port}"),
            Self::Unix { path } => write!(formatter, "unix://{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("localhost", 6600, "tcp://localhost:6600")]
    #[case(" 10.0.0.2 ", 6601, "tcp://10.0.0.2:6601")]
    #[case("/run/mpd/socket", 6600, "unix:///run/mpd/socket")]
    fn host_selects_transport(#[case] host: &str, #[case] port: u16, #[case] expected: &str) {
        assert_eq!(Endpoint::from_host(host, port).to_string(), expected);
    }

    #[test]
    fn unix_path_is_only_reported_for_sockets() {
        assert!(Endpoint::tcp("localhost", 6600).unix_path().is_none());
        let endpoint = Endpoint::unix("/tmp/mpd.sock");
        assert_eq!(
            endpoint.unix_path().map(Utf8Path::as_str),
            Some("/tmp/mpd.sock")
        );
    }
}
