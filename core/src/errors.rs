use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which part of the endpoint discovery chain was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEndpoint {
    /// The pointer file written by the server does not exist.
    PointerFile,
    /// The pointer file names a socket path that does not exist.
    Socket,
}

impl MissingEndpoint {
    fn describe(self, path: &Path) -> String {
        match self {
            MissingEndpoint::PointerFile => format!(
                "Neovim theme server not running or socket file not found at {}",
                path.display()
            ),
            MissingEndpoint::Socket => format!("Socket {} does not exist", path.display()),
        }
    }
}

/// Theme client errors
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("{}", .kind.describe(.path))]
    EndpointNotFound { kind: MissingEndpoint, path: PathBuf },

    /// The exchange completed but the server reported a failure or omitted
    /// the fields the action expects.
    #[error("{0}")]
    ServerReported(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Failure of a single request/response exchange over the socket.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Connection timeout")]
    Timeout,

    #[error("Connection refused - is Neovim running?")]
    ConnectionRefused,

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("{0}")]
    Transport(#[from] std::io::Error),
}

/// Result type for theme client operations
pub type ThemeResult<T> = Result<T, ThemeError>;
