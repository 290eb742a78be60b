use log::{debug, info};
use nvim_theme_core::{ExchangeError, ThemeError, ThemeResult};
use nvim_theme_ipc::{ThemeRequest, ThemeResponse, decode_response, encode_request};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::timeout;

/// Size of the single read used to receive a response.
pub const RESPONSE_BUFFER_SIZE: usize = 4096;

/// Client for the theme server's Unix socket.
///
/// Every call opens a fresh connection, sends one request and reads one
/// response; the connection is dropped before the call returns.
#[derive(Debug, Clone)]
pub struct ThemeClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl ThemeClient {
    pub fn new(socket_path: PathBuf, timeout: Duration) -> Self {
        info!("Using theme server socket: {}", socket_path.display());
        Self {
            socket_path,
            timeout,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Performs one exchange, converting every failure into a response that
    /// carries only an `error` field.
    pub async fn exchange(&self, request: &ThemeRequest) -> ThemeResponse {
        match self.try_exchange(request).await {
            Ok(response) => response,
            Err(e) => {
                debug!("{} exchange failed: {:?}", request.action(), e);
                ThemeResponse::error(e.to_string())
            }
        }
    }

    /// Performs one exchange bounded by the configured timeout.
    pub async fn try_exchange(&self, request: &ThemeRequest) -> Result<ThemeResponse, ExchangeError> {
        match timeout(self.timeout, self.round_trip(request)).await {
            Ok(result) => result,
            Err(_) => Err(ExchangeError::Timeout),
        }
    }

    async fn round_trip(&self, request: &ThemeRequest) -> Result<ThemeResponse, ExchangeError> {
        let line = encode_request(request)
            .map_err(|e| ExchangeError::Transport(io::Error::new(io::ErrorKind::InvalidInput, e)))?;

        let mut stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::ConnectionRefused => ExchangeError::ConnectionRefused,
                _ => ExchangeError::Transport(e),
            })?;
        debug!("Connected. Sending {} ({} bytes)", request.action(), line.len());

        stream.write_all(&line).await?;
        stream.flush().await?;

        // One read; the server is expected to answer in a single chunk.
        let mut buffer = vec![0u8; RESPONSE_BUFFER_SIZE];
        let read = stream.read(&mut buffer).await?;
        debug!("Received response ({} bytes)", read);

        Ok(decode_response(&buffer[..read])?)
    }

    /// Switches the editor theme, returning the name the server confirmed.
    pub async fn set_theme(&self, name: &str) -> ThemeResult<String> {
        let request = ThemeRequest::SetTheme {
            theme: name.to_string(),
        };
        let response = self.exchange(&request).await;

        if response.succeeded() {
            Ok(response.theme().unwrap_or(name).to_string())
        } else {
            Err(ThemeError::ServerReported(response.error_message()))
        }
    }

    /// Returns the name of the active theme.
    pub async fn get_theme(&self) -> ThemeResult<String> {
        let response = self.exchange(&ThemeRequest::GetTheme).await;

        match response.current_theme() {
            Some(theme) if !theme.is_empty() => Ok(theme.to_string()),
            Some(_) => Err(ThemeError::ServerReported(
                "Server reported an empty theme name".to_string(),
            )),
            None => Err(ThemeError::ServerReported(response.error_message())),
        }
    }

    /// Returns the available themes in lexicographic order.
    pub async fn list_themes(&self) -> ThemeResult<Vec<String>> {
        let response = self.exchange(&ThemeRequest::ListThemes).await;

        match response.themes() {
            Some(mut themes) if !themes.is_empty() => {
                themes.sort();
                Ok(themes)
            }
            Some(_) => Err(ThemeError::ServerReported("No themes available".to_string())),
            None => Err(ThemeError::ServerReported(response.error_message())),
        }
    }

    /// Asks the server to reload the editor configuration.
    pub async fn reload_config(&self) -> ThemeResult<()> {
        let response = self.exchange(&ThemeRequest::ReloadConfig).await;

        if response.succeeded() {
            Ok(())
        } else {
            Err(ThemeError::ServerReported(response.error_message()))
        }
    }
}
