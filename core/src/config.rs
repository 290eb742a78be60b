use crate::errors::{MissingEndpoint, ThemeError, ThemeResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the cache root.
pub const CACHE_HOME_ENV: &str = "XDG_CACHE_HOME";

/// Name of the file the server writes its socket path into.
pub const POINTER_FILE_NAME: &str = "theme_socket";

/// Default bound on one request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const APP_NAME: &str = "nvim-theme";

/// Snapshot of the environment inputs used to locate the pointer file.
///
/// Captured once at startup; nothing reads the process environment again
/// after this is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheEnvironment {
    pub cache_home: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
}

impl CacheEnvironment {
    /// Reads `XDG_CACHE_HOME` and the home directory from the running process.
    pub fn from_process() -> Self {
        let cache_home = env::var_os(CACHE_HOME_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            cache_home,
            home_dir: dirs::home_dir(),
        }
    }

    /// The cache root: the override if present, otherwise `~/.cache`.
    pub fn cache_root(&self) -> ThemeResult<PathBuf> {
        if let Some(dir) = &self.cache_home {
            return Ok(dir.clone());
        }

        let home_dir = self.home_dir.as_ref().ok_or_else(|| {
            ThemeError::ConfigError("Could not determine home directory".to_string())
        })?;

        Ok(home_dir.join(".cache"))
    }

    /// Location of the pointer file, `<cache-root>/nvim/theme_socket`.
    pub fn pointer_file(&self) -> ThemeResult<PathBuf> {
        Ok(self.cache_root()?.join("nvim").join(POINTER_FILE_NAME))
    }
}

/// Reads the pointer file and returns the socket path it names.
///
/// Fails with `EndpointNotFound` when either the pointer file or the socket
/// it points at is missing.
pub fn resolve_endpoint(pointer_file: &Path) -> ThemeResult<PathBuf> {
    if !pointer_file.exists() {
        return Err(ThemeError::EndpointNotFound {
            kind: MissingEndpoint::PointerFile,
            path: pointer_file.to_path_buf(),
        });
    }

    let content = fs::read_to_string(pointer_file)?;
    let socket_path = PathBuf::from(content.trim());
    debug!(
        "Pointer file {} names socket {}",
        pointer_file.display(),
        socket_path.display()
    );

    if !socket_path.exists() {
        return Err(ThemeError::EndpointNotFound {
            kind: MissingEndpoint::Socket,
            path: socket_path,
        });
    }

    Ok(socket_path)
}

/// Optional user settings for the client
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub log_level: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Loads the config from `~/.config/nvim-theme/config.toml`.
    pub fn load() -> ThemeResult<Self> {
        let path = get_default_config_file(APP_NAME)?;
        debug!("Loading client config from {}", path.display());
        Self::load_from_file(&path)
    }

    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> ThemeResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ThemeError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ThemeError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Exchange timeout, defaulting to five seconds.
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> ThemeResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        ThemeError::ConfigError("Could not determine home directory".to_string())
    })?;

    Ok(home_dir.join(".config").join(app_name))
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> ThemeResult<PathBuf> {
    Ok(get_default_config_dir(app_name)?.join("config.toml"))
}
