use anyhow::Result;
use clap::CommandFactory;
use log::{debug, error};
use nvim_theme_core::{CacheEnvironment, ThemeResult, resolve_endpoint};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Args, Command};
use crate::output::{print_error, print_fatal, print_not_responding, print_status, print_success};
use crate::theme_client::ThemeClient;

/// Locates the server socket through the pointer file in the cache directory.
fn locate_socket(env: &CacheEnvironment) -> ThemeResult<PathBuf> {
    let pointer_file = env.pointer_file()?;
    debug!("Reading socket pointer from {}", pointer_file.display());
    resolve_endpoint(&pointer_file)
}

/// Runs one invocation of the client.
///
/// Without a command, help goes to `out` and the endpoint is never looked
/// up. Endpoint failures are reported on `err` before any command runs.
pub async fn run(
    command: Option<&Command>,
    env: &CacheEnvironment,
    timeout: Duration,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let Some(command) = command else {
        Args::command().write_help(out)?;
        return Ok(false);
    };

    let socket_path = match locate_socket(env) {
        Ok(path) => path,
        Err(e) => {
            error!("Endpoint resolution failed: {:?}", e);
            print_fatal(err, &e.to_string())?;
            return Ok(false);
        }
    };

    let client = ThemeClient::new(socket_path, timeout);
    run_command(&client, command, out, err).await
}

/// Runs one command against the theme server.
///
/// Returns `Ok(true)` when the command succeeded; `Err` only when writing
/// to the console fails.
pub async fn run_command(
    client: &ThemeClient,
    command: &Command,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    debug!("Dispatching {:?}", command);

    match command {
        Command::Set { theme } => match client.set_theme(theme).await {
            Ok(confirmed) => {
                print_success(out, &format!("Theme changed to: {}", confirmed))?;
                Ok(true)
            }
            Err(e) => fail(err, &e),
        },
        Command::Get => match client.get_theme().await {
            Ok(theme) => {
                writeln!(out, "{}", theme)?;
                Ok(true)
            }
            Err(e) => fail(err, &e),
        },
        Command::List => match client.list_themes().await {
            Ok(themes) => {
                for theme in themes {
                    writeln!(out, "{}", theme)?;
                }
                Ok(true)
            }
            Err(e) => fail(err, &e),
        },
        Command::Reload => match client.reload_config().await {
            Ok(()) => {
                print_success(out, "Configuration reloaded")?;
                Ok(true)
            }
            Err(e) => fail(err, &e),
        },
        Command::Status => run_status(client, out, err).await,
    }
}

/// Reports whether the server answers a `get_theme` request.
async fn run_status(client: &ThemeClient, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    match client.get_theme().await {
        Ok(theme) => {
            print_status(out, client.socket_path(), &theme)?;
            Ok(true)
        }
        Err(e) => {
            fail(err, &e)?;
            print_not_responding(out)?;
            Ok(false)
        }
    }
}

fn fail(err: &mut impl Write, e: &dyn std::error::Error) -> Result<bool> {
    error!("Command failed: {}", e);
    print_error(err, &e.to_string())?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme_client::test_server;
    use std::path::Path;

    struct Captured {
        success: bool,
        out: String,
        err: String,
    }

    async fn run(socket_path: &Path, timeout: Duration, command: Command) -> Captured {
        colored::control::set_override(false);
        let client = ThemeClient::new(socket_path.to_path_buf(), timeout);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let success = run_command(&client, &command, &mut out, &mut err)
            .await
            .unwrap();

        Captured {
            success,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    async fn run_against(reply: &str, command: Command) -> Captured {
        let server = test_server::spawn(Some(reply));
        run(&server.socket_path, Duration::from_secs(5), command).await
    }

    #[tokio::test]
    async fn test_set_confirms_theme() {
        for name in ["tokyonight", "catppuccin-mocha", "rose_pine"] {
            let reply = format!("{{\"success\":true,\"theme\":\"{}\"}}", name);
            let result = run_against(
                &reply,
                Command::Set {
                    theme: name.to_string(),
                },
            )
            .await;

            assert!(result.success);
            assert!(result.out.contains(name));
            assert!(result.err.is_empty());
        }
    }

    #[tokio::test]
    async fn test_set_failure_prints_server_error() {
        let result = run_against(
            "{\"success\":false,\"error\":\"Theme 'nope' not found\"}",
            Command::Set {
                theme: "nope".to_string(),
            },
        )
        .await;

        assert!(!result.success);
        assert!(result.out.is_empty());
        assert_eq!(result.err, "✗ Error: Theme 'nope' not found\n");
    }

    #[tokio::test]
    async fn test_get_prints_only_the_name() {
        let result = run_against("{\"current_theme\":\"nord\"}", Command::Get).await;

        assert!(result.success);
        assert_eq!(result.out, "nord\n");
        assert!(result.err.is_empty());
    }

    #[tokio::test]
    async fn test_list_prints_sorted_names() {
        let result = run_against("{\"themes\":[\"zeta\",\"alpha\",\"mu\"]}", Command::List).await;

        assert!(result.success);
        assert_eq!(result.out, "alpha\nmu\nzeta\n");
    }

    #[tokio::test]
    async fn test_empty_list_is_failure() {
        let result = run_against("{\"themes\":[]}", Command::List).await;

        assert!(!result.success);
        assert!(result.out.is_empty());
        assert!(result.err.starts_with("✗ Error:"));
    }

    #[tokio::test]
    async fn test_reload() {
        let result = run_against("{\"success\":true}", Command::Reload).await;

        assert!(result.success);
        assert_eq!(result.out, "✓ Configuration reloaded\n");
    }

    #[tokio::test]
    async fn test_reload_without_success_field_fails() {
        let result = run_against("{\"status\":\"ok\"}", Command::Reload).await;

        assert!(!result.success);
        assert_eq!(result.err, "✗ Error: Unknown error\n");
    }

    #[tokio::test]
    async fn test_status_reports_socket_and_theme() {
        let server = test_server::spawn(Some("{\"current_theme\":\"kanagawa\"}"));
        let result = run(&server.socket_path, Duration::from_secs(5), Command::Status).await;

        assert!(result.success);
        let lines: Vec<&str> = result.out.lines().collect();
        assert_eq!(lines[0], "✓ Neovim theme server is running");
        assert_eq!(lines[1], format!("  Socket: {}", server.socket_path.display()));
        assert_eq!(lines[2], "  Current theme: kanagawa");
    }

    #[tokio::test]
    async fn test_status_against_silent_server() {
        let server = test_server::spawn(None);
        let result = run(&server.socket_path, Duration::from_millis(200), Command::Status).await;

        assert!(!result.success);
        assert_eq!(result.out, "✗ Neovim theme server is not responding\n");
        assert_eq!(result.err, "✗ Error: Connection timeout\n");
    }

    #[tokio::test]
    async fn test_get_against_silent_server_times_out() {
        let server = test_server::spawn(None);
        let result = run(&server.socket_path, Duration::from_millis(200), Command::Get).await;

        assert!(!result.success);
        assert!(result.out.is_empty());
        assert_eq!(result.err, "✗ Error: Connection timeout\n");
    }

    async fn invoke(command: Option<Command>, env: &CacheEnvironment) -> Captured {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let success = super::run(command.as_ref(), env, Duration::from_secs(5), &mut out, &mut err)
            .await
            .unwrap();

        Captured {
            success,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn env_with_cache(cache_home: &Path) -> CacheEnvironment {
        CacheEnvironment {
            cache_home: Some(cache_home.to_path_buf()),
            home_dir: None,
        }
    }

    #[tokio::test]
    async fn test_no_command_prints_help_without_lookup() {
        // No cache root at all: any endpoint lookup would report an error.
        let result = invoke(None, &CacheEnvironment::default()).await;

        assert!(!result.success);
        assert!(result.out.contains("Usage"));
        assert!(result.out.contains("nvim-theme set tokyonight"));
        assert!(result.err.is_empty());
    }

    #[tokio::test]
    async fn test_missing_pointer_file_fails_before_dispatch() {
        let cache = tempfile::tempdir().unwrap();
        let result = invoke(Some(Command::Get), &env_with_cache(cache.path())).await;

        assert!(!result.success);
        assert!(result.out.is_empty());
        assert!(result.err.starts_with(
            "✗ Neovim theme server not running or socket file not found at "
        ));
        assert!(result.err.ends_with("nvim/theme_socket\n"));
    }

    #[tokio::test]
    async fn test_stale_pointer_fails_before_dispatch() {
        let cache = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(cache.path().join("nvim")).unwrap();
        let socket = cache.path().join("gone.sock");
        std::fs::write(
            cache.path().join("nvim").join("theme_socket"),
            format!("{}\n", socket.display()),
        )
        .unwrap();

        let result = invoke(Some(Command::Status), &env_with_cache(cache.path())).await;

        assert!(!result.success);
        assert!(result.out.is_empty());
        assert_eq!(result.err, format!("✗ Socket {} does not exist\n", socket.display()));
    }

    #[tokio::test]
    async fn test_pointer_file_leads_to_server() {
        let server = test_server::spawn(Some("{\"current_theme\":\"nord\"}"));
        let cache = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(cache.path().join("nvim")).unwrap();
        std::fs::write(
            cache.path().join("nvim").join("theme_socket"),
            format!("{}\n", server.socket_path.display()),
        )
        .unwrap();

        let result = invoke(Some(Command::Get), &env_with_cache(cache.path())).await;

        assert!(result.success);
        assert_eq!(result.out, "nord\n");
    }
}
