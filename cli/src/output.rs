use colored::*;
use std::io::{self, Write};
use std::path::Path;

/// Writes a `✓`-prefixed confirmation line.
pub fn print_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), message)
}

/// Writes a `✗ Error:` line, meant for standard error.
pub fn print_error(err: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(err, "{} {}", "✗ Error:".red().bold(), message)
}

/// Writes the multi-line report for a responsive server.
pub fn print_status(out: &mut impl Write, socket_path: &Path, theme: &str) -> io::Result<()> {
    print_success(out, "Neovim theme server is running")?;
    writeln!(out, "  Socket: {}", socket_path.display())?;
    writeln!(out, "  Current theme: {}", theme.cyan())
}

pub fn print_not_responding(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} Neovim theme server is not responding", "✗".red().bold())
}

/// Writes a `✗`-prefixed fatal message that is not tied to a command.
pub fn print_fatal(err: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(err, "{} {}", "✗".red().bold(), message)
}
