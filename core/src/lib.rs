// Shared pieces of the nvim-theme client:
// - Error types for endpoint discovery and socket exchanges
// - Client configuration and cache-directory lookup

// Export config module - Configuration loading and endpoint resolution
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;
