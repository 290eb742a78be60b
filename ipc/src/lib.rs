// This crate holds the wire format spoken between the nvim-theme client and
// the theme server running inside Neovim.

pub mod framing; // Line-delimited JSON encoding/decoding
pub mod theme_messages; // Request and response shapes

pub use framing::{decode_response, encode_request};
pub use theme_messages::{ThemeRequest, ThemeResponse};
