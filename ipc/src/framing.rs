use crate::theme_messages::{ThemeRequest, ThemeResponse};

/// Serializes a request as one JSON object followed by a newline.
pub fn encode_request(request: &ThemeRequest) -> serde_json::Result<Vec<u8>> {
    let mut line = serde_json::to_vec(request)?;
    line.push(b'\n');
    Ok(line)
}

/// Parses one response object. Surrounding whitespace is tolerated; anything
/// other than a JSON object is an error.
pub fn decode_response(bytes: &[u8]) -> serde_json::Result<ThemeResponse> {
    serde_json::from_slice(bytes.trim_ascii())
}
