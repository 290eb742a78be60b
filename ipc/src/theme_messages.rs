use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback text when a failed response carries no `error` field.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A request sent from the client to the theme server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ThemeRequest {
    /// Switch the editor to the named theme.
    SetTheme { theme: String },
    /// Ask for the name of the active theme.
    GetTheme,
    /// Ask for every theme the server can load.
    ListThemes,
    /// Ask the server to reload the editor configuration.
    ReloadConfig,
}

impl ThemeRequest {
    /// The `action` value this request is tagged with on the wire.
    pub fn action(&self) -> &'static str {
        match self {
            ThemeRequest::SetTheme { .. } => "set_theme",
            ThemeRequest::GetTheme => "get_theme",
            ThemeRequest::ListThemes => "list_themes",
            ThemeRequest::ReloadConfig => "reload_config",
        }
    }
}

/// A response from the theme server.
///
/// Holds the raw JSON object. Fields are read leniently by the accessors:
/// a field that is missing or has an unexpected type counts as absent, and
/// fields the issued action does not look at are never inspected.
/// Deserializing from anything other than a JSON object fails.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ThemeResponse {
    fields: Map<String, Value>,
}

impl ThemeResponse {
    /// Creates a response carrying only an error message.
    pub fn error(message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("error".to_string(), Value::String(message.into()));
        Self { fields }
    }

    /// Whether `success` is present and truthy.
    pub fn succeeded(&self) -> bool {
        self.fields.get("success").is_some_and(is_truthy)
    }

    pub fn theme(&self) -> Option<&str> {
        self.string_field("theme")
    }

    pub fn current_theme(&self) -> Option<&str> {
        self.string_field("current_theme")
    }

    /// The `themes` array, if present and made only of strings.
    pub fn themes(&self) -> Option<Vec<String>> {
        self.fields
            .get("themes")?
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.string_field("error")
    }

    /// The server's error text, or a generic fallback.
    pub fn error_message(&self) -> String {
        self.error_text().unwrap_or(UNKNOWN_ERROR).to_string()
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
