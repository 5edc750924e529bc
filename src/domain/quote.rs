//! Quote response parsing and formatting
//!
//! The remote quote service is treated as untrusted: any field that is
//! missing, empty or of the wrong type falls back to a fixed default instead
//! of failing the whole response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Quote shown when the response carries no usable `content`
pub const DEFAULT_CONTENT: &str = "Keep going. Keep growing.";

/// Author shown when the response carries no usable `author`
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// The owner's own quote, shown on startup and whenever a request fails
pub const SIGNATURE_CONTENT: &str = "Do it now. Sometimes later becomes never.";
pub const SIGNATURE_AUTHOR: &str = "Afrah";

/// Fields consumed from a quote response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub content: Option<String>,
    pub author: Option<String>,
}

impl QuoteResponse {
    /// Extract the consumed fields from an arbitrary JSON body
    pub fn from_value(value: &Value) -> Self {
        Self {
            content: non_empty_str(value, "content"),
            author: non_empty_str(value, "author"),
        }
    }

    pub fn content_or_default(&self) -> &str {
        self.content.as_deref().unwrap_or(DEFAULT_CONTENT)
    }

    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }
}

fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Wrap quote text in typographic quotation marks
pub fn format_quote(content: &str) -> String {
    format!("“{content}”")
}

/// Prefix an author with an em-dash
pub fn format_author(author: &str) -> String {
    format!("— {author}")
}
