use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// A persisted mapping from a short code to its destination.
///
/// The JSON form is also the HTTP response body of a successful create:
/// `{"original_url": "...", "short_url": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The user-supplied destination.
    pub original_url: String,
    /// The server-generated code, primary key of the store.
    pub short_url: ShortCode,
}

impl Link {
    pub fn new(original_url: impl Into<String>, short_url: ShortCode) -> Self {
        Self {
            original_url: original_url.into(),
            short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names() {
        let link = Link::new("https://example.com", ShortCode::new_unchecked("abc123"));
        let value = serde_json::to_value(&link).unwrap();

        assert_eq!(value["original_url"], "https://example.com");
        assert_eq!(value["short_url"], "abc123");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
