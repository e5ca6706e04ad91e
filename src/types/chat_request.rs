use serde::{Deserialize, Serialize};

/// Request body for the backend's `POST /chat` endpoint.
///
/// The query string is the whole payload; the backend owns all further
/// interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The natural-language test instruction.
    pub query: String,
}

impl ChatRequest {
    /// Create a new `ChatRequest`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl From<&str> for ChatRequest {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}
