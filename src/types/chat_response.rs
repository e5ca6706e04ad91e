use serde::{Deserialize, Serialize};

/// Success body of the backend's `POST /chat` endpoint.
///
/// `response` is the agent's full reply and may embed zero or more
/// screenshot URLs; splitting it into renderable segments is the
/// extractor's job, not the wire layer's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The agent's reply text.
    pub response: String,
}
