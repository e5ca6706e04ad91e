use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A past query, as persisted in the preference store.
///
/// The stored list is most-recent-first and capped at
/// [`HISTORY_CAP`](crate::store::HISTORY_CAP) entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The literal text submitted by the user.
    pub query: String,

    /// When the query was submitted.
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl HistoryEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            submitted_at: OffsetDateTime::now_utc(),
        }
    }
}
