use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Who produced a chat message.
///
/// `System` is reserved for locally generated error notices; it is never
/// sent to or received from the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human driving the session.
    User,

    /// The remote AutoQA agent.
    Agent,

    /// Locally generated notices (transport failures).
    System,
}

/// How the content of a chat message should be interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// `content` is literal text.
    Text,

    /// `content` is a screenshot URL to display, not literal text.
    Image,
}

/// A single entry in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced the message.
    pub sender: Sender,

    /// Text or image-URL payload, per `kind`.
    pub kind: MessageKind,

    /// The payload.
    pub content: String,

    /// When the message was appended to the session.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl ChatMessage {
    /// Create a new `ChatMessage` stamped with the current time.
    pub fn new(sender: Sender, kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            sender,
            kind,
            content: content.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Create a new User/Text message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, MessageKind::Text, content)
    }

    /// Create a new Agent message of the given kind.
    pub fn agent(kind: MessageKind, content: impl Into<String>) -> Self {
        Self::new(Sender::Agent, kind, content)
    }

    /// Create a new System/Text message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Sender::System, MessageKind::Text, content)
    }

    /// Returns true if this message carries a screenshot URL.
    pub fn is_image(&self) -> bool {
        self.kind == MessageKind::Image
    }
}
