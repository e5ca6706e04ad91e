//! Core data types for the AutoQA client.

mod chat_message;
mod chat_request;
mod chat_response;
mod history_entry;
mod segment;

pub use chat_message::{ChatMessage, MessageKind, Sender};
pub use chat_request::ChatRequest;
pub use chat_response::ChatResponse;
pub use history_entry::HistoryEntry;
pub use segment::{Segment, SegmentKind};
