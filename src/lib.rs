// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod extract;
pub mod observability;
pub mod store;
pub mod types;

// Re-exports
pub use client::{AutoQa, Backend};
pub use error::{Error, Result};
pub use extract::ScreenshotExtractor;
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use types::*;
