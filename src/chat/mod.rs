//! Chat application module for interactive sessions with the AutoQA agent.
//!
//! This module provides the REPL chat interface built on top of the
//! autoqa client library. It supports:
//!
//! - One-request-at-a-time dispatch with local failure recovery
//! - Splitting replies into text and screenshot messages
//! - Slash commands for session control
//! - Persisted theme and query-history preferences
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Conversation model and the request state machine
//! - [`commands`]: Slash command parsing and handling
//! - [`render`]: Trait-based output rendering

mod commands;
mod config;
mod render;
mod session;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use render::{PlainTextRenderer, Renderer};
pub use session::{ChatSession, EXAMPLE_QUERIES, SessionStats};
