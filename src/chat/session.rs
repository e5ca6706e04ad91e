//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the
//! conversation model and drives the request state machine:
//! `Idle -> Sending -> {Success, Failure} -> Idle`. Only one request may
//! be in flight at a time; the guard lives here, not in the prompt loop,
//! so correctness does not depend on the presentation layer.

use crate::chat::render::Renderer;
use crate::client::Backend;
use crate::error::Result;
use crate::extract::ScreenshotExtractor;
use crate::observability;
use crate::store::{HISTORY_CAP, PreferenceStore};
use crate::types::{ChatMessage, HistoryEntry, Segment, SegmentKind};

/// The canned instructions shown while the conversation is empty.
pub const EXAMPLE_QUERIES: [&str; 4] = [
    "Visit https://example.com and analyze the page structure",
    "Check https://news.ycombinator.com for broken links",
    "Take a screenshot of https://github.com",
    "Test https://www.google.com and check console errors",
];

/// A chat session that manages conversation state and backend requests.
///
/// The session owns the ordered message list, the transient flags, the
/// persisted preferences, and the screenshot extractor built from the
/// backend origin. It is discarded at process exit; only the preferences
/// outlive it.
pub struct ChatSession<B: Backend> {
    backend: B,
    store: Box<dyn PreferenceStore>,
    extractor: ScreenshotExtractor,
    messages: Vec<ChatMessage>,
    history: Vec<HistoryEntry>,
    dark_theme: bool,
    pending: bool,
    show_examples: bool,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The backend origin the session talks to.
    pub backend: String,
    /// The number of messages in the conversation.
    pub message_count: usize,
    /// The number of queries in the persisted history.
    pub history_count: usize,
    /// Whether a request is currently outstanding.
    pub pending: bool,
    /// Whether the dark theme is active.
    pub dark_theme: bool,
}

impl<B: Backend> ChatSession<B> {
    /// Creates a new session, reading preferences once from the store.
    pub fn new(backend: B, store: Box<dyn PreferenceStore>) -> Result<Self> {
        let extractor = ScreenshotExtractor::new(backend.origin())?;
        let history = store.load_history();
        let dark_theme = store.load_theme();
        Ok(Self {
            backend,
            store,
            extractor,
            messages: Vec::new(),
            history,
            dark_theme,
            pending: false,
            show_examples: true,
        })
    }

    /// Submits a query and applies the single reply to the session.
    ///
    /// Blank input and re-entrant submissions are no-ops. The user
    /// message and the history entry are recorded before the network
    /// call, so history reflects attempted queries even when the call
    /// fails. Transport failures are recovered locally as a System
    /// notice; they never escape this method.
    pub async fn send(&mut self, input: &str, renderer: &mut dyn Renderer) {
        let Some(query) = self.begin_request(input) else {
            return;
        };
        let outcome = self.backend.run_test(&query).await;
        self.finish_request(outcome, renderer);
    }

    /// `Idle -> Sending`. Returns the trimmed query to dispatch, or
    /// `None` when the submission is refused (blank input or a request
    /// already in flight).
    fn begin_request(&mut self, input: &str) -> Option<String> {
        if self.pending {
            observability::SESSION_REJECTED_REENTRANT.click();
            return None;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let query = trimmed.to_string();
        self.append_user_message(&query)?;
        self.record_query(&query);
        self.pending = true;
        Some(query)
    }

    /// `{Success, Failure} -> Idle`. Applies the outcome to the session
    /// and renders the appended messages.
    fn finish_request(&mut self, outcome: Result<String>, renderer: &mut dyn Renderer) {
        self.pending = false;
        match outcome {
            Ok(reply) => {
                let segments = self.extractor.split_reply(&reply);
                for segment in &segments {
                    match segment.kind {
                        SegmentKind::Text => renderer.print_agent_text(&segment.content),
                        SegmentKind::Image => renderer.print_screenshot(&segment.content),
                    }
                }
                self.append_agent_segments(segments);
            }
            Err(_) => {
                let notice = format!(
                    "Error connecting to backend. Make sure the server is running on {}",
                    self.backend.origin()
                );
                renderer.print_error(&notice);
                self.append_system_error(notice);
            }
        }
    }

    /// Appends a User/Text message, clearing the onboarding examples.
    ///
    /// Returns `None` without appending when the trimmed text is empty.
    pub fn append_user_message(&mut self, text: &str) -> Option<&ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.show_examples = false;
        self.messages.last()
    }

    /// Appends each segment as an Agent message, in the given order.
    pub fn append_agent_segments(&mut self, segments: Vec<Segment>) {
        for segment in segments {
            let kind = match segment.kind {
                SegmentKind::Text => crate::types::MessageKind::Text,
                SegmentKind::Image => crate::types::MessageKind::Image,
            };
            self.messages.push(ChatMessage::agent(kind, segment.content));
        }
    }

    /// Appends a System/Text message; used for transport failures only.
    pub fn append_system_error(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::system(text));
    }

    /// Truncates the conversation and restores the onboarding examples.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.show_examples = true;
    }

    /// Records a query into the persisted history, evicting beyond the
    /// cap, most-recent-first.
    fn record_query(&mut self, query: &str) {
        observability::SESSION_QUERIES.click();
        self.history.insert(0, HistoryEntry::new(query));
        self.history.truncate(HISTORY_CAP);
        self.store.save_history(&self.history);
    }

    /// The persisted history, most-recent-first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Forgets the persisted query history.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.store.clear_history();
    }

    /// Switches the theme and persists the flag.
    pub fn set_dark_theme(&mut self, dark: bool) {
        self.dark_theme = dark;
        self.store.save_theme(dark);
    }

    /// Whether the dark theme is active.
    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    /// The conversation so far, in creation order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Whether a request is outstanding.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Whether the onboarding examples should be shown.
    pub fn show_examples(&self) -> bool {
        self.show_examples
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            backend: self.backend.origin().to_string(),
            message_count: self.messages.len(),
            history_count: self.history.len(),
            pending: self.pending,
            dark_theme: self.dark_theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;
    use crate::types::{MessageKind, Sender};

    const ORIGIN: &str = "http://localhost:8000";

    struct FakeBackend {
        reply: std::result::Result<String, ()>,
    }

    impl FakeBackend {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
            }
        }

        fn failing() -> Self {
            Self { reply: Err(()) }
        }
    }

    #[async_trait::async_trait]
    impl Backend for FakeBackend {
        async fn run_test(&self, _query: &str) -> Result<String> {
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(()) => Err(Error::connection("connection refused", None)),
            }
        }

        fn origin(&self) -> &str {
            ORIGIN
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        events: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn print_agent_text(&mut self, text: &str) {
            self.events.push(format!("text:{text}"));
        }

        fn print_screenshot(&mut self, url: &str) {
            self.events.push(format!("image:{url}"));
        }

        fn print_error(&mut self, error: &str) {
            self.events.push(format!("error:{error}"));
        }

        fn print_info(&mut self, info: &str) {
            self.events.push(format!("info:{info}"));
        }

        fn set_dark(&mut self, _dark: bool) {}
    }

    fn session(backend: FakeBackend) -> ChatSession<FakeBackend> {
        ChatSession::new(backend, Box::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn new_session_empty_with_examples() {
        let session = session(FakeBackend::replying("ok"));
        assert_eq!(session.message_count(), 0);
        assert!(session.show_examples());
        assert!(!session.pending());
    }

    #[test]
    fn append_user_message_preserves_order() {
        let mut session = session(FakeBackend::replying("ok"));
        session.append_user_message("first").unwrap();
        session.append_user_message("second").unwrap();

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].content, "second");
        assert!(messages.iter().all(|m| m.sender == Sender::User));
        assert!(!session.show_examples());
    }

    #[test]
    fn blank_user_message_is_noop() {
        let mut session = session(FakeBackend::replying("ok"));
        assert!(session.append_user_message("   ").is_none());
        assert!(session.append_user_message("").is_none());
        assert_eq!(session.message_count(), 0);
        assert!(session.show_examples());
    }

    #[test]
    fn clear_resets_examples() {
        let mut session = session(FakeBackend::replying("ok"));
        session.append_user_message("something").unwrap();
        session.append_system_error("a notice");
        assert_eq!(session.message_count(), 2);

        session.clear();
        assert_eq!(session.message_count(), 0);
        assert!(session.show_examples());
    }

    #[tokio::test]
    async fn send_appends_user_then_agent_text() {
        let mut session = session(FakeBackend::replying("Looks healthy."));
        let mut renderer = RecordingRenderer::default();
        session.send("Test https://example.com", &mut renderer).await;

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].sender, Sender::Agent);
        assert_eq!(messages[1].kind, MessageKind::Text);
        assert_eq!(messages[1].content, "Looks healthy.");
        assert_eq!(renderer.events, vec!["text:Looks healthy."]);
        assert!(!session.pending());
    }

    #[tokio::test]
    async fn send_splits_screenshot_replies() {
        let reply = "Headline: Foo http://localhost:8000/static/screenshot_abc123.png";
        let mut session = session(FakeBackend::replying(reply));
        let mut renderer = RecordingRenderer::default();
        session.send("screenshot please", &mut renderer).await;

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].kind, MessageKind::Text);
        assert_eq!(messages[1].content, "Headline: Foo");
        assert_eq!(messages[2].kind, MessageKind::Image);
        assert_eq!(
            messages[2].content,
            "http://localhost:8000/static/screenshot_abc123.png"
        );
        assert_eq!(
            renderer.events,
            vec![
                "text:Headline: Foo".to_string(),
                "image:http://localhost:8000/static/screenshot_abc123.png".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn send_blank_is_noop() {
        let mut session = session(FakeBackend::replying("ok"));
        let mut renderer = RecordingRenderer::default();
        session.send("   ", &mut renderer).await;

        assert_eq!(session.message_count(), 0);
        assert!(session.history().is_empty());
        assert!(renderer.events.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_appends_one_system_notice() {
        let mut session = session(FakeBackend::failing());
        let mut renderer = RecordingRenderer::default();
        session.send("check the site", &mut renderer).await;

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::System);
        assert_eq!(messages[1].kind, MessageKind::Text);
        assert!(messages[1].content.contains(ORIGIN));
        assert!(!session.pending());
        // The attempt still lands in history.
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn session_usable_after_failure() {
        let mut session = session(FakeBackend::failing());
        let mut renderer = RecordingRenderer::default();
        session.send("first attempt", &mut renderer).await;
        session.send("second attempt", &mut renderer).await;

        assert_eq!(session.message_count(), 4);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].query, "second attempt");
    }

    #[test]
    fn reentrant_submission_rejected() {
        let mut session = session(FakeBackend::replying("ok"));
        let first = session.begin_request("query one");
        assert_eq!(first.as_deref(), Some("query one"));
        assert!(session.pending());

        // Second submission while Sending: refused, nothing recorded.
        assert!(session.begin_request("query two").is_none());
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.history().len(), 1);

        let mut renderer = RecordingRenderer::default();
        session.finish_request(Ok("done".to_string()), &mut renderer);
        assert!(!session.pending());
        assert!(session.begin_request("query three").is_some());
    }

    #[tokio::test]
    async fn history_capped_at_ten_most_recent_first() {
        let mut session = session(FakeBackend::replying("ok"));
        let mut renderer = RecordingRenderer::default();
        for i in 1..=11 {
            session.send(&format!("query {i}"), &mut renderer).await;
        }

        let history = session.history();
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history[0].query, "query 11");
        assert_eq!(history[9].query, "query 2");
        assert!(history.iter().all(|e| e.query != "query 1"));
    }

    #[tokio::test]
    async fn history_persists_through_store() {
        let store = Box::new(MemoryStore::new());
        let mut session =
            ChatSession::new(FakeBackend::replying("ok"), store).unwrap();
        let mut renderer = RecordingRenderer::default();
        session.send("remember me", &mut renderer).await;
        assert_eq!(session.history().len(), 1);

        session.clear_history();
        assert!(session.history().is_empty());
    }

    #[test]
    fn theme_round_trips_through_store() {
        let mut session = session(FakeBackend::replying("ok"));
        assert!(!session.dark_theme());
        session.set_dark_theme(true);
        assert!(session.dark_theme());
        session.set_dark_theme(false);
        assert!(!session.dark_theme());
    }

    #[test]
    fn stats_snapshot() {
        let mut session = session(FakeBackend::replying("ok"));
        session.append_user_message("one").unwrap();
        let stats = session.stats();
        assert_eq!(stats.backend, ORIGIN);
        assert_eq!(stats.message_count, 1);
        assert_eq!(stats.history_count, 0);
        assert!(!stats.pending);
        assert!(!stats.dark_theme);
    }
}
