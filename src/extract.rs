//! Screenshot extraction from agent replies.
//!
//! The backend embeds screenshot URLs directly in its reply text, e.g.
//! "You can view the screenshot here: http://localhost:8000/static/screenshot_a1b2.png".
//! This module isolates the splitting of a reply into text and image
//! segments as an explicit, testable pattern match against the backend's
//! static-asset path shape.

use regex::Regex;

use crate::error::{Error, Result};
use crate::observability;
use crate::types::Segment;

/// Splits agent replies into renderable segments.
///
/// The match pattern is anchored to one backend origin, so an extractor
/// is built once per session from the configured backend URL.
#[derive(Debug, Clone)]
pub struct ScreenshotExtractor {
    pattern: Regex,
}

impl ScreenshotExtractor {
    /// Creates an extractor for screenshots served by the given origin.
    ///
    /// Trailing slashes on the origin are ignored. Fails only if the
    /// resulting pattern does not compile, which would indicate a
    /// malformed origin string.
    pub fn new(origin: &str) -> Result<Self> {
        let origin = origin.trim_end_matches('/');
        let pattern = format!(
            r"{}/static/screenshot_[A-Za-z0-9_]+\.png",
            regex::escape(origin)
        );
        let pattern = Regex::new(&pattern).map_err(|err| {
            Error::validation(
                format!("cannot build screenshot pattern for {origin}: {err}"),
                Some("origin".to_string()),
            )
        })?;
        Ok(Self { pattern })
    }

    /// Splits a reply into zero or more segments.
    ///
    /// Only the first matching URL is treated as the image reference; any
    /// later matches stay embedded in the text untouched. A reply with no
    /// match yields exactly one text segment, even when the reply is
    /// empty. A reply that is nothing but a matching URL yields exactly
    /// one image segment and no empty text segment.
    pub fn split_reply(&self, reply: &str) -> Vec<Segment> {
        let Some(found) = self.pattern.find(reply) else {
            return vec![Segment::text(reply)];
        };
        observability::REPLY_SCREENSHOTS.click();

        let url = found.as_str().to_string();
        let mut clean = String::with_capacity(reply.len() - url.len());
        clean.push_str(&reply[..found.start()]);
        clean.push_str(&reply[found.end()..]);
        let clean = clean.trim();

        let mut segments = Vec::with_capacity(2);
        if !clean.is_empty() {
            segments.push(Segment::text(clean));
        }
        segments.push(Segment::image(url));
        segments
    }
}
