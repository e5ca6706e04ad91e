use serde::{Deserialize, Serialize};

/// How a reply segment should be rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Narrative text from the agent.
    Text,

    /// A screenshot URL extracted from the reply.
    Image,
}

/// One renderable piece of an agent reply.
///
/// Segments are produced by [`ScreenshotExtractor::split_reply`] and
/// appended to the session in the order produced; that order is display
/// order.
///
/// [`ScreenshotExtractor::split_reply`]: crate::extract::ScreenshotExtractor::split_reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// How to render the content.
    pub kind: SegmentKind,

    /// Text or screenshot URL, per `kind`.
    pub content: String,
}

impl Segment {
    /// Create a text segment.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Text,
            content: content.into(),
        }
    }

    /// Create an image segment.
    pub fn image(content: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Image,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_constructors() {
        let text = Segment::text("Page loaded cleanly.");
        assert_eq!(text.kind, SegmentKind::Text);

        let image = Segment::image("http://localhost:8000/static/screenshot_ab.png");
        assert_eq!(image.kind, SegmentKind::Image);
    }
}
