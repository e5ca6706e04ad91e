//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved
//! configuration controlling chat behavior.

use arrrg_derive::CommandLine;

/// Command-line arguments for the autoqa-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Backend URL to talk to.
    #[arrrg(optional, "Backend URL (default: http://localhost:8000)", "URL")]
    pub backend: Option<String>,

    /// Override the preference directory.
    #[arrrg(optional, "Preference directory (default: platform config dir)", "DIR")]
    pub prefs_dir: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// Holds the resolved values after processing command-line arguments with
/// appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Backend URL; `None` defers to the AUTOQA_URL environment variable
    /// or the built-in default.
    pub backend_url: Option<String>,

    /// Override for the preference directory; `None` uses the platform
    /// config directory.
    pub prefs_dir: Option<String>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    pub fn new() -> Self {
        Self {
            backend_url: None,
            prefs_dir: None,
            use_color: true,
        }
    }

    /// Sets the backend URL.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Sets the preference directory.
    pub fn with_prefs_dir(mut self, dir: impl Into<String>) -> Self {
        self.prefs_dir = Some(dir.into());
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            backend_url: args.backend,
            prefs_dir: args.prefs_dir,
            use_color: !args.no_color,
        }
    }
}
