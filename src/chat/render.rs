//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction so the
//! session can print agent replies without knowing about terminals. The
//! default implementation styles output with ANSI escape codes and keeps
//! a light and a dark palette, mirroring the persisted theme flag.

use std::io::{self, Stdout, Write};

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (agent label, light theme).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for bright cyan text (agent label, dark theme).
const ANSI_BRIGHT_CYAN: &str = "\x1b[96m";

/// ANSI escape code for red text (error notices).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for dim text (info lines, light theme).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for yellow text (screenshot links).
const ANSI_YELLOW: &str = "\x1b[33m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies: plain text
/// with ANSI styling, unstyled text for piping, or a recording sink in
/// tests.
pub trait Renderer: Send {
    /// Print a narrative text reply from the agent.
    fn print_agent_text(&mut self, text: &str);

    /// Print an extracted screenshot reference.
    ///
    /// The terminal cannot inline the PNG, so implementations print the
    /// URL in a recognizable frame.
    fn print_screenshot(&mut self, url: &str);

    /// Print an error notice.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Switch between the dark and light palette.
    fn set_dark(&mut self, dark: bool);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    dark: bool,
}

impl PlainTextRenderer {
    /// Creates a new renderer with ANSI colors enabled and the light
    /// palette.
    pub fn new() -> Self {
        Self::with_style(true, false)
    }

    /// Creates a new renderer with explicit color and theme settings.
    pub fn with_style(use_color: bool, dark: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            dark,
        }
    }

    fn agent_color(&self) -> &'static str {
        if self.dark { ANSI_BRIGHT_CYAN } else { ANSI_CYAN }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_agent_text(&mut self, text: &str) {
        if self.use_color {
            println!("{}AutoQA:{ANSI_RESET} {text}", self.agent_color());
        } else {
            println!("AutoQA: {text}");
        }
        self.flush();
    }

    fn print_screenshot(&mut self, url: &str) {
        if self.use_color {
            println!(
                "{}AutoQA:{ANSI_RESET} {ANSI_YELLOW}[screenshot] {url}{ANSI_RESET}",
                self.agent_color()
            );
        } else {
            println!("AutoQA: [screenshot] {url}");
        }
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("{ANSI_RED}System: {error}{ANSI_RESET}");
        } else {
            eprintln!("System: {error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{info}{ANSI_RESET}");
        } else {
            println!("{info}");
        }
        self.flush();
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}
