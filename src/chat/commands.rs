//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the session without sending queries to the
//! backend.

/// A parsed chat command.
///
/// These commands control the chat session and are never sent to the
/// backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the conversation.
    Clear,

    /// List the persisted query history.
    History,

    /// Clear the persisted query history.
    ClearHistory,

    /// Re-run a history entry by its 1-based position.
    Rerun(usize),

    /// Switch the dark theme on or off.
    Theme(bool),

    /// Show the onboarding example queries again.
    Examples,

    /// Display session statistics (message count, backend, etc.).
    Stats,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be treated as a query for the backend.
///
/// # Examples
///
/// ```
/// # use autoqa::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/theme on").is_some());
/// assert!(parse_command("Visit https://example.com").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "history" => match argument {
            None => ChatCommand::History,
            Some(arg) if arg.eq_ignore_ascii_case("clear") => ChatCommand::ClearHistory,
            Some(_) => ChatCommand::Invalid(
                "/history takes no argument, or 'clear'".to_string(),
            ),
        },
        "rerun" => match argument.map(|arg| arg.parse::<usize>()) {
            Some(Ok(index)) if index >= 1 => ChatCommand::Rerun(index),
            Some(_) => {
                ChatCommand::Invalid("/rerun expects a history position (1-10)".to_string())
            }
            None => ChatCommand::Invalid("/rerun requires a history position".to_string()),
        },
        "theme" => match argument.and_then(parse_on_off) {
            Some(dark) => ChatCommand::Theme(dark),
            None => ChatCommand::Invalid("/theme expects 'dark' or 'light'".to_string()),
        },
        "examples" => ChatCommand::Examples,
        "stats" | "status" => ChatCommand::Stats,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

fn parse_on_off(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "dark" | "on" | "true" => Some(true),
        "light" | "off" | "false" => Some(false),
        _ => None,
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /clear             Clear the conversation
  /history           List the last 10 queries
  /history clear     Forget the persisted query history
  /rerun <n>         Re-submit history entry n (1 = most recent)
  /theme dark|light  Switch the display theme
  /examples          Show the example queries again
  /stats             Show session statistics
  /help              Show this help message
  /quit              Exit the chat"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_clear() {
        assert_eq!(parse_command("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/CLEAR"), Some(ChatCommand::Clear));
    }

    #[test]
    fn parse_history_commands() {
        assert_eq!(parse_command("/history"), Some(ChatCommand::History));
        assert_eq!(
            parse_command("/history clear"),
            Some(ChatCommand::ClearHistory)
        );
        assert!(matches!(
            parse_command("/history prune"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn parse_rerun() {
        assert_eq!(parse_command("/rerun 1"), Some(ChatCommand::Rerun(1)));
        assert_eq!(parse_command("/rerun 10"), Some(ChatCommand::Rerun(10)));
        assert!(matches!(
            parse_command("/rerun 0"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/rerun latest"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/rerun"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("requires")
        ));
    }

    #[test]
    fn parse_theme_toggle() {
        assert_eq!(parse_command("/theme dark"), Some(ChatCommand::Theme(true)));
        assert_eq!(parse_command("/theme on"), Some(ChatCommand::Theme(true)));
        assert_eq!(
            parse_command("/theme light"),
            Some(ChatCommand::Theme(false))
        );
        assert!(matches!(
            parse_command("/theme sepia"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("expects")
        ));
    }

    #[test]
    fn parse_examples_stats_help() {
        assert_eq!(parse_command("/examples"), Some(ChatCommand::Examples));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("Unknown")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("Visit https://example.com"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/quit"));
        assert!(help.contains("/history"));
        assert!(help.contains("/theme"));
    }
}
