//! Interactive chat client for the AutoQA web-testing agent.
//!
//! This binary provides a REPL for submitting natural-language test
//! instructions to a running AutoQA backend and viewing the agent's
//! replies, including extracted screenshot links.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a backend on localhost:8000
//! autoqa-chat
//!
//! # Point at another backend
//! autoqa-chat --backend http://qa.internal:8000
//!
//! # Disable colors (useful for piping output)
//! autoqa-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear the conversation
//! - `/history` - List the last 10 queries
//! - `/rerun <n>` - Re-submit a past query
//! - `/theme dark|light` - Switch the display theme
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use autoqa::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, EXAMPLE_QUERIES, PlainTextRenderer, Renderer,
    help_text, parse_command,
};
use autoqa::store::{FileStore, PreferenceStore};
use autoqa::{AutoQa, Backend};

/// Main entry point for the autoqa-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("autoqa-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let client = AutoQa::new(config.backend_url.clone())?;
    let store: Box<dyn PreferenceStore> = match config.prefs_dir.as_deref() {
        Some(dir) => Box::new(FileStore::with_dir(dir)?),
        None => Box::new(FileStore::new()?),
    };
    let backend_origin = client.origin().to_string();
    let mut session = ChatSession::new(client, store)?;
    let mut renderer = PlainTextRenderer::with_style(use_color, session.dark_theme());
    let mut rl = DefaultEditor::new()?;

    // A request, once sent, runs to completion or failure; Ctrl+C while
    // one is outstanding must not kill the session.
    ctrlc::set_handler(|| {
        eprintln!("\n(no cancellation; waiting for the backend)");
    })?;

    println!("AutoQA Agent (backend: {})", backend_origin);
    println!("Type /help for commands, /quit to exit\n");

    if session.show_examples() {
        print_examples(&mut renderer);
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            if confirm(&mut rl, "Clear the conversation?") {
                                session.clear();
                                renderer.print_info("Conversation cleared.");
                                print_examples(&mut renderer);
                            }
                        }
                        ChatCommand::History => {
                            print_history(&session, &mut renderer);
                        }
                        ChatCommand::ClearHistory => {
                            if confirm(&mut rl, "Forget the query history?") {
                                session.clear_history();
                                renderer.print_info("Query history cleared.");
                            }
                        }
                        ChatCommand::Rerun(index) => {
                            match session.history().get(index - 1).map(|e| e.query.clone()) {
                                Some(query) => {
                                    println!("You: {}", query);
                                    session.send(&query, &mut renderer).await;
                                }
                                None => renderer.print_error(&format!(
                                    "No history entry at position {}",
                                    index
                                )),
                            }
                        }
                        ChatCommand::Theme(dark) => {
                            session.set_dark_theme(dark);
                            renderer.set_dark(dark);
                            renderer.print_info(if dark {
                                "Dark theme enabled."
                            } else {
                                "Light theme enabled."
                            });
                        }
                        ChatCommand::Examples => {
                            print_examples(&mut renderer);
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // A bare number while the examples are up selects one.
                let query = match example_selection(&session, line) {
                    Some(example) => {
                        println!("You: {}", example);
                        example.to_string()
                    }
                    None => line.to_string(),
                };

                session.send(&query, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn example_selection<B: Backend>(session: &ChatSession<B>, line: &str) -> Option<&'static str> {
    if !session.show_examples() {
        return None;
    }
    let index: usize = line.parse().ok()?;
    EXAMPLE_QUERIES.get(index.checked_sub(1)?).copied()
}

fn confirm(rl: &mut DefaultEditor, prompt: &str) -> bool {
    match rl.readline(&format!("{} [y/N] ", prompt)) {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn print_examples(renderer: &mut PlainTextRenderer) {
    renderer.print_info("Try one of these (type its number, or your own instruction):");
    for (index, example) in EXAMPLE_QUERIES.iter().enumerate() {
        renderer.print_info(&format!("  {}. {}", index + 1, example));
    }
}

fn print_history<B: Backend>(session: &ChatSession<B>, renderer: &mut PlainTextRenderer) {
    let history = session.history();
    if history.is_empty() {
        renderer.print_info("No query history yet.");
        return;
    }
    renderer.print_info("Query history (most recent first):");
    for (index, entry) in history.iter().enumerate() {
        renderer.print_info(&format!(
            "  {}. [{}] {}",
            index + 1,
            entry
                .submitted_at
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_else(|_| "unknown time".to_string()),
            entry.query
        ));
    }
}

fn print_stats<B: Backend>(session: &ChatSession<B>) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Backend: {}", stats.backend);
    println!("      Messages: {}", stats.message_count);
    println!("      Queries recorded: {}", stats.history_count);
    println!(
        "      Theme: {}",
        if stats.dark_theme { "dark" } else { "light" }
    );
    println!(
        "      Status: {}",
        if stats.pending { "processing" } else { "ready" }
    );
}
