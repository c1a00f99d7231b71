//! Slash commands typed into the chat composer.

mod registry;

pub use registry::{all_commands, CommandInvocation};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::app::App;
use crate::core::message::AppMessageKind;

pub enum CommandResult {
    /// Command handled; nothing else to do.
    Continue,
    /// Not a command after all; route through the response selector.
    ProcessAsMessage(String),
}

/// Dispatch chat input: `/name args` runs a registered command, anything
/// else (including unknown slash-words) is an ordinary message.
pub fn process_input(app: &mut App, input: &str) -> CommandResult {
    let trimmed = input.trim();

    if !trimmed.starts_with('/') {
        return CommandResult::ProcessAsMessage(input.to_string());
    }

    let mut parts = trimmed[1..].splitn(2, ' ');
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    if let Some(command) = registry::find_command(command_name) {
        let invocation = CommandInvocation {
            input: trimmed,
            args,
        };
        (command.handler)(app, invocation)
    } else {
        CommandResult::ProcessAsMessage(input.to_string())
    }
}

pub(super) fn handle_help(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    let mut help = String::from(
        "Keys:\n\
         • 1-5 switch screens, c opens chat, t toggles the theme\n\
         • Enter sends, Alt+Enter inserts a newline, Esc closes the panel\n\
         • Up/Down scroll, q or Ctrl+C quits\n\nCommands:\n",
    );
    for command in all_commands() {
        help.push_str(&format!("• /{} — {}\n", command.name, command.help));
    }
    app.conversation()
        .add_app_message(AppMessageKind::Info, help.trim_end().to_string());
    CommandResult::Continue
}

pub(super) fn handle_theme(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    if invocation.args.is_empty() {
        app.toggle_theme();
        return CommandResult::Continue;
    }

    let id = invocation.args.to_string();
    match app.apply_theme_by_id(&id) {
        Ok(()) => app.conversation().set_status(format!("Theme set: {id}")),
        Err(e) => app.conversation().set_status(format!("Theme error: {e}")),
    }
    CommandResult::Continue
}

pub(super) fn handle_clear(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    app.conversation().clear_transcript();
    app.conversation().set_status("Conversation cleared");
    CommandResult::Continue
}

pub(super) fn handle_log(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    if invocation.args.is_empty() {
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string();
        let marker = if app.session.logging.is_active() {
            format!("Logging paused at {timestamp}")
        } else {
            format!("Logging resumed at {timestamp}")
        };
        match app.session.logging.toggle_logging(&marker) {
            Ok(message) => app.conversation().set_status(message),
            Err(e) => app.conversation().set_status(format!("Log error: {e}")),
        }
        return CommandResult::Continue;
    }

    match app
        .session
        .logging
        .set_log_file(invocation.args.to_string())
    {
        Ok(message) => app.conversation().set_status(message),
        Err(e) => app.conversation().set_status(format!("Logfile error: {e}")),
    }
    CommandResult::Continue
}

pub(super) fn handle_dump(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    let filename = if invocation.args.is_empty() {
        format!(
            "softsell-transcript-{}.txt",
            chrono::Local::now().format("%Y-%m-%d")
        )
    } else {
        invocation.args.to_string()
    };

    match dump_conversation(app, &filename) {
        Ok(()) => app
            .conversation()
            .set_status(format!("Conversation dumped to: {filename}")),
        Err(e) => app.conversation().set_status(format!("Dump error: {e}")),
    }
    CommandResult::Continue
}

fn dump_conversation(app: &App, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let messages: Vec<_> = app
        .ui
        .chat
        .messages
        .iter()
        .filter(|m| !m.is_app())
        .collect();

    if messages.is_empty() {
        return Err("No conversation to dump - the chat history is empty.".into());
    }

    let path = Path::new(filename);
    if path.exists() {
        return Err(format!("File already exists: {filename}").into());
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if json {
        serde_json::to_writer_pretty(&mut writer, &messages)?;
        writeln!(writer)?;
    } else {
        for message in &messages {
            if message.is_user() {
                writeln!(writer, "You: {}", message.content)?;
            } else {
                writeln!(writer, "{}", message.content)?;
            }
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::responder::{response_table, ResponderService};

    fn test_app() -> App {
        let (responder, _rx) = ResponderService::new();
        App::new(Config::default(), None, responder, None, Some("dark"))
    }

    #[test]
    fn plain_text_is_not_a_command() {
        let mut app = test_app();
        match process_input(&mut app, "what about pricing?") {
            CommandResult::ProcessAsMessage(text) => assert_eq!(text, "what about pricing?"),
            _ => panic!("expected message passthrough"),
        }
    }

    #[test]
    fn unknown_slash_words_fall_through_to_the_selector() {
        let mut app = test_app();
        match process_input(&mut app, "/pricing") {
            CommandResult::ProcessAsMessage(text) => assert_eq!(text, "/pricing"),
            _ => panic!("expected message passthrough"),
        }
    }

    #[test]
    fn theme_command_without_args_toggles() {
        let mut app = test_app();
        assert_eq!(app.ui.theme_id, "dark");
        process_input(&mut app, "/theme");
        assert_eq!(app.ui.theme_id, "light");
    }

    #[test]
    fn theme_command_with_unknown_id_reports_error() {
        let mut app = test_app();
        process_input(&mut app, "/theme dracula");
        assert!(app
            .ui
            .status
            .as_deref()
            .is_some_and(|s| s.contains("Theme error")));
        assert_eq!(app.ui.theme_id, "dark");
    }

    #[test]
    fn help_adds_an_app_notice() {
        let mut app = test_app();
        process_input(&mut app, "/help");
        let notice = app.ui.chat.messages.back().expect("help notice");
        assert!(notice.is_app());
        assert!(notice.content.contains("/dump"));
    }

    #[tokio::test]
    async fn clear_resets_to_the_greeting() {
        let mut app = test_app();
        app.conversation().show_greeting_if_needed();
        app.conversation().submit_user_message("hi".into());
        process_input(&mut app, "/clear");
        assert_eq!(app.ui.chat.messages.len(), 1);
        assert_eq!(
            app.ui.chat.messages[0].content,
            response_table().greeting
        );
    }

    #[tokio::test]
    async fn dump_writes_text_and_refuses_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("transcript.txt");
        let filename = path.to_string_lossy().into_owned();

        let mut app = test_app();
        app.conversation().show_greeting_if_needed();
        app.conversation().submit_user_message("pricing".into());

        process_input(&mut app, &format!("/dump {filename}"));
        let contents = std::fs::read_to_string(&path).expect("dump file");
        assert!(contents.contains("You: pricing"));

        process_input(&mut app, &format!("/dump {filename}"));
        assert!(app
            .ui
            .status
            .as_deref()
            .is_some_and(|s| s.contains("already exists")));
    }

    #[test]
    fn dump_with_json_extension_writes_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("transcript.json");
        let filename = path.to_string_lossy().into_owned();

        let mut app = test_app();
        app.conversation().show_greeting_if_needed();
        process_input(&mut app, &format!("/dump {filename}"));

        let contents = std::fs::read_to_string(&path).expect("dump file");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
        assert!(parsed.as_array().is_some_and(|a| !a.is_empty()));
    }

    #[test]
    fn dump_of_empty_conversation_is_an_error() {
        let mut app = test_app();
        process_input(&mut app, "/dump somewhere.txt");
        assert!(app
            .ui
            .status
            .as_deref()
            .is_some_and(|s| s.contains("Dump error")));
    }
}
