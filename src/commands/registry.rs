use super::CommandResult;
use crate::core::app::App;

pub type CommandHandler = fn(&mut App, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub input: &'a str,
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        help: "Show keyboard shortcuts and available commands.",
        handler: super::handle_help,
    },
    Command {
        name: "theme",
        help: "Toggle light/dark, or apply a theme by id.",
        handler: super::handle_theme,
    },
    Command {
        name: "clear",
        help: "Reset the conversation back to the greeting.",
        handler: super::handle_clear,
    },
    Command {
        name: "log",
        help: "Toggle transcript logging or set the log file path.",
        handler: super::handle_log,
    },
    Command {
        name: "dump",
        help: "Export the conversation to a text or JSON file.",
        handler: super::handle_dump,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(find_command("THEME").is_some());
        assert!(find_command("Help").is_some());
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert!(find_command("model").is_none());
        assert!(find_command("").is_none());
    }
}
