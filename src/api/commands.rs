//! Built-in chat commands, matched before project detection.

use crate::core::models::Project;
use crate::telegram::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Ping,
    Projects,
}

/// Exact-match table; anything else falls through to project detection.
const COMMANDS: &[(&str, Command)] = &[
    ("/start", Command::Help),
    ("/help", Command::Help),
    ("/ping", Command::Ping),
    ("/projects", Command::Projects),
];

impl Command {
    /// Look up already-trimmed message text. No prefix or case-insensitive matching.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(token, _)| *token == text)
            .map(|(_, command)| *command)
    }

    #[must_use]
    pub fn reply(self, projects: &[Project]) -> String {
        match self {
            Command::Help => {
                messages::help(projects.first().map_or("", |p| p.name.as_str()))
            }
            Command::Ping => messages::PONG.to_string(),
            Command::Projects => messages::project_list(projects),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_tokens_only() {
        assert_eq!(Command::parse("/start"), Some(Command::Help));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/ping"), Some(Command::Ping));
        assert_eq!(Command::parse("/projects"), Some(Command::Projects));

        assert_eq!(Command::parse("/ping now"), None);
        assert_eq!(Command::parse("/PING"), None);
        assert_eq!(Command::parse("/pin"), None);
        assert_eq!(Command::parse("please /help"), None);
    }
}
