//! Moderator chat commands
//!
//! Messages in an auditorium whose body starts with the configured prefix
//! are parsed into engine commands. Only configured admins may issue them;
//! with an empty admin list command handling is disabled entirely.

use std::collections::HashSet;

use podium_core::UserId;

/// A parsed moderator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Wipe the room's scoreboard
    Reset,
    /// Q&A starts this many seconds from now
    Countdown(i64),
}

/// Who may command the engine, and how commands are spelled
#[derive(Debug, Clone)]
pub struct CommandPolicy {
    prefix: String,
    admins: HashSet<UserId>,
}

impl CommandPolicy {
    /// Create a policy from the configured prefix and admin list
    pub fn new(prefix: impl Into<String>, admins: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            prefix: prefix.into(),
            admins: admins.into_iter().collect(),
        }
    }

    /// Check whether a sender may issue commands
    pub fn allows(&self, sender: &UserId) -> bool {
        self.admins.contains(sender)
    }

    /// Parse a message body into a command.
    ///
    /// Returns `None` both for ordinary chatter and for malformed command
    /// attempts; callers log the latter at debug and move on.
    pub fn parse(&self, body: &str) -> Option<Command> {
        let rest = body.trim().strip_prefix(self.prefix.as_str())?;
        let mut words = rest.split_whitespace();
        match words.next()? {
            "reset" => match words.next() {
                None => Some(Command::Reset),
                Some(_) => None,
            },
            "countdown" => {
                let seconds: i64 = words.next()?.parse().ok()?;
                if words.next().is_some() || seconds < 0 {
                    return None;
                }
                Some(Command::Countdown(seconds))
            }
            _ => None,
        }
    }
}
