// file: src/notify.rs
// version: 1.0.0
// guid: 9a4c17d2-3b6e-4f08-8c59-d1e7a20b4f35

//! User-facing messages

use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Error,
}

/// A message as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub level: MessageLevel,
    #[serde(rename = "message")]
    pub text: String,
}

/// Fire-and-forget channel for transient user messages
pub trait Notifier: Send + Sync {
    fn show_info(&self, text: &str);
    fn show_error(&self, text: &str);
}

/// Output style for [`ConsoleNotifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStyle {
    Plain,
    Colored,
    Json,
}

/// Writes info messages to stdout and errors to stderr
#[derive(Debug)]
pub struct ConsoleNotifier {
    style: ConsoleStyle,
}

impl ConsoleNotifier {
    pub fn new(style: ConsoleStyle) -> Self {
        Self { style }
    }

    fn render(&self, message: &Message) -> String {
        match self.style {
            ConsoleStyle::Plain => message.text.clone(),
            ConsoleStyle::Colored => match message.level {
                MessageLevel::Info => format!("{} {}", "✔".green(), message.text),
                MessageLevel::Error => format!("{} {}", "✘".red().bold(), message.text.red()),
            },
            // Message holds only strings, serialization cannot fail
            ConsoleStyle::Json => serde_json::to_string(message).unwrap_or_default(),
        }
    }

    fn emit(&self, message: Message) {
        let line = self.render(&message);
        // A closed stdout or stderr must not take the host down
        let _ = match message.level {
            MessageLevel::Info => writeln!(std::io::stdout(), "{}", line),
            MessageLevel::Error => writeln!(std::io::stderr(), "{}", line),
        };
    }
}

impl Notifier for ConsoleNotifier {
    fn show_info(&self, text: &str) {
        self.emit(Message {
            level: MessageLevel::Info,
            text: text.to_string(),
        });
    }

    fn show_error(&self, text: &str) {
        self.emit(Message {
            level: MessageLevel::Error,
            text: text.to_string(),
        });
    }
}

/// Keeps every message in memory, in arrival order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Message>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages
    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn push(&self, level: MessageLevel, text: &str) {
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        messages.push(Message {
            level,
            text: text.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn show_info(&self, text: &str) {
        self.push(MessageLevel::Info, text);
    }

    fn show_error(&self, text: &str) {
        self.push(MessageLevel::Error, text);
    }
}
