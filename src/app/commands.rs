//! Module `commands`
//!
//! Parses console input lines into commands and defines their results.

use std::fmt;

/// A command typed at the console prompt.
///
/// Keywords are case-insensitive. `Login` keeps the raw, unsanitized fields;
/// sanitizing is the validator's job.
#[derive(Debug, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    Dashboard,
    Status,
    Help,
    Quit,
    Unknown(String),
}

/// Printable form for logs; never includes the password.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Login { email, .. } => write!(f, "LOGIN {} ********", email),
            Command::Logout => write!(f, "LOGOUT"),
            Command::Dashboard => write!(f, "DASHBOARD"),
            Command::Status => write!(f, "STATUS"),
            Command::Help => write!(f, "HELP"),
            Command::Quit => write!(f, "QUIT"),
            Command::Unknown(raw) => write!(f, "UNKNOWN({})", raw),
        }
    }
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    /// Carries a short reason code for logging.
    Failure(String),
    Exit,
}

/// Status plus the text to print, if any.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(code.into()),
            message: Some(message.into()),
        }
    }
}

/// Parses one input line into a [`Command`].
///
/// `LOGIN` takes the email and the password as the next two whitespace-separated
/// fields; missing fields become empty strings so the validator reports them.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "LOGIN" => {
            let mut fields = arg.splitn(2, char::is_whitespace);
            let email = fields.next().unwrap_or("").to_string();
            let password = fields.next().unwrap_or("").trim().to_string();
            Command::Login { email, password }
        }
        "LOGOUT" => Command::Logout,
        "DASHBOARD" => Command::Dashboard,
        "STATUS" => Command::Status,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
