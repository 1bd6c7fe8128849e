//! Command handlers for the console front-end.
//!
//! Each handler takes the session and returns a [`CommandResult`] to print.
//! Validation itself lives in [`crate::auth`]; handlers only act on its result.

use chrono::Utc;
use log::warn;

use crate::app::commands::{Command, CommandResult, CommandStatus};
use crate::app::views;
use crate::auth::{ValidationResult, validate_credential};
use crate::config::AppConfig;
use crate::session::Session;

/// Dispatches a parsed command to its handler.
pub fn handle_command(
    session: &mut Session,
    command: &Command,
    config: &AppConfig,
) -> CommandResult {
    match command {
        Command::Login { email, password } => {
            handle_cmd_login(session, email, password, config)
        }
        Command::Logout => handle_cmd_logout(session),
        Command::Dashboard => CommandResult::success(views::dashboard(session, config)),
        Command::Status => CommandResult::success(views::status(session)),
        Command::Help => CommandResult::success(views::help()),
        Command::Quit => handle_cmd_quit(),
        Command::Unknown(raw) => handle_cmd_unknown(raw),
    }
}

/// Validates the pair and, when accepted, records the login in the session.
fn handle_cmd_login(
    session: &mut Session,
    email: &str,
    password: &str,
    config: &AppConfig,
) -> CommandResult {
    if session.is_logged_in() {
        return CommandResult::failure(
            "already_logged_in",
            "Already logged in. Type LOGOUT first.",
        );
    }

    match validate_credential(email, password) {
        ValidationResult::Accepted { email } => {
            session.login(&email, Utc::now());
            CommandResult::success(views::login_success(config))
        }
        ValidationResult::Rejected(reason) => {
            warn!("Login rejected: {}", reason.code());
            CommandResult::failure(reason.code(), reason.message())
        }
    }
}

fn handle_cmd_logout(session: &mut Session) -> CommandResult {
    session.logout();
    CommandResult::success("Logged out")
}

fn handle_cmd_quit() -> CommandResult {
    CommandResult {
        status: CommandStatus::Exit,
        message: Some("Goodbye".into()),
    }
}

fn handle_cmd_unknown(raw: &str) -> CommandResult {
    if raw.is_empty() {
        return CommandResult {
            status: CommandStatus::Success,
            message: None,
        };
    }
    CommandResult::failure("unknown_command", "Unknown command. Type HELP for commands.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::parse_command;

    fn run(session: &mut Session, line: &str) -> CommandResult {
        handle_command(session, &parse_command(line), &AppConfig::default())
    }

    #[test]
    fn test_login_accepted_writes_session() {
        let mut session = Session::new();
        let result = run(&mut session, "LOGIN user@example.com Passw0rd");

        assert_eq!(result.status, CommandStatus::Success);
        assert!(result.message.unwrap().starts_with("Login Successful!"));
        assert!(session.is_logged_in());
        assert_eq!(session.user_email(), Some("user@example.com"));
        assert!(session.login_time().is_some());
    }

    #[test]
    fn test_login_rejected_leaves_session_untouched() {
        let mut session = Session::new();
        let result = run(&mut session, "LOGIN user@example.com short1");

        assert_eq!(result.status, CommandStatus::Failure("weak_password".into()));
        assert_eq!(
            result.message.as_deref(),
            Some("Password must be at least 8 characters with letters and numbers")
        );
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_login_missing_password() {
        let mut session = Session::new();
        let result = run(&mut session, "LOGIN user@example.com");
        assert_eq!(result.status, CommandStatus::Failure("missing_field".into()));
    }

    #[test]
    fn test_second_login_is_refused() {
        let mut session = Session::new();
        run(&mut session, "LOGIN user@example.com Passw0rd");
        let result = run(&mut session, "LOGIN other@example.com Passw0rd");

        assert_eq!(result.status, CommandStatus::Failure("already_logged_in".into()));
        assert_eq!(session.user_email(), Some("user@example.com"));
    }

    #[test]
    fn test_logout_then_login_again() {
        let mut session = Session::new();
        run(&mut session, "LOGIN user@example.com Passw0rd");
        run(&mut session, "LOGOUT");
        assert!(!session.is_logged_in());

        let result = run(&mut session, "LOGIN other@example.com Passw0rd");
        assert_eq!(result.status, CommandStatus::Success);
        assert_eq!(session.user_email(), Some("other@example.com"));
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "QUIT").status, CommandStatus::Exit);
        assert_eq!(
            run(&mut session, "DANCE").status,
            CommandStatus::Failure("unknown_command".into())
        );

        let blank = run(&mut session, "   ");
        assert_eq!(blank.status, CommandStatus::Success);
        assert!(blank.message.is_none());
    }
}
