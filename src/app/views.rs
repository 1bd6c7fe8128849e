//! Text views for the console front-end.

use crate::config::AppConfig;
use crate::session::Session;

const FEATURES: [(&str, &str); 3] = [
    (
        "Fast & Secure",
        "Built with modern web technologies and deployed on GCP Compute Engine",
    ),
    (
        "Dockerized",
        "Containerized application for easy deployment and scaling",
    ),
    (
        "Nginx Powered",
        "High-performance web server for optimal delivery",
    ),
];

const DEMO_NOTE: &str = "Demo Mode: any well-formed email and password signs you in.";
const PASSWORD_NOTE: &str =
    "Password Requirements: At least 8 characters with letters and numbers";

pub fn banner(config: &AppConfig) -> String {
    format!(
        "=== {} ===\nPlease sign in to your account. Type HELP for commands.\n{}",
        config.app_title, DEMO_NOTE
    )
}

pub fn login_success(config: &AppConfig) -> String {
    format!(
        "Login Successful!\nYou are now logged in to the {}.\n\
         Type DASHBOARD to open the dashboard or LOGOUT to sign out.",
        config.app_title
    )
}

/// Header with the current user followed by the welcome section.
pub fn dashboard(session: &Session, config: &AppConfig) -> String {
    let mut view = format!(
        "--- Dashboard Module --- [{}]\n\nWelcome to Your Dashboard!\n\
         You are now viewing the Dashboard Module.\n",
        session.display_email(&config.fallback_email)
    );
    for (title, description) in FEATURES {
        view.push_str(&format!("  * {}: {}\n", title, description));
    }
    view.trim_end().to_string()
}

pub fn status(session: &Session) -> String {
    if !session.is_logged_in() {
        return "Not logged in".to_string();
    }

    let email = session.user_email().unwrap_or("unknown");
    match session.login_time() {
        Some(time) => format!("Logged in as {} since {}", email, time.to_rfc3339()),
        None => format!("Logged in as {}", email),
    }
}

pub fn help() -> String {
    [
        "Commands:",
        "  LOGIN <email> <password>  Sign in",
        "  LOGOUT                    Sign out and clear the session",
        "  DASHBOARD                 Show the dashboard",
        "  STATUS                    Show login state",
        "  HELP                      Show this help",
        "  QUIT                      Exit",
        DEMO_NOTE,
        PASSWORD_NOTE,
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_dashboard_uses_fallback_email() {
        let config = AppConfig::default();
        let view = dashboard(&Session::new(), &config);
        assert!(view.starts_with("--- Dashboard Module --- [demo@example.com]"));
        assert!(view.contains("Welcome to Your Dashboard!"));
        assert!(view.contains("You are now viewing the Dashboard Module."));
        assert!(view.contains("  * Dockerized: Containerized application"));
    }

    #[test]
    fn test_banner_and_help_carry_demo_note() {
        assert!(banner(&AppConfig::default()).ends_with(DEMO_NOTE));
        let help = help();
        assert!(help.contains(DEMO_NOTE));
        assert!(help.ends_with(PASSWORD_NOTE));
    }

    #[test]
    fn test_dashboard_uses_session_email() {
        let mut session = Session::new();
        session.login("user@example.com", Utc::now());
        let view = dashboard(&session, &AppConfig::default());
        assert!(view.contains("[user@example.com]"));
    }

    #[test]
    fn test_status() {
        let mut session = Session::new();
        assert_eq!(status(&session), "Not logged in");

        session.login("user@example.com", Utc::now());
        assert!(status(&session).starts_with("Logged in as user@example.com since "));
    }
}
