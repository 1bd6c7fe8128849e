//! Console front-end
//!
//! Line-oriented stand-in for the login form, the success page and the dashboard.

pub mod commands;
pub mod console;
pub mod handlers;
pub mod views;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use console::Console;
pub use handlers::handle_command;
