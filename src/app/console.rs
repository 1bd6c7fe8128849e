//! Module `console`
//!
//! Reads commands line by line, dispatches them, and writes the responses.

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::commands::{CommandStatus, parse_command};
use crate::app::handlers::handle_command;
use crate::app::views;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::session::Session;

const PROMPT: &[u8] = b"> ";

/// Interactive front-end holding the session for one run.
pub struct Console {
    session: Session,
    config: AppConfig,
}

impl Console {
    pub fn new(config: AppConfig) -> Self {
        Self::with_session(config, Session::new())
    }

    /// Starts from existing session state; a stored login is shown as restored.
    pub fn with_session(config: AppConfig, session: Session) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `QUIT` or end of input.
    ///
    /// - Lines longer than `max_input_length` are refused without parsing.
    /// - Commands are handled one at a time, in input order.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer
            .write_all(format!("{}\n", views::banner(&self.config)).as_bytes())
            .await?;
        if self.session.is_logged_in() {
            let restored = format!(
                "Session restored for {}\n",
                self.session.display_email(&self.config.fallback_email)
            );
            writer.write_all(restored.as_bytes()).await?;
        }

        let mut buf = Vec::new();
        loop {
            writer.write_all(PROMPT).await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                info!("Input closed");
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(text) => text.trim_end_matches(['\r', '\n']),
                Err(e) => {
                    warn!("Refusing input line that is not valid UTF-8: {}", e);
                    writer.write_all(b"Invalid input\n").await?;
                    continue;
                }
            };

            if line.len() > self.config.max_input_length {
                warn!("Refusing {} byte input line", line.len());
                writer.write_all(b"Input too long\n").await?;
                continue;
            }

            let command = parse_command(line);
            debug!("Received: {}", command);

            let result = handle_command(&mut self.session, &command, &self.config);
            if let Some(msg) = result.message {
                writer.write_all(format!("{}\n", msg).as_bytes()).await?;
            }
            if let CommandStatus::Exit = result.status {
                break;
            }
        }

        writer.flush().await?;
        Ok(())
    }
}
