//! Line-oriented terminal front end.
//!
//! Each line of input is split into key tokens and fed to the session one
//! token at a time. The display is printed once per line, either as the two
//! display lines or as a JSON snapshot.

use crate::input::{KeyCommand, tokenize};
use crate::session::Session;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::warn;

/// Words that end an interactive session.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

pub struct Terminal {
    session: Session,
    json: bool,
}

impl Terminal {
    pub fn new(session: Session, json: bool) -> Self {
        Self { session, json }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Feed every key token of `line` to the session.
    ///
    /// Unknown keys are skipped. Arithmetic errors are reported on `notices`
    /// as `! <message>`.
    pub fn feed_line(&mut self, line: &str, notices: &mut impl Write) -> Result<()> {
        for token in tokenize(line) {
            let command = match token.parse::<KeyCommand>() {
                Ok(command) => command,
                Err(err) => {
                    warn!(%err, "skipping key");
                    continue;
                }
            };

            let feedback = self.session.handle(command);
            if let Some(err) = feedback.outcome.error() {
                writeln!(notices, "! {}", err).context("Failed to write notice")?;
            }
        }

        Ok(())
    }

    /// Print the current display.
    pub fn print_display(&self, out: &mut impl Write) -> Result<()> {
        if self.json {
            let json = serde_json::to_string(&self.session.snapshot())
                .context("Failed to encode snapshot")?;
            writeln!(out, "{}", json).context("Failed to write display")?;
        } else {
            writeln!(out, "{}", self.session.display()).context("Failed to write display")?;
        }
        out.flush().context("Failed to write display")?;
        Ok(())
    }

    /// Read lines until EOF or a quit word, printing the display after each.
    pub fn run_interactive(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        notices: &mut impl Write,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let trimmed = line.trim();
            if QUIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
                break;
            }
            if trimmed.is_empty() {
                continue;
            }

            self.feed_line(trimmed, notices)?;
            self.print_display(out)?;
        }

        Ok(())
    }
}
