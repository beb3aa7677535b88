//! Terminal implementation of the core `Prompter` port.
//!
//! Prompts render on stderr (dialoguer's default), so stdout stays clean for
//! the report. Esc on the menu and Ctrl+C anywhere count as cancellation;
//! any other terminal failure, including "not a terminal", is an error.

use std::io;

use console::Term;
use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use owo_colors::OwoColorize;
use sprout_core::{
    application::ports::Prompter,
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::debug;

pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
    color: bool,
}

impl DialoguerPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme, color }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(
        &self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> ScaffoldResult<Option<usize>> {
        let answer = Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt();
        settle(answer.map_err(io::Error::from))
    }

    fn input(&self, prompt: &str, default: &str) -> ScaffoldResult<Option<String>> {
        let answer = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(default.to_owned())
            .allow_empty(true)
            .interact_text();
        settle(answer.map(Some).map_err(io::Error::from))
    }

    fn notice(&self, message: &str) {
        let line = if self.color {
            format!("{} {}", "\u{26a0}".yellow().bold(), message.yellow())
        } else {
            format!("\u{26a0} {message}")
        };
        // Best effort: the next prompt follows regardless.
        let _ = Term::stderr().write_line(&line);
    }
}

/// Fold a prompt result into the port's contract: `Ok(None)` on abort.
fn settle<T>(answer: io::Result<Option<T>>) -> ScaffoldResult<Option<T>> {
    match answer {
        Ok(value) => {
            if value.is_none() {
                debug!("prompt dismissed");
                restore_terminal();
            }
            Ok(value)
        }
        Err(e) if is_interrupt(&e) => {
            debug!(error = %e, "prompt interrupted");
            restore_terminal();
            Ok(None)
        }
        Err(source) => Err(ScaffoldError::Prompt { source }),
    }
}

fn is_interrupt(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

fn restore_terminal() {
    let _ = Term::stderr().show_cursor();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_pass_through() {
        assert_eq!(settle(Ok(Some(2))).unwrap(), Some(2));
    }

    #[test]
    fn dismissal_is_cancellation() {
        assert_eq!(settle::<usize>(Ok(None)).unwrap(), None);
    }

    #[test]
    fn ctrl_c_is_cancellation() {
        let interrupted = io::Error::new(io::ErrorKind::Interrupted, "read interrupted");
        assert_eq!(settle::<String>(Err(interrupted)).unwrap(), None);
        let eof = io::Error::from(io::ErrorKind::UnexpectedEof);
        assert_eq!(settle::<String>(Err(eof)).unwrap(), None);
    }

    #[test]
    fn missing_terminal_is_an_error() {
        let err = settle::<usize>(Err(io::Error::new(
            io::ErrorKind::NotConnected,
            "not a terminal",
        )))
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::Prompt { .. }));
    }
}
