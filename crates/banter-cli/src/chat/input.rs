//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the loop runner sees three events:
//! a raw submitted line, EOF (Ctrl+D), or an interrupt (Ctrl+C). Lines come
//! back untouched; normalization belongs to the engine.

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line, exactly as typed.
    Line(String),
    /// End of file (Ctrl+D) -- a graceful termination signal.
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler with a swappable prompt.
///
/// The calculator sub-mode swaps the prompt on entry and restores it on
/// exit, so the user always sees which loop owns the line.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create an input handler with the given initial prompt.
    ///
    /// Also returns a `SharedWriter` for printing without tearing the
    /// prompt line.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Swap the prompt shown to the user.
    pub fn set_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    /// Read one input event.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => InputEvent::Line(line),
            Ok(rustyline_async::ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
