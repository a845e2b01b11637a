//! Prompt primitives for the interactive session.
//!
//! `TerminalPrompter` drives dialoguer on a TTY. `LinePrompter` reads plain
//! lines from any `BufRead`, which is what scripted (piped) sessions and tests
//! use.

use std::fmt;
use std::io::{self, BufRead, Write};

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

/// Input reached end of stream; the session should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Check whether an error means the input stream ended.
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InputClosed>().is_some()
}

/// Line-oriented console input.
pub trait Prompter {
    /// Read one raw line (line terminator stripped).
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Read one line, trimmed.
    fn text(&mut self, prompt: &str) -> anyhow::Result<String> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Read the first whitespace-delimited token of a line (empty if blank).
    fn token(&mut self, prompt: &str) -> anyhow::Result<String> {
        let line = self.read_line(prompt)?;
        Ok(line.split_whitespace().next().unwrap_or("").to_string())
    }
}

/// Plain prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut buffer = String::new();
        let read = self
            .reader
            .read_line(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        // Keep the transcript readable when input is piped
        writeln!(self.writer)?;

        let line = buffer.strip_suffix('\n').unwrap_or(&buffer);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(line.to_string())
    }
}

/// dialoguer-backed prompter for interactive terminals.
pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| match err {
                dialoguer::Error::IO(io_err)
                    if matches!(
                        io_err.kind(),
                        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                    ) =>
                {
                    InputClosed.into()
                }
                other => anyhow::anyhow!("Failed to read input: {}", other),
            })
    }
}
