//! Line input for the interactive session.
//!
//! The session only ever needs "show a prompt, read one answer". Piped input
//! and tests go through [`LinePrompter`]; a real terminal gets
//! [`DialoguerPrompter`] when the `interactive` feature is enabled.

use std::io::{BufRead, Write};

use crate::error::{CliResult, IntoCli};

/// Source of answers for the menu session.
pub trait Prompter {
    /// Show `prompt` and read one answer, without the line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>>;
}

/// Prompter over any buffered reader, echoing prompts to `out`.
pub struct LinePrompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.out, "{prompt}: ").with_cli_context(|| "writing prompt")?;
        self.out.flush().with_cli_context(|| "writing prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_cli_context(|| "reading input")?;
        if read == 0 {
            // Keep the terminal tidy when input ends mid-prompt.
            writeln!(self.out).with_cli_context(|| "writing prompt")?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }
}

/// Prompter backed by `dialoguer`, for a real terminal.
#[cfg(feature = "interactive")]
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

#[cfg(feature = "interactive")]
impl Prompter for DialoguerPrompter {
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        let answer = dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(e) => Err(e).with_cli_context(|| "reading input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_then_none() {
        let mut out = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("1\r\nAlice Smith\n"), &mut out);

        assert_eq!(prompter.read_line("Menu option").unwrap().as_deref(), Some("1"));
        assert_eq!(
            prompter.read_line("Name").unwrap().as_deref(),
            Some("Alice Smith")
        );
        assert_eq!(prompter.read_line("Position").unwrap(), None);

        let echoed = String::from_utf8(out).unwrap();
        assert!(echoed.starts_with("Menu option: Name: Position: "));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut prompter = LinePrompter::new(Cursor::new("7"), Vec::new());
        assert_eq!(prompter.read_line("Menu option").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn blank_line_is_an_empty_answer() {
        let mut prompter = LinePrompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.read_line("Name").unwrap().as_deref(), Some(""));
    }
}
