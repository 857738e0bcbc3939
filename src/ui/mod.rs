//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{FrontkitError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_pipeline_report, display_proposed_version,
    display_status, display_success, format_strip_report,
};

/// One entry in a selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> Choice<'a> {
    pub const fn new(name: &'a str, description: &'a str) -> Self {
        Choice { name, description }
    }
}

/// Interactive questions the commands ask.
pub trait Prompter {
    /// Shows `choices` and returns the 0-based index of the one picked.
    fn select(&mut self, message: &str, choices: &[Choice<'_>]) -> Result<usize>;

    /// Asks for a line of free text, returned trimmed.
    fn input(&mut self, message: &str) -> Result<String>;
}

/// Line-based prompter over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        TerminalPrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        TerminalPrompter { reader, writer }
    }

    /// Consumes the prompter, handing back the writer (tests inspect what was shown).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(FrontkitError::prompt("input closed before an answer was given"));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    /// Displays a numbered list and accepts a 1-based index or a choice name.
    /// Pressing Enter picks the first choice.
    fn select(&mut self, message: &str, choices: &[Choice<'_>]) -> Result<usize> {
        if choices.is_empty() {
            return Err(FrontkitError::prompt("no choices to select from"));
        }

        writeln!(self.writer, "\n{}", console::style(message).bold())?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. {} {}",
                i + 1,
                choice.name,
                console::style(format!("- {}", choice.description)).dim()
            )?;
        }
        write!(
            self.writer,
            "\nSelect an option (1-{}) [default: 1]: ",
            choices.len()
        )?;
        self.writer.flush()?;

        let answer = self.read_line()?;
        if answer.is_empty() {
            return Ok(0);
        }

        if let Some(index) = choices.iter().position(|choice| choice.name == answer) {
            return Ok(index);
        }

        match answer.parse::<usize>() {
            Ok(index) if index > 0 && index <= choices.len() => Ok(index - 1),
            _ => Err(FrontkitError::prompt(format!("Invalid selection '{}'", answer))),
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "\n{}: ", console::style(message).bold())?;
        self.writer.flush()?;
        self.read_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CHOICES: [Choice<'static>; 2] = [
        Choice::new("init", "Initial version"),
        Choice::new("git-tag", "Follows the git tags"),
    ];

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_select_by_index() {
        assert_eq!(prompter("2\n").select("Pick", &CHOICES).unwrap(), 1);
    }

    #[test]
    fn test_select_default_is_first() {
        assert_eq!(prompter("\n").select("Pick", &CHOICES).unwrap(), 0);
    }

    #[test]
    fn test_select_by_name() {
        assert_eq!(prompter("git-tag\n").select("Pick", &CHOICES).unwrap(), 1);
    }

    #[test]
    fn test_select_out_of_range() {
        assert!(prompter("3\n").select("Pick", &CHOICES).is_err());
        assert!(prompter("0\n").select("Pick", &CHOICES).is_err());
    }

    #[test]
    fn test_select_lists_choices() {
        let mut p = prompter("1\n");
        p.select("What type of version is this?", &CHOICES).unwrap();
        let shown = String::from_utf8(p.into_writer()).unwrap();
        assert!(shown.contains("What type of version is this?"));
        assert!(shown.contains("1. init"));
        assert!(shown.contains("2. git-tag"));
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(prompter("  Card \n").input("Name").unwrap(), "Card");
    }

    #[test]
    fn test_closed_input_is_error() {
        let err = prompter("").input("Name").unwrap_err();
        assert!(matches!(err, FrontkitError::Prompt(_)));
    }
}
