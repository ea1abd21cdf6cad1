//! Terminal implementations of the notification and confirmation channels.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::client::notify::{Confirm, Level, Notifier};
use crate::domain::types::BlogId;

/// Prints notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: Level, message: &str) {
        eprintln!("[{}] {message}", level.as_str());
    }
}

/// Line-oriented terminal prompt. Commands and delete confirmations are read
/// from the same `input` so no line is lost between the two.
pub struct Prompt<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Prints `prompt` and reads one line, `None` at end of input.
    pub fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut output = self.output.borrow_mut();
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&self, question: &str) -> bool {
        match self.read_line(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                log::warn!("Failed to read confirmation: {err}");
                false
            }
        }
    }
}

/// Parses the `<id>` argument of the `v` and `d` commands.
pub fn parse_id(arg: Option<&str>) -> Option<BlogId> {
    arg.and_then(|raw| raw.parse::<i32>().ok())
        .and_then(|raw| BlogId::new(raw).ok())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn yes_answers_confirm() {
        for answer in ["y\n", "Y\n", " yes \n"] {
            let confirm = Prompt::new(Cursor::new(answer), Vec::new());
            assert!(confirm.confirm("Delete?"), "{answer:?} should confirm");
        }
    }

    #[test]
    fn anything_else_declines() {
        for answer in ["n\n", "\n", "maybe\n", ""] {
            let confirm = Prompt::new(Cursor::new(answer), Vec::new());
            assert!(!confirm.confirm("Delete?"), "{answer:?} should decline");
        }
    }

    #[test]
    fn read_line_trims_and_detects_end_of_input() {
        let prompt = Prompt::new(Cursor::new("  n  \n"), Vec::new());
        assert_eq!(prompt.read_line("> ").unwrap().as_deref(), Some("n"));
        assert_eq!(prompt.read_line("> ").unwrap(), None);
    }

    #[test]
    fn question_is_printed() {
        let confirm = Prompt::new(Cursor::new("y\n"), Vec::new());
        confirm.confirm("Delete?");
        assert_eq!(confirm.output.borrow().as_slice(), b"Delete? [y/N] ");
    }

    #[test]
    fn parse_id_accepts_positive_numbers_only() {
        assert_eq!(parse_id(Some("7")).map(BlogId::get), Some(7));
        assert_eq!(parse_id(Some("0")), None);
        assert_eq!(parse_id(Some("-3")), None);
        assert_eq!(parse_id(Some("seven")), None);
        assert_eq!(parse_id(None), None);
    }
}
