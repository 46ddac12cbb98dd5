//! Blocking yes/no prompts on a line-oriented terminal.

use std::io::{self, BufRead, Write};

use tracing::debug;

/// Asks the user a yes/no question.
pub trait Prompter {
    /// `default` is returned for empty, unrecognised or unreadable input.
    fn confirm(&mut self, question: &str, default: bool) -> bool;
}

/// Prompter over any reader/writer pair; [`LinePrompter::stdio`] for the terminal.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn confirm(&mut self, question: &str, default: bool) -> bool {
        // The answer still counts when the question could not be shown
        if let Err(e) = write!(self.output, "{question} ").and_then(|_| self.output.flush()) {
            debug!(error = %e, "prompt not written");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // EOF
            Ok(0) | Err(_) => default,
            Ok(_) => parse_answer(&line).unwrap_or(default),
        }
    }
}

/// `Some(true)` for y/yes, `Some(false)` for n/no, case-insensitive.
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str, default: bool) -> (bool, String) {
        let mut out = Vec::new();
        let answer = LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), &mut out)
            .confirm("Continue? (y/N)", default);
        (answer, String::from_utf8(out).unwrap())
    }

    /// Writer that rejects everything.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unwritable_output_still_reads_the_answer() {
        let mut p = LinePrompter::new(Cursor::new(b"y\n".to_vec()), ClosedPipe);
        assert!(p.confirm("Overwrite? (y/N)", false));
    }

    #[test]
    fn recognises_yes_and_no_tokens() {
        assert_eq!(parse_answer("y\n"), Some(true));
        assert_eq!(parse_answer("  YES "), Some(true));
        assert_eq!(parse_answer("No\r\n"), Some(false));
        assert_eq!(parse_answer("n"), Some(false));
        assert_eq!(parse_answer("yep"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn falls_back_to_default() {
        assert!(!ask("\n", false).0);
        assert!(ask("\n", true).0);
        assert!(ask("whatever\n", true).0);
        assert!(!ask("whatever\n", false).0);
    }

    #[test]
    fn explicit_answers_override_default() {
        assert!(ask("y\n", false).0);
        assert!(!ask("n\n", true).0);
    }

    #[test]
    fn eof_returns_default() {
        assert!(ask("", true).0);
        assert!(!ask("", false).0);
    }

    #[test]
    fn question_is_written_with_trailing_space() {
        let (_, out) = ask("y\n", false);
        assert_eq!(out, "Continue? (y/N) ");
    }
}
