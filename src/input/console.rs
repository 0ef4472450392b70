//! Line-oriented console over arbitrary reader and writer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{InputRejection, PayrollError, PayrollResult};

/// How a line of input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Skip blank lines and leading whitespace, then take the rest of the line.
    Token,
    /// Take exactly one line with its leading whitespace trimmed.
    Line,
}

/// A prompt-and-read console.
///
/// Generic over its streams so sessions can run against stdin/stdout or a
/// scripted [`std::io::Cursor`] and a `Vec<u8>`.
///
/// # Example
///
/// ```
/// use payroll_tracker::input::{Console, ReadMode};
/// use payroll_tracker::validation::parse_positive_amount;
/// use rust_decimal::Decimal;
/// use std::io::Cursor;
///
/// let mut console = Console::new(Cursor::new("abc\n0\n12\n"), Vec::new());
/// let value = console.collect_validated("Amount: ", ReadMode::Token, parse_positive_amount)?;
/// assert_eq!(value, Decimal::from(12));
/// # Ok::<(), payroll_tracker::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes `text` verbatim and flushes.
    pub fn write_text(&mut self, text: &str) -> PayrollResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `text` followed by a newline and flushes.
    pub fn write_line(&mut self, text: &str) -> PayrollResult<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads the next value according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns `EndOfInput` once the input stream is exhausted.
    pub fn read(&mut self, mode: ReadMode) -> PayrollResult<String> {
        match mode {
            ReadMode::Token => loop {
                let line = self.read_raw_line()?;
                let token = line.trim_start();
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            },
            ReadMode::Line => Ok(self.read_raw_line()?.trim_start().to_string()),
        }
    }

    /// Prompts until `validate` accepts the input.
    ///
    /// Each rejection prints its message on its own line and re-issues
    /// `prompt`. There is no attempt limit; the loop ends only on success,
    /// end of input or an I/O failure.
    pub fn collect_validated<T, F>(
        &mut self,
        prompt: &str,
        mode: ReadMode,
        mut validate: F,
    ) -> PayrollResult<T>
    where
        F: FnMut(&str) -> Result<T, InputRejection>,
    {
        loop {
            self.write_text(prompt)?;
            let value = self.read(mode)?;
            match validate(&value) {
                Ok(accepted) => return Ok(accepted),
                Err(rejection) => {
                    debug!(reason = ?rejection, input = %value, "Input rejected");
                    self.write_line(&rejection.to_string())?;
                }
            }
        }
    }

    fn read_raw_line(&mut self) -> PayrollResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output_of(console: &Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_token_read_skips_blank_lines_and_leading_whitespace() {
        let mut console = console("\n   \n  42\n");
        assert_eq!(console.read(ReadMode::Token).unwrap(), "42");
    }

    #[test]
    fn test_token_read_keeps_trailing_whitespace() {
        let mut console = console("42 \n");
        assert_eq!(console.read(ReadMode::Token).unwrap(), "42 ");
    }

    #[test]
    fn test_line_read_takes_single_line() {
        let mut console = console("\nAnn\n");
        assert_eq!(console.read(ReadMode::Line).unwrap(), "");
        assert_eq!(console.read(ReadMode::Line).unwrap(), "Ann");
    }

    #[test]
    fn test_line_read_trims_leading_whitespace_and_crlf() {
        let mut console = console("   Ann Lee\r\n");
        assert_eq!(console.read(ReadMode::Line).unwrap(), "Ann Lee");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = console("7");
        assert_eq!(console.read(ReadMode::Token).unwrap(), "7");
    }

    #[test]
    fn test_end_of_input() {
        let mut console = console("\n\n");
        assert!(matches!(
            console.read(ReadMode::Token),
            Err(PayrollError::EndOfInput)
        ));
    }

    #[test]
    fn test_collect_validated_reprompts_after_rejection() {
        let mut console = console("no\nyes\n");
        let value = console
            .collect_validated("Say yes: ", ReadMode::Token, |s| {
                if s == "yes" {
                    Ok(true)
                } else {
                    Err(InputRejection::InvalidChoice)
                }
            })
            .unwrap();

        assert!(value);
        assert_eq!(
            output_of(&console),
            "Say yes: Invalid choice! Please enter a number between 1 and 5.\nSay yes: "
        );
    }

    #[test]
    fn test_collect_validated_propagates_end_of_input() {
        let mut console = console("bad\n");
        let result: PayrollResult<()> = console
            .collect_validated("> ", ReadMode::Token, |_| Err(InputRejection::MalformedId));
        assert!(matches!(result, Err(PayrollError::EndOfInput)));
    }
}
