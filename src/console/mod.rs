//! Line-oriented prompting with retry-until-valid loops.
//!
//! # Main Components
//!
//! - [`Console`] - Pairs an [`InputSource`] with an output writer and offers the prompts
//! - [`InputSource`] - Where answers come from ([`LineReader`] for stdin)
//! - [`ConsoleError`] - The unrecoverable failures (closed input, I/O)
//!
//! # Testing
//!
//! See the [`mock`] module for [`ScriptedInput`](mock::ScriptedInput).

pub mod error;
pub mod mock;
pub mod source;

pub use error::*;
pub use source::*;

use std::fmt::Display;
use std::io::Write;
use tracing::debug;

pub const INVALID_CHOICE: &str = "INVALID CHOICE. PLEASE TRY AGAIN.";
pub const INVALID_INTEGER: &str = "INVALID INPUT. PLEASE ENTER A VALID INTEGER.";

/// The customer-facing terminal.
///
/// Prompts are written without a trailing newline and flushed before the
/// answer is read. Invalid answers print a fixed message and ask again; only
/// [`ConsoleError`]s escape.
#[derive(Debug)]
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: InputSource, W: Write> Console<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Borrows the output, e.g. to inspect a transcript written to a `Vec<u8>`.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Asks until the answer is one of `options`.
    ///
    /// An empty `options` slice accepts any answer. Matching is exact.
    pub fn prompt_choice<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
    ) -> Result<String, ConsoleError> {
        loop {
            let response = self.ask(prompt)?;
            if options.is_empty() || options.iter().any(|o| o.as_ref() == response) {
                return Ok(response);
            }
            debug!(%response, "Rejected choice");
            self.say(INVALID_CHOICE)?;
        }
    }

    /// Asks once and accepts whatever comes back.
    pub fn prompt_text(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.prompt_choice::<&str>(prompt, &[])
    }

    /// Asks until the answer parses as a signed integer.
    ///
    /// Surrounding whitespace is ignored. Range checks belong to the caller.
    pub fn prompt_integer(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        loop {
            let response = self.ask(prompt)?;
            match response.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(%response, error = %e, "Rejected integer");
                    self.say(INVALID_INTEGER)?;
                }
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.input.next_line()?.ok_or(ConsoleError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::ScriptedInput;

    fn transcript(console: Console<&mut ScriptedInput, Vec<u8>>) -> String {
        let (_, output) = console.into_parts();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_choice_retries_until_valid() {
        let mut script = ScriptedInput::from_lines(["4", "Yes", "yes"]);
        let mut console = Console::new(&mut script, Vec::new());

        let answer = console.prompt_choice("Go? ", &["yes", "no"]).unwrap();
        assert_eq!(answer, "yes");

        let out = transcript(console);
        assert_eq!(out.matches(INVALID_CHOICE).count(), 2);
        assert_eq!(out.matches("Go? ").count(), 3);
        script.verify();
    }

    #[test]
    fn test_text_accepts_anything() {
        let mut script = ScriptedInput::from_lines([""]);
        let mut console = Console::new(&mut script, Vec::new());
        assert_eq!(console.prompt_text("Name: ").unwrap(), "");
        assert_eq!(console.output().as_slice(), b"Name: ");
        script.verify();
    }

    #[test]
    fn test_integer_retries_on_garbage() {
        let mut script = ScriptedInput::from_lines(["two", "2.5", " -3 "]);
        let mut console = Console::new(&mut script, Vec::new());

        assert_eq!(console.prompt_integer("Qty: ").unwrap(), -3);
        assert_eq!(transcript(console).matches(INVALID_INTEGER).count(), 2);
        script.verify();
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let mut script = ScriptedInput::from_lines(["maybe"]);
        let mut console = Console::new(&mut script, Vec::new());

        let err = console.prompt_choice("Go? ", &["yes", "no"]).unwrap_err();
        assert!(matches!(err, ConsoleError::InputClosed));
    }
}
