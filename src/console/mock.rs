//! # Scripted Input
//!
//! Utilities for driving prompts without a terminal.
//!
//! A [`ScriptedInput`] is a queue of pre-recorded answers. Hand it to a
//! [`Console`](crate::console::Console) in place of stdin, run the code under
//! test, then call [`ScriptedInput::verify`] to make sure every answer was
//! actually asked for.
//!
//! ```ignore
//! let mut script = ScriptedInput::new();
//! script.expect_line("1").expect_line("2").expect_line("e");
//!
//! let mut console = Console::new(&mut script, Vec::new());
//! let order = build_order(&mut console, &menu)?;
//!
//! script.verify(); // Panics if any answer was left unread
//! ```
//!
//! When the queue runs dry the source reports end of input, which the prompts
//! turn into [`ConsoleError::InputClosed`](crate::console::ConsoleError::InputClosed).
//! Tests use that to check what happens when a customer walks away mid-order.

use crate::console::InputSource;
use std::collections::VecDeque;
use std::io;

/// An [`InputSource`] that replays queued lines.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    consumed: usize,
}

impl ScriptedInput {
    /// Creates a script with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a script from a list of answers, in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            consumed: 0,
        }
    }

    /// Queues one more answer.
    pub fn expect_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push_back(line.into());
        self
    }

    /// Answers not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Answers read so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Verifies that every queued answer was read.
    ///
    /// # Panics
    /// If any lines remain in the queue.
    pub fn verify(&self) {
        if !self.lines.is_empty() {
            panic!(
                "ScriptedInput has {} unread line(s): {:?}",
                self.lines.len(),
                self.lines
            );
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.consumed += 1;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_lines_in_order() {
        let mut script = ScriptedInput::from_lines(["a", "b"]);
        assert_eq!(script.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(script.next_line().unwrap(), None);
        assert_eq!(script.consumed(), 2);
        script.verify();
    }

    #[test]
    #[should_panic(expected = "1 unread line(s)")]
    fn test_verify_panics_on_leftovers() {
        let mut script = ScriptedInput::new();
        script.expect_line("yes");
        script.verify();
    }
}
