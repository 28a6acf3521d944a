use std::io::{self, BufRead, StdinLock};

/// A blocking source of response lines.
///
/// Prompts are written against this trait rather than stdin so a whole
/// session can be driven from a script in tests
/// (see [`ScriptedInput`](crate::console::mock::ScriptedInput)).
pub trait InputSource {
    /// Returns the next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Line source over any buffered reader.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineReader<StdinLock<'static>> {
    /// Reads the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strips_line_terminators_only() {
        let mut source = LineReader::new(Cursor::new("1\n  yes \r\nlast"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("1"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("  yes "));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut source = LineReader::new(Cursor::new("\n"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap(), None);
    }
}
