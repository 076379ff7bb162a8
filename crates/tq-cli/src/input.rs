//! Line-oriented input sources for the interaction loop.

use std::io::{self, BufRead, StdinLock};

/// Something the interaction loop can read answers from.
pub trait InputSource {
    /// Read the next line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, decoding invalid UTF-8 lossily.
pub struct ReaderInput<R> {
    reader: R,
    buf: Vec<u8>,
}

/// Reads from the process's standard input.
pub type StdinInput = ReaderInput<StdinLock<'static>>;

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl StdinInput {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for ReaderInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed list of lines, then reports end of input.
#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_input_splits_lines() {
        let mut input = ReaderInput::new(&b"1\r\nend\nlast"[..]);
        assert_eq!(input.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("end"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn reader_input_decodes_invalid_utf8_lossily() {
        let mut input = ReaderInput::new(&b"\xff\xfe\n2\n"[..]);
        assert_eq!(
            input.read_line().unwrap().as_deref(),
            Some("\u{fffd}\u{fffd}")
        );
        assert_eq!(input.read_line().unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new(["1", "end"]);
        assert_eq!(input.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("end"));
        assert_eq!(input.read_line().unwrap(), None);
    }
}
