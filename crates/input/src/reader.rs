//! Line-oriented input source.

use std::io::{self, BufRead};

use thiserror::Error;

/// A failure to obtain the next line of input. Both variants end the game.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("input ended before the game was over")]
    Eof,
}

/// Reads one line per call from any buffered source (stdin, a file, a test cursor).
pub struct LineReader<R: BufRead> {
    inner: R,
    line: String,
}

impl LineReader<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
        }
    }

    /// Next line without its `\n` / `\r\n` terminator.
    pub fn read_line(&mut self) -> Result<&str, InputError> {
        self.line.clear();
        let read = self.inner.read_line(&mut self.line)?;
        if read == 0 {
            return Err(InputError::Eof);
        }
        let trimmed = self.line.trim_end_matches(['\n', '\r']).len();
        self.line.truncate(trimmed);
        Ok(&self.line)
    }
}
