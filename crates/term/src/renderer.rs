//! ConsoleRenderer: writes prompts and scoreboards to a line-oriented console.
//!
//! Output is queued as crossterm commands into a scratch buffer and written to
//! the underlying writer in one go, so a scoreboard never appears half-drawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{style::Print, QueueableCommand};

use crate::core::Player;
use crate::scoreboard::render_scoreboard_into;

pub struct ConsoleRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
    table: String,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            table: String::with_capacity(1024),
        }
    }

    /// Write the full scoreboard for `players`.
    pub fn draw(&mut self, players: &[Player]) -> Result<()> {
        self.table.clear();
        render_scoreboard_into(players, &mut self.table);
        self.buf.clear();
        encode_text_into(&self.table, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write prompt or message text as-is.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        encode_text_into(text, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode plain text into `out` as crossterm print commands.
///
/// This builds the byte sequence without writing to any terminal.
pub fn encode_text_into(text: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(text))?;
    Ok(())
}
