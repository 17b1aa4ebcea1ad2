//! TerminalRenderer: writes text lines to a real terminal.
//!
//! The terminal stays on the main screen (no alternate screen) so the final
//! grid is still visible after the game ends. Each redraw moves back over the
//! previously drawn block, clears it line by line and prints the new one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Lines printed by the last `draw`, erased by the next one.
    drawn: usize,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            drawn: 0,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Switch the terminal to raw mode so single key presses are delivered.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Print one line that is kept above the redrawn block.
    pub fn print_line(&mut self, line: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(line))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()?;
        Ok(())
    }

    /// Replace the previously drawn block with `lines`.
    pub fn draw<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(self.drawn, lines, &mut self.buf)?;
        self.flush_buf()?;
        self.drawn = lines.len();
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode "erase the last `erase` lines, then print `lines`" into `out`.
///
/// Lines end in `\r\n` because raw mode does not translate `\n`.
pub fn encode_lines_into<S: AsRef<str>>(
    erase: usize,
    lines: &[S],
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(ClearType::CurrentLine))?;
    for _ in 0..erase {
        out.queue(cursor::MoveUp(1))?;
        out.queue(terminal::Clear(ClearType::CurrentLine))?;
    }

    for line in lines {
        out.queue(Print(line.as_ref()))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}
