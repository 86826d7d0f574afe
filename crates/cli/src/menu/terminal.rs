//! The terminal operations menus need, and their crossterm implementation.

use std::io::{self, Write};

use crossterm::cursor::{self, MoveToColumn, MoveToPreviousLine};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::queue;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width assumed when the terminal size cannot be queried.
const FALLBACK_WIDTH: usize = 80;

/// Line-based drawing surface.
pub trait Screen {
    /// Stops the terminal from echoing keys and turning Ctrl+C into a signal.
    fn enter_raw_mode(&mut self) -> io::Result<()>;
    fn leave_raw_mode(&mut self) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
    /// Moves to the start of the row `rows` rows above the current one.
    fn move_up(&mut self, rows: usize) -> io::Result<()>;
    /// Blanks the current row and returns to its first column.
    fn clear_line(&mut self) -> io::Result<()>;
    /// Writes `line` and moves to the start of the next row.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// Blocking source of key presses.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

pub(crate) fn terminal_width() -> usize {
    match terminal::size() {
        Ok((width, _)) if width > 0 => usize::from(width),
        _ => FALLBACK_WIDTH,
    }
}

/// Longest prefix of `line` that occupies at most `columns` terminal columns.
pub(crate) fn fit_to_width(line: &str, columns: usize) -> &str {
    if line.width() <= columns {
        return line;
    }

    let mut used = 0;
    for (i, c) in line.char_indices() {
        used += c.width().unwrap_or(0);
        if used > columns {
            return &line[..i];
        }
    }

    line
}

/// [`Screen`] writing ANSI sequences to `W` through crossterm.
#[derive(Debug)]
pub struct CrosstermScreen<W: Write> {
    out: W,
}

impl<W: Write> CrosstermScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Screen for CrosstermScreen<W> {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Show)
    }

    fn move_up(&mut self, rows: usize) -> io::Result<()> {
        // The escape sequence treats a count of 0 as 1
        if rows == 0 {
            return Ok(());
        }

        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        queue!(self.out, MoveToPreviousLine(rows))
    }

    fn clear_line(&mut self) -> io::Result<()> {
        // Width is read on every call so a resized window is padded correctly
        let padding = " ".repeat(terminal_width().saturating_sub(1));
        queue!(self.out, MoveToColumn(0), Print(padding), MoveToColumn(0))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        // A wrapped line would occupy two rows and break the row count
        let visible = fit_to_width(line, terminal_width().saturating_sub(1));
        queue!(self.out, Print(visible), Print("\r\n"))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Reads key presses from the terminal.
///
/// Expects the screen to be in raw mode, which [`super::run_menu`] holds for
/// the whole menu.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports releases as separate events
                if key_event.kind != KeyEventKind::Release {
                    return Ok(key_event);
                }
            }
        }
    }
}
