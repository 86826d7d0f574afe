//! Test doubles for the terminal.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use cmaner_cli::menu::{KeySource, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOp {
    EnterRawMode,
    LeaveRawMode,
    HideCursor,
    ShowCursor,
    MoveUp(usize),
    ClearLine,
    WriteLine(String),
    Flush,
}

/// Records every operation instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub ops: Vec<ScreenOp>,
}

impl RecordingScreen {
    pub fn count(&self, op: &ScreenOp) -> usize {
        self.ops.iter().filter(|o| *o == op).count()
    }

    pub fn moves(&self) -> Vec<usize> {
        self.ops
            .iter()
            .filter_map(|o| match o {
                ScreenOp::MoveUp(rows) => Some(*rows),
                _ => None,
            })
            .collect()
    }

    /// Every move up must cover exactly the rows written since the last one.
    pub fn assert_moves_match_written_rows(&self) {
        let mut rows_since_move = 0;
        for op in &self.ops {
            match op {
                ScreenOp::MoveUp(rows) => {
                    assert_eq!(*rows, rows_since_move, "ops: {:?}", self.ops);
                    rows_since_move = 0;
                }
                ScreenOp::WriteLine(_) => rows_since_move += 1,
                _ => {}
            }
        }
        assert_eq!(rows_since_move, 0, "rows left on screen: {:?}", self.ops);
    }

    /// Hidden first, shown exactly once after everything was drawn.
    pub fn assert_cursor_restored_once(&self) {
        assert_eq!(self.ops.first(), Some(&ScreenOp::HideCursor));
        assert_eq!(self.count(&ScreenOp::HideCursor), 1);
        assert_eq!(self.count(&ScreenOp::ShowCursor), 1);

        let shown_at = self.position(&ScreenOp::ShowCursor);
        assert!(self.ops[shown_at + 1..]
            .iter()
            .all(|o| matches!(o, ScreenOp::Flush | ScreenOp::LeaveRawMode)));
    }

    /// Raw mode is entered once before the first row and left once at the
    /// very end, so it covers every draw and every key read in between.
    pub fn assert_raw_mode_held(&self) {
        assert_eq!(self.count(&ScreenOp::EnterRawMode), 1, "ops: {:?}", self.ops);
        assert_eq!(self.count(&ScreenOp::LeaveRawMode), 1, "ops: {:?}", self.ops);

        let entered_at = self.position(&ScreenOp::EnterRawMode);
        let first_row = self
            .ops
            .iter()
            .position(|o| matches!(o, ScreenOp::WriteLine(_)));
        if let Some(first_row) = first_row {
            assert!(entered_at < first_row);
        }
        assert_eq!(self.ops.last(), Some(&ScreenOp::LeaveRawMode));
    }

    fn position(&self, op: &ScreenOp) -> usize {
        self.ops.iter().position(|o| o == op).unwrap()
    }
}

impl Screen for RecordingScreen {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::EnterRawMode);
        Ok(())
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::LeaveRawMode);
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::ShowCursor);
        Ok(())
    }

    fn move_up(&mut self, rows: usize) -> io::Result<()> {
        self.ops.push(ScreenOp::MoveUp(rows));
        Ok(())
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::ClearLine);
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.ops.push(ScreenOp::WriteLine(line.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::Flush);
        Ok(())
    }
}

/// Replays a fixed list of keys, then fails like a closed terminal.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
    pub reads: usize,
}

impl ScriptedKeys {
    pub fn new(keys: Vec<KeyEvent>) -> Self {
        Self {
            keys: keys.into(),
            reads: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.reads += 1;
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_c() -> KeyEvent {
    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
}

/// Keys for typing `text` followed by Enter.
pub fn typed(text: &str) -> Vec<KeyEvent> {
    text.chars()
        .map(|c| key(KeyCode::Char(c)))
        .chain(std::iter::once(key(KeyCode::Enter)))
        .collect()
}
