//! Interactive menus and the loop that drives them.
//!
//! Every menu implements [`Menu`]: it renders itself as a list of lines,
//! consumes one key at a time and eventually yields a typed result.
//! [`run_menu`] redraws the menu in place below the cursor until it is
//! finished or the user aborts it.
//!
//! # User Interface
//!
//! All menus share these keys:
//! - Enter to accept
//! - Escape or Ctrl+C to abort (select menus first clear an active filter)
//!
//! List menus also support arrow keys to move and typing to filter.

pub mod command;
pub mod confirm;
pub mod runner;
pub mod select;
pub mod terminal;
pub mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cmaner_core::error::Result;

// Re-exports for convenience
pub use command::CommandMenu;
pub use confirm::ConfirmMenu;
pub use runner::run_menu;
pub use select::{SelectList, SelectMenu};
pub use terminal::{CrosstermKeys, CrosstermScreen, KeySource, Screen};
pub use text::TextPrompt;

/// Contract between a concrete menu and [`run_menu`].
pub trait Menu {
    type Output: Clone;

    /// Lines describing the current state. Must not write to the terminal.
    fn prepare_frame(&self) -> Vec<String>;

    /// Consumes one key event.
    ///
    /// # Errors
    ///
    /// Returns [`cmaner_core::error::Error::Cancelled`] when the key asks to
    /// abort the menu.
    fn process_input(&mut self, key: KeyEvent) -> Result<()>;

    fn is_finished(&self) -> bool;

    /// The menu's answer. Only meaningful once [`Menu::is_finished`] is true.
    fn result(&self) -> Self::Output;
}

/// Ctrl+C arrives as a key while the terminal is in raw mode.
#[must_use]
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Direction to cycle through entries of a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}
