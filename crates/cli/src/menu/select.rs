use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use cmaner_core::error::{Error, Result};

use super::CycleDirection::{self, Down, Up};
use super::{is_interrupt, Menu};

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// Keys shown under every list.
pub const LIST_HINT: &str = "Up/Down: Move   Enter: Select   Esc: Cancel   Type to filter";

/// A cursor over a list of labels, narrowed by a fuzzy filter.
///
/// Positions handed out by [`SelectList::selected`] always refer to the
/// unfiltered list.
pub struct SelectList {
    labels: Vec<String>,
    visible: Vec<usize>,
    cursor: usize,
    filter: String,
    matcher: SkimMatcherV2,
}

impl SelectList {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let visible = (0..labels.len()).collect();
        Self {
            labels,
            visible,
            cursor: 0,
            filter: String::new(),
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Index of the highlighted label in the unfiltered list.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Moves the cursor, wrapping around at both ends.
    pub fn move_selection(&mut self, direction: CycleDirection) {
        let count = self.visible.len();
        if count == 0 {
            return;
        }

        self.cursor = match direction {
            Up if self.cursor == 0 => count - 1,
            Up => self.cursor - 1,
            Down => (self.cursor + 1) % count,
        };
    }

    /// Returns false when there was no filter to clear.
    pub fn clear_filter(&mut self) -> bool {
        if self.filter.is_empty() {
            return false;
        }

        self.filter.clear();
        self.refilter();
        true
    }

    /// Handles movement and filter editing. Returns false for keys the list
    /// does not use.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.move_selection(Up),
            KeyCode::Down | KeyCode::Tab => self.move_selection(Down),
            KeyCode::Backspace => {
                if self.filter.pop().is_none() {
                    return false;
                }
                self.refilter();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.filter.push(c);
                self.refilter();
            }
            _ => return false,
        }

        true
    }

    fn refilter(&mut self) {
        self.visible = self
            .labels
            .iter()
            .enumerate()
            .filter(|(_, label)| {
                self.filter.is_empty() || self.matcher.fuzzy_match(label, &self.filter).is_some()
            })
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
    }

    /// Appends one row per visible label, plus the filter and an empty-state
    /// row when relevant.
    pub fn render_into(&self, lines: &mut Vec<String>) {
        if self.visible.is_empty() {
            lines.push(format!("{UNSELECTED_MARKER}No matching entries!"));
        }

        for (position, &index) in self.visible.iter().enumerate() {
            let marker = if position == self.cursor {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            lines.push(format!("{marker}{}", self.labels[index]));
        }

        if !self.filter.is_empty() {
            lines.push(format!("Filter: {}", self.filter));
        }
    }
}

/// Picks one entry out of a list. The result is the entry's index.
pub struct SelectMenu {
    title: String,
    list: SelectList,
    selection: Option<usize>,
}

impl SelectMenu {
    #[must_use]
    pub fn new(title: &str, labels: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            list: SelectList::new(labels),
            selection: None,
        }
    }
}

impl Menu for SelectMenu {
    type Output = usize;

    fn prepare_frame(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        self.list.render_into(&mut lines);
        lines.push(LIST_HINT.to_string());
        lines
    }

    fn process_input(&mut self, key: KeyEvent) -> Result<()> {
        if is_interrupt(&key) {
            return Err(Error::Cancelled);
        }

        match key.code {
            KeyCode::Esc => {
                if !self.list.clear_filter() {
                    return Err(Error::Cancelled);
                }
            }
            KeyCode::Enter => self.selection = self.list.selected(),
            _ => {
                self.list.handle_key(&key);
            }
        }

        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.selection.is_some()
    }

    fn result(&self) -> usize {
        self.selection.unwrap_or_default()
    }
}
