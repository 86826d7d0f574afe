use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use cmaner_core::error::{Error, Result};

use super::terminal::terminal_width;
use super::{is_interrupt, Menu};

const CURSOR: &str = "_";
const ELLIPSIS: &str = "…";

/// Single line of free text. The result is trimmed.
///
/// Text wider than the terminal scrolls: only its end is shown, so the
/// cursor stays visible.
pub struct TextPrompt {
    prompt: String,
    text: String,
    required: bool,
    error: Option<String>,
    finished: bool,
    width: usize,
}

impl TextPrompt {
    #[must_use]
    pub fn new(prompt: &str, required: bool) -> Self {
        Self {
            prompt: prompt.to_string(),
            text: String::new(),
            required,
            error: None,
            finished: false,
            width: terminal_width(),
        }
    }

    /// Lays the prompt out for a terminal `width` columns wide.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// The typed text, shortened from the left to fit in `columns`.
    fn visible_text(&self, columns: usize) -> String {
        if self.text.width() <= columns {
            return self.text.clone();
        }

        let room = columns.saturating_sub(ELLIPSIS.width());
        let mut used = 0;
        let mut start = self.text.len();
        for (i, c) in self.text.char_indices().rev() {
            used += c.width().unwrap_or(0);
            if used > room {
                break;
            }
            start = i;
        }

        format!("{ELLIPSIS}{}", &self.text[start..])
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl Menu for TextPrompt {
    type Output = String;

    fn prepare_frame(&self) -> Vec<String> {
        let suffix = if self.required { "" } else { " [optional]" };
        let label = format!("{}{suffix}: ", self.prompt);
        // The last column is never written
        let columns = self
            .width
            .saturating_sub(1 + label.width() + CURSOR.width());
        let mut lines = vec![format!("{label}{}{CURSOR}", self.visible_text(columns))];

        if let Some(error) = &self.error {
            lines.push(error.clone());
        }

        lines
    }

    fn process_input(&mut self, key: KeyEvent) -> Result<()> {
        if is_interrupt(&key) {
            return Err(Error::Cancelled);
        }

        match key.code {
            KeyCode::Esc => return Err(Error::Cancelled),
            KeyCode::Enter => {
                if self.required && self.text.trim().is_empty() {
                    self.error = Some(format!("{} cannot be empty", self.prompt));
                } else {
                    self.finished = true;
                }
            }
            KeyCode::Backspace => {
                self.text.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.text.push(c);
                self.error = None;
            }
            _ => {}
        }

        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn result(&self) -> String {
        self.text.trim().to_string()
    }
}
