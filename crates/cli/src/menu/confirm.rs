use crossterm::event::{KeyCode, KeyEvent};

use cmaner_core::error::{Error, Result};

use super::{is_interrupt, Menu};

/// Yes/no question. Starts on "Yes".
pub struct ConfirmMenu {
    question: String,
    confirmed: bool,
    finished: bool,
}

impl ConfirmMenu {
    #[must_use]
    pub fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            confirmed: true,
            finished: false,
        }
    }

    fn answer(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
        self.finished = true;
    }
}

impl Menu for ConfirmMenu {
    type Output = bool;

    fn prepare_frame(&self) -> Vec<String> {
        let choices = if self.confirmed {
            "> [Y]es     [n]o"
        } else {
            "  [Y]es   > [n]o"
        };

        vec![self.question.clone(), choices.to_string()]
    }

    fn process_input(&mut self, key: KeyEvent) -> Result<()> {
        if is_interrupt(&key) {
            return Err(Error::Cancelled);
        }

        match key.code {
            KeyCode::Esc => return Err(Error::Cancelled),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.confirmed = !self.confirmed;
            }
            KeyCode::Char('y' | 'Y') => self.answer(true),
            KeyCode::Char('n' | 'N') => self.answer(false),
            KeyCode::Enter => self.finished = true,
            _ => {}
        }

        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn result(&self) -> bool {
        self.confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_accepts_default_yes() {
        let mut menu = ConfirmMenu::new("Are you sure?");
        menu.process_input(key(KeyCode::Enter)).unwrap();
        assert!(menu.is_finished());
        assert!(menu.result());
    }

    #[test]
    fn test_toggle_then_enter_declines() {
        let mut menu = ConfirmMenu::new("Are you sure?");
        menu.process_input(key(KeyCode::Right)).unwrap();
        assert_eq!(menu.prepare_frame()[1], "  [Y]es   > [n]o");
        assert!(!menu.is_finished());

        menu.process_input(key(KeyCode::Enter)).unwrap();
        assert!(menu.is_finished());
        assert!(!menu.result());
    }

    #[test]
    fn test_letter_answers_immediately() {
        let mut menu = ConfirmMenu::new("Are you sure?");
        menu.process_input(key(KeyCode::Char('n'))).unwrap();
        assert!(menu.is_finished());
        assert!(!menu.result());

        let mut menu = ConfirmMenu::new("Are you sure?");
        menu.process_input(key(KeyCode::Left)).unwrap();
        menu.process_input(key(KeyCode::Char('Y'))).unwrap();
        assert!(menu.result());
    }

    #[test]
    fn test_abort_keys_cancel() {
        let mut menu = ConfirmMenu::new("Are you sure?");
        assert!(matches!(
            menu.process_input(key(KeyCode::Esc)),
            Err(Error::Cancelled)
        ));

        let mut menu = ConfirmMenu::new("Are you sure?");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(menu.process_input(ctrl_c), Err(Error::Cancelled)));
        assert!(!menu.is_finished());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut menu = ConfirmMenu::new("Are you sure?");
        menu.process_input(key(KeyCode::Char('x'))).unwrap();
        assert!(!menu.is_finished());
        assert_eq!(
            menu.prepare_frame(),
            ["Are you sure?", "> [Y]es     [n]o"]
        );
    }
}
