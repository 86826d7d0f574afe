use crossterm::event::{KeyCode, KeyEvent};
use itertools::Itertools;

use cmaner_core::command_definitions::{CommandLocation, Storage};
use cmaner_core::error::{Error, Result};

use super::select::{SelectList, LIST_HINT};
use super::{is_interrupt, Menu};

const CATEGORY_HINT: &str = "Enter/Right: Open category";
const COMMAND_HINT: &str = "Left: Back to categories";

/// Browses categories, then the commands of the opened category.
///
/// Categories without commands are not listed.
pub struct CommandMenu {
    /// Storage index and command labels of each listed category
    categories: Vec<(usize, String, Vec<String>)>,
    category_list: SelectList,
    /// Position in `categories` and the list of its commands
    opened: Option<(usize, SelectList)>,
    selection: Option<CommandLocation>,
}

impl CommandMenu {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        let categories: Vec<(usize, String, Vec<String>)> = storage
            .categories
            .iter()
            .enumerate()
            .filter(|(_, category)| !category.commands.is_empty())
            .map(|(i, category)| {
                let labels = category.commands.iter().map(ToString::to_string).collect();
                (i, category.to_string(), labels)
            })
            .collect();

        let category_list = SelectList::new(categories.iter().map(|(_, label, _)| label.clone()).collect());

        Self {
            categories,
            category_list,
            opened: None,
            selection: None,
        }
    }

    fn open_selected_category(&mut self) {
        if let Some(position) = self.category_list.selected() {
            let labels = self.categories[position].2.clone();
            self.opened = Some((position, SelectList::new(labels)));
        }
    }

    fn process_category_key(&mut self, key: &KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                if !self.category_list.clear_filter() {
                    return Err(Error::Cancelled);
                }
            }
            KeyCode::Enter | KeyCode::Right => self.open_selected_category(),
            _ => {
                self.category_list.handle_key(key);
            }
        }

        Ok(())
    }

    fn process_command_key(&mut self, key: &KeyEvent) -> Result<()> {
        let Some((position, commands)) = self.opened.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => {
                if !commands.clear_filter() {
                    return Err(Error::Cancelled);
                }
            }
            KeyCode::Left => self.opened = None,
            KeyCode::Enter => {
                self.selection = commands.selected().map(|command| CommandLocation {
                    category: self.categories[*position].0,
                    command,
                });
            }
            _ => {
                commands.handle_key(key);
            }
        }

        Ok(())
    }
}

impl Menu for CommandMenu {
    type Output = CommandLocation;

    fn prepare_frame(&self) -> Vec<String> {
        let mut lines = Vec::new();

        match &self.opened {
            None => {
                lines.push("Select a category".to_string());
                self.category_list.render_into(&mut lines);
                lines.push([LIST_HINT, CATEGORY_HINT].iter().join("   "));
            }
            Some((position, commands)) => {
                lines.push(format!("Select a command from {}", self.categories[*position].1));
                commands.render_into(&mut lines);
                lines.push([LIST_HINT, COMMAND_HINT].iter().join("   "));
            }
        }

        lines
    }

    fn process_input(&mut self, key: KeyEvent) -> Result<()> {
        if is_interrupt(&key) {
            return Err(Error::Cancelled);
        }

        if self.opened.is_some() {
            self.process_command_key(&key)
        } else {
            self.process_category_key(&key)
        }
    }

    fn is_finished(&self) -> bool {
        self.selection.is_some()
    }

    fn result(&self) -> CommandLocation {
        self.selection.unwrap_or(CommandLocation {
            category: 0,
            command: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmaner_core::command_definitions::{Category, Command};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn command(text: &str) -> Command {
        Command {
            command_text: text.to_string(),
            ..Command::default()
        }
    }

    fn create_test_storage() -> Storage {
        Storage {
            categories: vec![
                Category {
                    name: "docker".to_string(),
                    description: None,
                    commands: vec![command("docker ps"), command("docker images")],
                },
                Category {
                    name: "empty".to_string(),
                    description: None,
                    commands: vec![],
                },
                Category {
                    name: "git".to_string(),
                    description: None,
                    commands: vec![command("git status"), command("git log")],
                },
            ],
        }
    }

    #[test]
    fn test_empty_categories_are_hidden() {
        let menu = CommandMenu::new(&create_test_storage());
        let frame = menu.prepare_frame();
        assert_eq!(
            frame[..3],
            [
                "Select a category".to_string(),
                "> docker (2 commands)".to_string(),
                "  git (2 commands)".to_string(),
            ]
        );
        assert_eq!(frame.len(), 4);
    }

    #[test]
    fn test_select_command_in_second_listed_category() {
        let mut menu = CommandMenu::new(&create_test_storage());
        menu.process_input(key(KeyCode::Down)).unwrap();
        menu.process_input(key(KeyCode::Enter)).unwrap();
        assert!(!menu.is_finished());
        assert_eq!(menu.prepare_frame()[0], "Select a command from git (2 commands)");

        menu.process_input(key(KeyCode::Down)).unwrap();
        menu.process_input(key(KeyCode::Enter)).unwrap();

        assert!(menu.is_finished());
        // Storage index skips the hidden empty category
        assert_eq!(
            menu.result(),
            CommandLocation {
                category: 2,
                command: 1
            }
        );
    }

    #[test]
    fn test_left_returns_to_categories() {
        let mut menu = CommandMenu::new(&create_test_storage());
        menu.process_input(key(KeyCode::Right)).unwrap();
        menu.process_input(key(KeyCode::Left)).unwrap();
        assert_eq!(menu.prepare_frame()[0], "Select a category");
    }

    #[test]
    fn test_escape_cancels_from_either_level() {
        let mut menu = CommandMenu::new(&create_test_storage());
        assert!(matches!(
            menu.process_input(key(KeyCode::Esc)),
            Err(Error::Cancelled)
        ));

        let mut menu = CommandMenu::new(&create_test_storage());
        menu.process_input(key(KeyCode::Enter)).unwrap();
        assert!(matches!(
            menu.process_input(key(KeyCode::Esc)),
            Err(Error::Cancelled)
        ));
    }

    #[test]
    fn test_filter_commands() {
        let mut menu = CommandMenu::new(&create_test_storage());
        menu.process_input(key(KeyCode::Enter)).unwrap();
        for c in "img".chars() {
            menu.process_input(key(KeyCode::Char(c))).unwrap();
        }
        menu.process_input(key(KeyCode::Enter)).unwrap();

        assert_eq!(
            menu.result(),
            CommandLocation {
                category: 0,
                command: 1
            }
        );
    }
}
