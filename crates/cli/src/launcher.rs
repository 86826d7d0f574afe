//! The actions reachable from the command line.
//!
//! Each action composes menus with [`run_menu`] and, for the run actions,
//! hands the chosen command to [`run_command`]. An aborted menu always prints
//! `Aborted` and leaves the storage untouched.

use std::io::Write;

use log::{debug, info};

use cmaner_core::command_definitions::{Category, Command, Storage};
use cmaner_core::error::{Error, Result};
use cmaner_core::execution::{run_command, ExecutionContext};
use cmaner_core::file_handling::{validate_short_call, write_storage};

use crate::menu::{
    run_menu, CommandMenu, ConfirmMenu, KeySource, Menu, Screen, SelectMenu, TextPrompt,
};

pub const HELP: &str = "\
Cmaner - command manager
Usage:
cmaner - run menu
cmaner add category - add category
cmaner add command - add command
cmaner rm category - remove category
cmaner rm command - remove command
cmaner help - show this help
cmaner <short call> - run command
";

const NO_CATEGORIES: &str = "No categories found, run [help] to see how to add one";
const NO_COMMANDS: &str = "No commands found, run [help] to see how to add one";
const ABORTED: &str = "Aborted";

/// Writes the usage text.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn write_help<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(HELP.as_bytes())?;
    Ok(())
}

/// One interactive session over the loaded storage.
pub struct Launcher<S: Screen, K: KeySource, W: Write> {
    storage: Storage,
    storage_path: String,
    context: ExecutionContext,
    screen: S,
    keys: K,
    out: W,
}

impl<S: Screen, K: KeySource, W: Write> Launcher<S, K, W> {
    pub fn new(
        storage: Storage,
        storage_path: String,
        context: ExecutionContext,
        screen: S,
        keys: K,
        out: W,
    ) -> Self {
        Self {
            storage,
            storage_path,
            context,
            screen,
            keys,
            out,
        }
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    fn aborted(&mut self) -> Result<()> {
        self.say(ABORTED)
    }

    fn show<M: Menu>(&mut self, menu: M) -> Result<Option<M::Output>> {
        run_menu(menu, &mut self.screen, &mut self.keys)
    }

    /// Asks for one line of text and echoes the answer, since the prompt
    /// itself is erased when the menu ends.
    fn ask(&mut self, prompt: &str, required: bool) -> Result<Option<String>> {
        let answer = self.show(TextPrompt::new(prompt, required))?;
        if let Some(answer) = &answer {
            self.say(&format!("{prompt}: {answer}"))?;
        }
        Ok(answer)
    }

    fn ask_short_call(&mut self) -> Result<Option<Option<String>>> {
        loop {
            let Some(short_call) = self.ask("Enter short call", false)? else {
                return Ok(None);
            };

            if short_call.is_empty() {
                return Ok(Some(None));
            }

            let problem = match validate_short_call(&short_call) {
                Err(e) => Some(e),
                Ok(()) if self.storage.find_by_short_call(&short_call).is_some() => {
                    Some(Error::NonUniqueShortCall(short_call.clone()))
                }
                Ok(()) => None,
            };

            match problem {
                Some(e) => self.say(&e.to_string())?,
                None => return Ok(Some(Some(short_call))),
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        debug!("Saving storage to `{}`", self.storage_path);
        write_storage(&self.storage_path, &self.storage)
    }

    fn pick_category(&mut self) -> Result<Option<usize>> {
        let labels = self
            .storage
            .categories
            .iter()
            .map(ToString::to_string)
            .collect();
        self.show(SelectMenu::new("Select a category", labels))
    }

    pub fn add_category(&mut self) -> Result<()> {
        let Some(name) = self.ask("Enter category name", true)? else {
            return self.aborted();
        };
        let Some(description) = self.ask("Enter description", false)? else {
            return self.aborted();
        };

        if self.show(ConfirmMenu::new("Are you sure?"))? != Some(true) {
            return self.aborted();
        }

        self.storage.categories.push(Category {
            name: name.clone(),
            description: non_empty(description),
            commands: Vec::new(),
        });
        self.save()?;
        info!("Added category `{name}`");
        self.say(&format!("Added {name}"))
    }

    pub fn remove_category(&mut self) -> Result<()> {
        if self.storage.categories.is_empty() {
            return self.say(NO_CATEGORIES);
        }

        let Some(index) = self.pick_category()? else {
            return self.aborted();
        };

        let command_count = self.storage.categories[index].commands.len();
        let question = format!("Are you sure? it has {command_count} commands");
        if self.show(ConfirmMenu::new(&question))? != Some(true) {
            return self.aborted();
        }

        match self.storage.remove_category(index) {
            Some(category) => {
                self.save()?;
                info!("Removed category `{}`", category.name);
                self.say(&format!("Removed {}", category.name))
            }
            None => self.say("Could not find category"),
        }
    }

    pub fn add_command(&mut self) -> Result<()> {
        if self.storage.categories.is_empty() {
            return self.say(NO_CATEGORIES);
        }

        let Some(category_index) = self.pick_category()? else {
            return self.aborted();
        };
        let category_name = self.storage.categories[category_index].name.clone();
        self.say(&format!("Selected category {category_name}"))?;

        let Some(title) = self.ask("Enter command title", false)? else {
            return self.aborted();
        };
        let Some(command_text) = self.ask("Enter command text", true)? else {
            return self.aborted();
        };
        let Some(working_directory) = self.ask("Enter working directory", false)? else {
            return self.aborted();
        };
        let Some(description) = self.ask("Enter description", false)? else {
            return self.aborted();
        };
        let Some(short_call) = self.ask_short_call()? else {
            return self.aborted();
        };

        let Some(admin_required) = self.show(ConfirmMenu::new("Admin required to run?"))? else {
            return self.aborted();
        };
        let admin_answer = if admin_required { "Yes" } else { "No" };
        self.say(&format!("Admin required: {admin_answer}"))?;

        if self.show(ConfirmMenu::new("Are you sure?"))? != Some(true) {
            return self.aborted();
        }

        let command = Command {
            title: non_empty(title),
            command_text,
            working_directory: non_empty(working_directory),
            description: non_empty(description),
            short_call,
            admin_required,
        };
        let message = format!("Added {}", command.command_text);

        self.storage.categories[category_index].commands.push(command);
        self.save()?;
        info!("Added command to `{category_name}`");
        self.say(&message)
    }

    pub fn remove_command(&mut self) -> Result<()> {
        if !self.storage.has_commands() {
            return self.say(NO_COMMANDS);
        }

        let menu = CommandMenu::new(&self.storage);
        let Some(location) = self.show(menu)? else {
            return self.aborted();
        };

        if self.show(ConfirmMenu::new("Are you sure?"))? != Some(true) {
            return self.aborted();
        }

        match self.storage.remove_command(location) {
            Some(command) => {
                self.save()?;
                self.say(&format!("Removed {}", command.command_text))
            }
            None => self.say("Could not find category"),
        }
    }

    /// Lets the user browse to a command and runs it.
    pub async fn run_from_menu(&mut self) -> Result<()> {
        if self.storage.categories.is_empty() {
            return self.say(NO_CATEGORIES);
        }

        if !self.storage.has_commands() {
            return self.say(NO_COMMANDS);
        }

        let menu = CommandMenu::new(&self.storage);
        let Some(location) = self.show(menu)? else {
            return Ok(());
        };

        if let Some(command) = self.storage.command(location).cloned() {
            run_command(&self.context, &command, &mut self.out).await;
        }

        Ok(())
    }

    /// Runs the command registered under `short_call`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShortCallNotFound`] when no command uses it.
    pub async fn run_short_call(&mut self, short_call: &str) -> Result<()> {
        let command = self
            .storage
            .find_by_short_call(short_call)
            .cloned()
            .ok_or_else(|| Error::ShortCallNotFound(short_call.to_string()))?;

        run_command(&self.context, &command, &mut self.out).await;
        Ok(())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    }

    #[test]
    fn test_help_lists_every_action() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();
        let help = String::from_utf8(out).unwrap();

        for action in ["add category", "add command", "rm category", "rm command", "help"] {
            assert!(help.contains(&format!("cmaner {action}")));
        }
    }
}
